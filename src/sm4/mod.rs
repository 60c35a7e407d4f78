// Copyright 2018 Cryptape Technology LLC.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

pub mod cipher;
pub mod cipher_mode;
pub mod error;
pub mod padding;

pub use self::cipher::{derive_round_keys, Sm4Cipher, SM4_BLOCK_SIZE, SM4_KEY_SIZE};
pub use self::cipher_mode::{CipherMode, Sm4CipherMode};
pub use self::error::{Sm4Error, Sm4Result};
