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

//! SM3 hashing and SM4 encryption (ECB and CBC with PKCS#7 padding), with a
//! text/hex facade for tools that move keys and ciphertext around as hex.
//!
//! ```
//! use smcodec::{sm3_hash, sm4_decrypt, sm4_encrypt, CipherMode, HexCase};
//!
//! assert_eq!(
//!     sm3_hash("abc", HexCase::Lower),
//!     "66c7f0f462eeedd9d1f2d46bdc10e4e24167c4875cf2f7a2297da02b8f4ba8e0"
//! );
//!
//! let key = "000102030405060708090a0b0c0d0e0f";
//! let ct = sm4_encrypt("Hello, SM4!", key, None, CipherMode::Ecb, HexCase::Lower).unwrap();
//! assert_eq!(sm4_decrypt(&ct, key, None, CipherMode::Ecb).unwrap(), "Hello, SM4!");
//! ```

pub mod codec;
pub mod sm3;
pub mod sm4;

pub use crate::codec::{
    decode_hex, encode_hex, generate_iv, generate_key, generate_key_with, sm3_hash,
    sm4_decrypt, sm4_decrypt_bytes, sm4_encrypt, sm4_encrypt_bytes, Algorithm, CodecError,
    CodecResult, HexCase, SmCrypto,
};
pub use crate::sm4::{CipherMode, Sm4CipherMode, Sm4Error};
