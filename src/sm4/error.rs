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

use std::error;
use std::fmt::Display;
use std::fmt::Formatter;

pub type Sm4Result<T> = Result<T, Sm4Error>;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Sm4Error {
    InvalidKeyLength,
    InvalidIVLength,
    InvalidCiphertextLength,
}

impl Sm4Error {
    fn message(&self) -> &'static str {
        match self {
            Sm4Error::InvalidKeyLength => "the key len of SM4 must be 16",
            Sm4Error::InvalidIVLength => "the iv len of SM4 CBC must be 16",
            Sm4Error::InvalidCiphertextLength => {
                "the ciphertext len of SM4 must be a positive multiple of 16"
            }
        }
    }
}

impl ::std::fmt::Debug for Sm4Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> ::std::fmt::Result {
        write!(f, "{self}")
    }
}

impl From<Sm4Error> for &str {
    fn from(e: Sm4Error) -> Self {
        e.message()
    }
}

impl error::Error for Sm4Error {}

impl Display for Sm4Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}
