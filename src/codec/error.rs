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

use crate::sm4::error::Sm4Error;

pub type CodecResult<T> = Result<T, CodecError>;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    InvalidHexInput,
    UnknownMode,
    UnknownAlgorithm,
    HashNotReversible,
    Sm4(Sm4Error),
}

impl From<Sm4Error> for CodecError {
    fn from(e: Sm4Error) -> Self {
        CodecError::Sm4(e)
    }
}

impl From<CodecError> for &str {
    fn from(e: CodecError) -> Self {
        match e {
            CodecError::InvalidHexInput => "hex input must be an even number of [0-9a-fA-F]",
            CodecError::UnknownMode => "unknown cipher mode name, expected ECB or CBC",
            CodecError::UnknownAlgorithm => "unknown algorithm name, expected SM3 or SM4",
            CodecError::HashNotReversible => "SM3 is a hash and cannot be decrypted",
            CodecError::Sm4(e) => e.into(),
        }
    }
}

impl ::std::fmt::Debug for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> ::std::fmt::Result {
        write!(f, "{self}")
    }
}

impl error::Error for CodecError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            CodecError::Sm4(e) => Some(e),
            _ => None,
        }
    }
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let err_msg: &str = (*self).into();
        write!(f, "{err_msg}")
    }
}
