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

use crate::codec::error::{CodecError, CodecResult};

/// Letter case of hex output: `Lower` gives `a-f`, `Upper` gives `A-F`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HexCase {
    #[default]
    Lower,
    Upper,
}

/// Maps an uppercase flag: `true` selects `Upper`.
impl From<bool> for HexCase {
    fn from(uppercase: bool) -> Self {
        if uppercase {
            HexCase::Upper
        } else {
            HexCase::Lower
        }
    }
}

pub fn encode_hex(data: &[u8], case: HexCase) -> String {
    match case {
        HexCase::Lower => ::hex::encode(data),
        HexCase::Upper => ::hex::encode_upper(data),
    }
}

/// Strict decode: odd lengths, whitespace and non-hex characters are rejected.
pub fn decode_hex(input: &str) -> CodecResult<Vec<u8>> {
    ::hex::decode(input).map_err(|_| CodecError::InvalidHexInput)
}
