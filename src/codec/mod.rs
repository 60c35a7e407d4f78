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

//! Text and hex facade over SM3 and SM4.
//!
//! Inputs to encrypt and hash are UTF-8 text. Keys, IVs and ciphertext
//! travel as hex strings. Each SM4 call derives its round keys afresh; use
//! [`Sm4CipherMode`] directly to reuse a key schedule across many calls.

pub mod encoding;
pub mod error;
pub mod keygen;

use std::fmt;
use std::str::FromStr;

use log::debug;

pub use self::encoding::{decode_hex, encode_hex, HexCase};
pub use self::error::{CodecError, CodecResult};
pub use self::keygen::{generate_iv, generate_key, generate_key_with};

use crate::sm3::hash;
use crate::sm4::{CipherMode, Sm4CipherMode};

impl FromStr for CipherMode {
    type Err = CodecError;

    fn from_str(s: &str) -> CodecResult<Self> {
        match s.to_ascii_uppercase().as_str() {
            "ECB" => Ok(CipherMode::Ecb),
            "CBC" => Ok(CipherMode::Cbc),
            _ => Err(CodecError::UnknownMode),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    #[default]
    Sm3,
    Sm4,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Sm3 => f.write_str("SM3"),
            Algorithm::Sm4 => f.write_str("SM4"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = CodecError;

    fn from_str(s: &str) -> CodecResult<Self> {
        match s.to_ascii_uppercase().as_str() {
            "SM3" => Ok(Algorithm::Sm3),
            "SM4" => Ok(Algorithm::Sm4),
            _ => Err(CodecError::UnknownAlgorithm),
        }
    }
}

/// SM3 digest of the UTF-8 bytes of `text`, as 64 hex characters.
pub fn sm3_hash(text: &str, case: HexCase) -> String {
    debug!("sm3 hash: {} bytes", text.len());
    encode_hex(&hash::sm3_hash(text.as_bytes()), case)
}

pub fn sm4_encrypt_bytes(
    data: &[u8],
    key: &[u8],
    iv: Option<&[u8]>,
    mode: CipherMode,
) -> CodecResult<Vec<u8>> {
    let cipher = Sm4CipherMode::new(key, mode)?;
    Ok(cipher.encrypt(data, iv)?)
}

pub fn sm4_decrypt_bytes(
    data: &[u8],
    key: &[u8],
    iv: Option<&[u8]>,
    mode: CipherMode,
) -> CodecResult<Vec<u8>> {
    let cipher = Sm4CipherMode::new(key, mode)?;
    Ok(cipher.decrypt(data, iv)?)
}

// ECB never looks at the IV, so it is not decoded there either
fn decode_iv(iv_hex: Option<&str>, mode: CipherMode) -> CodecResult<Option<Vec<u8>>> {
    match mode {
        CipherMode::Ecb => Ok(None),
        CipherMode::Cbc => iv_hex.map(decode_hex).transpose(),
    }
}

/// Encrypts the UTF-8 bytes of `text` and returns the ciphertext as hex.
pub fn sm4_encrypt(
    text: &str,
    key_hex: &str,
    iv_hex: Option<&str>,
    mode: CipherMode,
    case: HexCase,
) -> CodecResult<String> {
    debug!("sm4 encrypt: mode {}, {} bytes", mode, text.len());
    let key = decode_hex(key_hex)?;
    let iv = decode_iv(iv_hex, mode)?;
    let ct = sm4_encrypt_bytes(text.as_bytes(), &key, iv.as_deref(), mode)?;
    Ok(encode_hex(&ct, case))
}

/// Decrypts hex ciphertext. Invalid UTF-8 in the recovered plaintext is
/// replaced with U+FFFD; use [`sm4_decrypt_bytes`] for binary data.
pub fn sm4_decrypt(
    cipher_hex: &str,
    key_hex: &str,
    iv_hex: Option<&str>,
    mode: CipherMode,
) -> CodecResult<String> {
    debug!("sm4 decrypt: mode {}, {} hex chars", mode, cipher_hex.len());
    let data = decode_hex(cipher_hex)?;
    let key = decode_hex(key_hex)?;
    let iv = decode_iv(iv_hex, mode)?;
    let pt = sm4_decrypt_bytes(&data, &key, iv.as_deref(), mode)?;
    Ok(String::from_utf8_lossy(&pt).into_owned())
}

/// Caller settings for repeated hash/encrypt/decrypt requests.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SmCrypto {
    algorithm: Algorithm,
    mode: CipherMode,
    case: HexCase,
    key: String,
    iv: Option<String>,
}

impl SmCrypto {
    pub fn new() -> SmCrypto {
        SmCrypto::default()
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_mode(mut self, mode: CipherMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_case(mut self, case: HexCase) -> Self {
        self.case = case;
        self
    }

    pub fn with_uppercase(self, uppercase: bool) -> Self {
        self.with_case(uppercase.into())
    }

    pub fn with_key<S: Into<String>>(mut self, key_hex: S) -> Self {
        self.key = key_hex.into();
        self
    }

    pub fn with_iv<S: Into<String>>(mut self, iv_hex: S) -> Self {
        self.iv = Some(iv_hex.into());
        self
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn mode(&self) -> CipherMode {
        self.mode
    }

    pub fn case(&self) -> HexCase {
        self.case
    }

    /// Back to defaults: SM3, ECB, lowercase, no key or IV.
    pub fn reset(&mut self) {
        *self = SmCrypto::default();
    }

    /// SM3 hashes `input`; SM4 encrypts it with the configured key and mode.
    pub fn encrypt(&self, input: &str) -> CodecResult<String> {
        match self.algorithm {
            Algorithm::Sm3 => Ok(sm3_hash(input, self.case)),
            Algorithm::Sm4 => sm4_encrypt(
                input,
                &self.key,
                self.iv.as_deref(),
                self.mode,
                self.case,
            ),
        }
    }

    pub fn decrypt(&self, input: &str) -> CodecResult<String> {
        match self.algorithm {
            Algorithm::Sm3 => Err(CodecError::HashNotReversible),
            Algorithm::Sm4 => sm4_decrypt(input, &self.key, self.iv.as_deref(), self.mode),
        }
    }
}

impl fmt::Debug for SmCrypto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmCrypto")
            .field("algorithm", &self.algorithm)
            .field("mode", &self.mode)
            .field("case", &self.case)
            .field("key", &"<redacted>")
            .field("iv", &self.iv.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
