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

use std::fmt;

use log::trace;

use super::cipher::{Sm4Cipher, SM4_BLOCK_SIZE, SM4_KEY_SIZE};
use super::padding::{pkcs7_pad, pkcs7_unpad};
use crate::sm4::error::{Sm4Error, Sm4Result};

/// Block chaining strategy. Both modes pad with PKCS#7.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CipherMode {
    #[default]
    Ecb,
    Cbc,
}

impl fmt::Display for CipherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherMode::Ecb => f.write_str("ECB"),
            CipherMode::Cbc => f.write_str("CBC"),
        }
    }
}

#[derive(Debug)]
pub struct Sm4CipherMode {
    cipher: Sm4Cipher,
    mode: CipherMode,
}

type Block = [u8; SM4_BLOCK_SIZE];

fn block_xor(a: &Block, b: &Block) -> Block {
    let mut out: Block = [0; SM4_BLOCK_SIZE];
    for i in 0..SM4_BLOCK_SIZE {
        out[i] = a[i] ^ b[i];
    }
    out
}

fn to_block(chunk: &[u8]) -> Block {
    let mut block: Block = [0; SM4_BLOCK_SIZE];
    block.copy_from_slice(chunk);
    block
}

fn check_iv(iv: Option<&[u8]>) -> Sm4Result<Block> {
    match iv {
        Some(iv) if iv.len() == SM4_BLOCK_SIZE => Ok(to_block(iv)),
        _ => Err(Sm4Error::InvalidIVLength),
    }
}

impl Sm4CipherMode {
    pub fn new(key: &[u8], mode: CipherMode) -> Sm4Result<Sm4CipherMode> {
        if key.len() != SM4_KEY_SIZE {
            return Err(Sm4Error::InvalidKeyLength);
        }
        let mut k = [0u8; SM4_KEY_SIZE];
        k.copy_from_slice(key);
        Ok(Sm4CipherMode {
            cipher: Sm4Cipher::new(&k),
            mode,
        })
    }

    pub fn mode(&self) -> CipherMode {
        self.mode
    }

    /// `iv` is required for CBC and ignored for ECB.
    pub fn encrypt(&self, data: &[u8], iv: Option<&[u8]>) -> Sm4Result<Vec<u8>> {
        match self.mode {
            CipherMode::Ecb => Ok(self.ecb_encrypt(data)),
            CipherMode::Cbc => {
                let iv = check_iv(iv)?;
                Ok(self.cbc_encrypt(data, &iv))
            }
        }
    }

    pub fn decrypt(&self, data: &[u8], iv: Option<&[u8]>) -> Sm4Result<Vec<u8>> {
        if data.is_empty() || data.len() % SM4_BLOCK_SIZE != 0 {
            return Err(Sm4Error::InvalidCiphertextLength);
        }
        match self.mode {
            CipherMode::Ecb => Ok(self.ecb_decrypt(data)),
            CipherMode::Cbc => {
                let iv = check_iv(iv)?;
                Ok(self.cbc_decrypt(data, &iv))
            }
        }
    }

    fn ecb_encrypt(&self, data: &[u8]) -> Vec<u8> {
        let padded = pkcs7_pad(data);
        trace!("sm4 ecb: encrypting {} blocks", padded.len() / SM4_BLOCK_SIZE);

        let mut out: Vec<u8> = Vec::with_capacity(padded.len());
        for chunk in padded.chunks_exact(SM4_BLOCK_SIZE) {
            out.extend_from_slice(&self.cipher.encrypt_block(&to_block(chunk)));
        }
        out
    }

    fn ecb_decrypt(&self, data: &[u8]) -> Vec<u8> {
        trace!("sm4 ecb: decrypting {} blocks", data.len() / SM4_BLOCK_SIZE);

        let mut out: Vec<u8> = Vec::with_capacity(data.len());
        for chunk in data.chunks_exact(SM4_BLOCK_SIZE) {
            out.extend_from_slice(&self.cipher.decrypt_block(&to_block(chunk)));
        }
        pkcs7_unpad(out)
    }

    fn cbc_encrypt(&self, data: &[u8], iv: &Block) -> Vec<u8> {
        let padded = pkcs7_pad(data);
        trace!("sm4 cbc: encrypting {} blocks", padded.len() / SM4_BLOCK_SIZE);

        let mut out: Vec<u8> = Vec::with_capacity(padded.len());
        let mut vec_buf = *iv;
        for chunk in padded.chunks_exact(SM4_BLOCK_SIZE) {
            let enc = self.cipher.encrypt_block(&block_xor(&vec_buf, &to_block(chunk)));
            out.extend_from_slice(&enc);
            vec_buf = enc;
        }
        out
    }

    fn cbc_decrypt(&self, data: &[u8], iv: &Block) -> Vec<u8> {
        trace!("sm4 cbc: decrypting {} blocks", data.len() / SM4_BLOCK_SIZE);

        let mut out: Vec<u8> = Vec::with_capacity(data.len());
        let mut vec_buf = *iv;
        for chunk in data.chunks_exact(SM4_BLOCK_SIZE) {
            let ct = to_block(chunk);
            out.extend_from_slice(&block_xor(&vec_buf, &self.cipher.decrypt_block(&ct)));
            vec_buf = ct;
        }
        pkcs7_unpad(out)
    }
}

// Tests below
