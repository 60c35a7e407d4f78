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

//! PKCS#7 padding to the 16-byte SM4 block.
//!
//! Unpadding is lax: only the final byte is consulted. If it names a pad
//! length in `1..=16` that fits the buffer, that many bytes are stripped
//! without checking their values; otherwise the buffer is returned whole.

use log::debug;

use super::cipher::SM4_BLOCK_SIZE;

/// Always appends between 1 and 16 bytes, so aligned input gains a full block.
pub fn pkcs7_pad(data: &[u8]) -> Vec<u8> {
    let pad_len = SM4_BLOCK_SIZE - (data.len() % SM4_BLOCK_SIZE);
    let mut padded = Vec::with_capacity(data.len() + pad_len);
    padded.extend_from_slice(data);
    padded.resize(data.len() + pad_len, pad_len as u8);
    padded
}

pub fn pkcs7_unpad(mut data: Vec<u8>) -> Vec<u8> {
    let n = match data.last() {
        Some(&n) => n as usize,
        None => return data,
    };
    if n == 0 || n > SM4_BLOCK_SIZE || n > data.len() {
        debug!("pkcs7: last byte {n:#04x} is not a pad length, leaving data unpadded");
        return data;
    }
    data.truncate(data.len() - n);
    data
}
