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

//
// Sample 1
// Input:"abc"
// Output:66c7f0f4 62eeedd9 d1f2d46b dc10e4e2 4167c487 5cf2f7a2 297da02b 8f4ba8e0

// Sample 2
// Input:"abcdabcdabcdabcdabcdabcdabcdabcdabcdabcdabcdabcdabcdabcdabcdabcd"
// Output:debe9ff9 2275b8a1 38604889 c18e5a4d 6fdb70e5 387e5765 293dcba3 9c0c5732

use byteorder::{BigEndian, ByteOrder};

pub const SM3_BLOCK_SIZE: usize = 64;
pub const SM3_DIGEST_SIZE: usize = 32;

static IV: [u32; 8] = [
    0x7380_166f,
    0x4914_b2b9,
    0x1724_42d7,
    0xda8a_0600,
    0xa96f_30bc,
    0x1631_38aa,
    0xe38d_ee4d,
    0xb0fb_0e4e,
];

const T_0: u32 = 0x79cc_4519;
const T_1: u32 = 0x7a87_9d8a;

#[inline(always)]
fn t(j: usize) -> u32 {
    if j < 16 {
        T_0
    } else {
        T_1
    }
}

#[inline(always)]
fn ff(x: u32, y: u32, z: u32, j: usize) -> u32 {
    if j < 16 {
        x ^ y ^ z
    } else {
        (x & y) | (x & z) | (y & z)
    }
}

#[inline(always)]
fn gg(x: u32, y: u32, z: u32, j: usize) -> u32 {
    if j < 16 {
        x ^ y ^ z
    } else {
        (x & y) | (!x & z)
    }
}

#[inline(always)]
fn p0(x: u32) -> u32 {
    x ^ x.rotate_left(9) ^ x.rotate_left(17)
}

#[inline(always)]
fn p1(x: u32) -> u32 {
    x ^ x.rotate_left(15) ^ x.rotate_left(23)
}

/// Merkle-Damgard padding: `0x80`, zeros up to 56 mod 64, then the bit
/// length as a big-endian u64.
fn pad(data: &[u8]) -> Vec<u8> {
    let bit_len = (data.len() as u64).wrapping_mul(8);
    let pad_len = match (data.len() + 1) % SM3_BLOCK_SIZE {
        r if r <= 56 => 56 - r,
        r => SM3_BLOCK_SIZE + 56 - r,
    };

    let mut padded = Vec::with_capacity(data.len() + 1 + pad_len + 8);
    padded.extend_from_slice(data);
    padded.push(0x80);
    padded.resize(padded.len() + pad_len, 0x00);
    padded.extend_from_slice(&bit_len.to_be_bytes());
    debug_assert_eq!(padded.len() % SM3_BLOCK_SIZE, 0);
    padded
}

/// Message expansion of one 512-bit block into `W[0..68]` and `W'[0..64]`.
fn expand(block: &[u8]) -> ([u32; 68], [u32; 64]) {
    let mut w = [0u32; 68];
    let mut w1 = [0u32; 64];

    BigEndian::read_u32_into(block, &mut w[..16]);
    for j in 16..68 {
        w[j] = p1(w[j - 16] ^ w[j - 9] ^ w[j - 3].rotate_left(15))
            ^ w[j - 13].rotate_left(7)
            ^ w[j - 6];
    }
    for j in 0..64 {
        w1[j] = w[j] ^ w[j + 4];
    }
    (w, w1)
}

/// CF: the compression function, folding one block into `state`.
fn compress(state: &mut [u32; 8], block: &[u8]) {
    let (w, w1) = expand(block);
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for j in 0..64 {
        let a12 = a.rotate_left(12);
        let ss1 = a12
            .wrapping_add(e)
            .wrapping_add(t(j).rotate_left((j % 32) as u32))
            .rotate_left(7);
        let ss2 = ss1 ^ a12;
        let tt1 = ff(a, b, c, j)
            .wrapping_add(d)
            .wrapping_add(ss2)
            .wrapping_add(w1[j]);
        let tt2 = gg(e, f, g, j)
            .wrapping_add(h)
            .wrapping_add(ss1)
            .wrapping_add(w[j]);
        d = c;
        c = b.rotate_left(9);
        b = a;
        a = tt1;
        h = g;
        g = f.rotate_left(19);
        f = e;
        e = p0(tt2);
    }

    for (v, r) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *v ^= r;
    }
}

pub struct Sm3Hash {
    digest: [u32; 8],
    unhandle_msg: Vec<u8>,
}

impl Sm3Hash {
    pub fn new(data: &[u8]) -> Sm3Hash {
        Sm3Hash {
            digest: IV,
            unhandle_msg: data.to_vec(),
        }
    }

    /// Append more message bytes before the digest is taken.
    pub fn update(&mut self, data: &[u8]) {
        self.unhandle_msg.extend_from_slice(data);
    }

    pub fn get_hash(&self) -> [u8; SM3_DIGEST_SIZE] {
        let padded = pad(&self.unhandle_msg);
        let mut state = self.digest;
        for block in padded.chunks_exact(SM3_BLOCK_SIZE) {
            compress(&mut state, block);
        }

        let mut output = [0u8; SM3_DIGEST_SIZE];
        BigEndian::write_u32_into(&state, &mut output);
        output
    }
}

/// One-shot SM3 over `data`; always yields 32 bytes, including for empty input.
pub fn sm3_hash(data: &[u8]) -> [u8; SM3_DIGEST_SIZE] {
    Sm3Hash::new(data).get_hash()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lets_hash_1() {
        let hash = sm3_hash(b"abc");

        let standrad_hash: [u8; 32] = [
            0x66, 0xc7, 0xf0, 0xf4, 0x62, 0xee, 0xed, 0xd9, 0xd1, 0xf2, 0xd4, 0x6b, 0xdc, 0x10,
            0xe4, 0xe2, 0x41, 0x67, 0xc4, 0x87, 0x5c, 0xf2, 0xf7, 0xa2, 0x29, 0x7d, 0xa0, 0x2b,
            0x8f, 0x4b, 0xa8, 0xe0,
        ];
        assert_eq!(hash, standrad_hash);
    }

    #[test]
    fn lets_hash_2() {
        let mut sm3 = Sm3Hash::new(b"abcdabcdabcdabcdabcdabcdabcdabcd");
        sm3.update(b"abcdabcdabcdabcdabcdabcdabcdabcd");
        let hash = sm3.get_hash();

        let standrad_hash: [u8; 32] = [
            0xde, 0xbe, 0x9f, 0xf9, 0x22, 0x75, 0xb8, 0xa1, 0x38, 0x60, 0x48, 0x89, 0xc1, 0x8e,
            0x5a, 0x4d, 0x6f, 0xdb, 0x70, 0xe5, 0x38, 0x7e, 0x57, 0x65, 0x29, 0x3d, 0xcb, 0xa3,
            0x9c, 0x0c, 0x57, 0x32,
        ];
        assert_eq!(hash, standrad_hash);
    }

    #[test]
    fn get_hash_is_repeatable() {
        let mut sm3 = Sm3Hash::new(b"ab");
        sm3.update(b"c");
        let first = sm3.get_hash();
        assert_eq!(sm3.get_hash(), first);
        // taking the digest does not consume the buffered message
        sm3.update(b"d");
        assert_eq!(sm3.get_hash(), sm3_hash(b"abcd"));
    }

    #[test]
    fn pad_lengths() {
        for len in [0usize, 1, 55, 56, 63, 64, 65, 119, 120, 1000] {
            let padded = pad(&vec![0x61; len]);
            assert_eq!(padded.len() % SM3_BLOCK_SIZE, 0, "len {}", len);
            assert_eq!(padded[len], 0x80);
            // 0x80 plus the 8-byte length must fit
            assert_eq!(padded.len(), (len + 9 + 63) / 64 * 64, "len {}", len);
            let tail = &padded[padded.len() - 8..];
            assert_eq!(tail, &((len as u64) * 8).to_be_bytes());
        }
    }

    #[test]
    fn digest_size_is_fixed() {
        for len in [0usize, 1, 55, 56, 63, 64, 65, 1000] {
            assert_eq!(sm3_hash(&vec![0x5a; len]).len(), SM3_DIGEST_SIZE);
        }
    }

    #[test]
    fn single_bit_flip_changes_digest() {
        let msg = b"the quick brown fox jumps over the lazy dog".to_vec();
        let base = sm3_hash(&msg);
        for i in 0..msg.len() {
            for bit in 0..8 {
                let mut flipped = msg.clone();
                flipped[i] ^= 1 << bit;
                assert_ne!(sm3_hash(&flipped), base);
            }
        }
    }
}
