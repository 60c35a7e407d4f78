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

//! Random key and IV generation.
//!
//! `generate_key` and `generate_iv` draw from [`SmallRng`], a fast
//! general-purpose generator seeded from the OS. It is **not** a
//! cryptographically secure source. Use [`generate_key_with`] with
//! [`rand::rngs::OsRng`] when the key protects real data.

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

use crate::sm4::SM4_BLOCK_SIZE;

/// `len` random bytes as lowercase hex (`2 * len` characters).
pub fn generate_key(len: usize) -> String {
    let mut rng = SmallRng::from_entropy();
    generate_key_with(&mut rng, len)
}

pub fn generate_key_with<R: RngCore + ?Sized>(rng: &mut R, len: usize) -> String {
    let mut key = vec![0u8; len];
    rng.fill_bytes(&mut key);
    ::hex::encode(key)
}

pub fn generate_iv() -> String {
    generate_key(SM4_BLOCK_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::{OsRng, StdRng};

    #[test]
    fn key_shape() {
        for len in [0, 1, 16, 32] {
            let key = generate_key(len);
            assert_eq!(key.len(), len * 2);
            assert!(key.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
            assert_eq!(::hex::decode(&key).unwrap().len(), len);
        }
        assert_eq!(generate_iv().len(), 32);
    }

    #[test]
    fn keys_differ() {
        assert_ne!(generate_key(16), generate_key(16));
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let a = generate_key_with(&mut StdRng::seed_from_u64(7), 16);
        let b = generate_key_with(&mut StdRng::seed_from_u64(7), 16);
        assert_eq!(a, b);
    }

    #[test]
    fn os_rng() {
        assert_eq!(generate_key_with(&mut OsRng, 16).len(), 32);
    }
}
