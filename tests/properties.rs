use proptest::prelude::*;

use smcodec::sm3::{sm3_hash, SM3_DIGEST_SIZE};
use smcodec::sm4::padding::{pkcs7_pad, pkcs7_unpad};
use smcodec::{CipherMode, HexCase, Sm4CipherMode};

proptest! {
    #[test]
    fn ecb_round_trip(data in proptest::collection::vec(any::<u8>(), 0..256), key in any::<[u8; 16]>()) {
        let cmode = Sm4CipherMode::new(&key, CipherMode::Ecb).unwrap();
        let ct = cmode.encrypt(&data, None).unwrap();
        prop_assert_eq!(ct.len() % 16, 0);
        prop_assert!(ct.len() > data.len());
        prop_assert_eq!(cmode.decrypt(&ct, None).unwrap(), data);
    }

    #[test]
    fn cbc_round_trip(
        data in proptest::collection::vec(any::<u8>(), 0..256),
        key in any::<[u8; 16]>(),
        iv in any::<[u8; 16]>(),
    ) {
        let cmode = Sm4CipherMode::new(&key, CipherMode::Cbc).unwrap();
        let ct = cmode.encrypt(&data, Some(&iv[..])).unwrap();
        prop_assert_eq!(cmode.decrypt(&ct, Some(&iv[..])).unwrap(), data);
    }

    #[test]
    fn text_round_trip(text in ".{0,64}", key in any::<[u8; 16]>(), iv in any::<[u8; 16]>()) {
        let key_hex = hex::encode(key);
        let iv_hex = hex::encode(iv);
        for mode in [CipherMode::Ecb, CipherMode::Cbc] {
            let ct = smcodec::sm4_encrypt(&text, &key_hex, Some(iv_hex.as_str()), mode, HexCase::Upper).unwrap();
            let pt = smcodec::sm4_decrypt(&ct, &key_hex, Some(iv_hex.as_str()), mode).unwrap();
            prop_assert_eq!(&pt, &text);
        }
    }

    #[test]
    fn pad_then_unpad(data in proptest::collection::vec(any::<u8>(), 0..100)) {
        let padded = pkcs7_pad(&data);
        prop_assert_eq!(padded.len() % 16, 0);
        prop_assert!(padded.len() - data.len() >= 1 && padded.len() - data.len() <= 16);
        prop_assert_eq!(pkcs7_unpad(padded), data);
    }

    #[test]
    fn sm3_is_deterministic(data in proptest::collection::vec(any::<u8>(), 0..300)) {
        let digest = sm3_hash(&data);
        prop_assert_eq!(digest.len(), SM3_DIGEST_SIZE);
        prop_assert_eq!(digest, sm3_hash(&data));
    }
}
