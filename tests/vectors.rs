//! Example vectors from GB/T 32905-2016 (SM3) and GB/T 32907-2016 (SM4).
use smcodec::sm3::sm3_hash;
use smcodec::sm4::Sm4Cipher;
use smcodec::{CipherMode, HexCase, Sm4CipherMode};

fn block(s: &str) -> [u8; 16] {
    let mut b = [0u8; 16];
    b.copy_from_slice(&hex::decode(s).unwrap());
    b
}

#[test]
fn sm3_example_1() {
    assert_eq!(
        hex::encode(sm3_hash(b"abc")),
        "66c7f0f462eeedd9d1f2d46bdc10e4e24167c4875cf2f7a2297da02b8f4ba8e0"
    );
}

#[test]
fn sm3_example_2() {
    let msg = "abcd".repeat(16);
    assert_eq!(
        hex::encode(sm3_hash(msg.as_bytes())),
        "debe9ff92275b8a138604889c18e5a4d6fdb70e5387e5765293dcba39c0c5732"
    );
    assert_eq!(
        smcodec::sm3_hash(&msg, HexCase::Upper),
        "DEBE9FF92275B8A138604889C18E5A4D6FDB70E5387E5765293DCBA39C0C5732"
    );
}

#[test]
fn sm3_empty_message() {
    assert_eq!(
        hex::encode(sm3_hash(b"")),
        "1ab21d8355cfa17f8e61194831e81a8f22bec8c728fefb747ed035eb5082aa2b"
    );
}

#[test]
fn sm4_example_1() {
    let key = block("0123456789abcdeffedcba9876543210");
    let cipher = Sm4Cipher::new(&key);
    let ct = cipher.encrypt_block(&key);
    assert_eq!(hex::encode(ct), "681edf34d206965e86b3e94f536e4246");
    assert_eq!(cipher.decrypt_block(&ct), key);
}

#[test]
#[ignore = "one million block encryptions"]
fn sm4_example_2() {
    let key = block("0123456789abcdeffedcba9876543210");
    let cipher = Sm4Cipher::new(&key);
    let mut data = key;
    for _ in 0..1_000_000 {
        data = cipher.encrypt_block(&data);
    }
    assert_eq!(hex::encode(data), "595298c7c6fd271f0402f804c33d3f66");
}

#[test]
fn sm4_ecb_first_block_is_raw_block() {
    let key = hex::decode("0123456789abcdeffedcba9876543210").unwrap();
    let cmode = Sm4CipherMode::new(&key, CipherMode::Ecb).unwrap();
    let ct = cmode.encrypt(&key, None).unwrap();
    assert_eq!(ct.len(), 32);
    assert_eq!(hex::encode(&ct[..16]), "681edf34d206965e86b3e94f536e4246");
    // the trailing block is a full block of padding
    let cipher = Sm4Cipher::new(&block("0123456789abcdeffedcba9876543210"));
    assert_eq!(ct[16..], cipher.encrypt_block(&[0x10; 16]));
}
