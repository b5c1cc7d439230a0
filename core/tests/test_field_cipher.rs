// # Field cipher tests

use proptest::prelude::*;

use karcher_core::crypto::{CryptoError, FieldCipher};

const KEY_HEX: &str = "00112233445566778899aabbccddeeff";

fn cipher() -> FieldCipher {
    FieldCipher::from_hex(KEY_HEX).unwrap()
}

#[test]
fn known_ciphertexts() {
    let c = cipher();
    assert_eq!(c.encrypt("86-12345"), "QFMZXJ7AkhjbH0QB9LT/Kg==");
    assert_eq!(c.encrypt(""), "AGV+oUBlWkR4J0dwXUIvrQ==");
    assert_eq!(c.encrypt("hello"), "nYbIYS4IXpOiNXlKcIr3qQ==");
}

#[test]
fn round_trip_representative_values() {
    let c = cipher();
    for value in [
        "",
        "secret",
        "86-12345",
        "user@example.com",
        r#"{"appApi":"https://eu.example","mqtt":"mqtts://m.example:8883"}"#,
        "exactly sixteen!",
        "ünïcödé ✓",
    ] {
        assert_eq!(c.decrypt(&c.encrypt(value)).unwrap(), value);
    }
}

#[test]
fn encryption_is_deterministic() {
    let c = cipher();
    assert_eq!(c.encrypt("same"), c.encrypt("same"));
}

#[test]
fn key_sizes() {
    assert!(FieldCipher::new(&[7u8; 16]).is_ok());
    assert!(FieldCipher::new(&[7u8; 24]).is_ok());
    assert!(FieldCipher::new(&[7u8; 32]).is_ok());
    assert!(matches!(
        FieldCipher::new(&[7u8; 15]).unwrap_err(),
        CryptoError::InvalidKeyLen { actual: 15 }
    ));
    assert!(FieldCipher::from_hex("zz").is_err());
}

#[test]
fn aes256_round_trip() {
    let c = FieldCipher::new(&[0x42; 32]).unwrap();
    assert_eq!(c.decrypt(&c.encrypt("wide key")).unwrap(), "wide key");
}

// ## Malformed ciphertext fails, never panics

#[test]
fn rejects_non_base64() {
    assert!(matches!(cipher().decrypt("not base64 !!").unwrap_err(), CryptoError::InvalidEncoding(_)));
}

#[test]
fn rejects_truncated() {
    // 8 bytes after decoding
    assert!(matches!(
        cipher().decrypt("AAAAAAAAAAA=").unwrap_err(),
        CryptoError::InvalidCiphertextLen { len: 8 }
    ));
    assert!(matches!(cipher().decrypt("").unwrap_err(), CryptoError::InvalidCiphertextLen { len: 0 }));
}

#[test]
fn rejects_wrong_key() {
    let other = FieldCipher::new(&[1u8; 16]).unwrap();
    // A wrong key either breaks padding or yields garbage that is not the original.
    match other.decrypt(&cipher().encrypt("credential")) {
        Err(_) => {}
        Ok(text) => assert_ne!(text, "credential"),
    }
}

proptest! {
    #[test]
    fn prop_round_trip(s in ".{0,64}") {
        let c = cipher();
        prop_assert_eq!(c.decrypt(&c.encrypt(&s)).unwrap(), s);
    }

    #[test]
    fn prop_ciphertext_is_block_aligned(s in ".{0,64}") {
        let raw = cipher().encrypt_bytes(s.as_bytes());
        prop_assert_eq!(raw.len() % 16, 0);
        prop_assert!(raw.len() > s.len());
    }
}
