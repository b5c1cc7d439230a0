// ## 📂 File: `src/crypto/field.rs`

//! crypto/field.rs
//! Per-field obscuring of credentials and selected response values.
//!
//! Design notes:
//! - AES in ECB mode with PKCS#7 padding; key size follows the configured key (16/24/32 bytes).
//! - Ciphertext travels as standard base64 text.
//! - Deterministic: the same plaintext always yields the same ciphertext.

use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyInit};
use aes::{Aes128, Aes192, Aes256};
use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::crypto::types::{CryptoError, BLOCK_LEN};

#[derive(Clone)]
enum FieldKey {
    Aes128([u8; 16]),
    Aes192([u8; 24]),
    Aes256([u8; 32]),
}

/// Field cipher bound to the application key.
#[derive(Clone)]
pub struct FieldCipher {
    key: FieldKey,
}

impl std::fmt::Debug for FieldCipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bits = match self.key {
            FieldKey::Aes128(_) => 128,
            FieldKey::Aes192(_) => 192,
            FieldKey::Aes256(_) => 256,
        };
        f.debug_struct("FieldCipher").field("bits", &bits).finish_non_exhaustive()
    }
}

impl FieldCipher {
    pub fn new(key: &[u8]) -> Result<Self, CryptoError> {
        let key = match key.len() {
            16 => FieldKey::Aes128(copy_key(key)),
            24 => FieldKey::Aes192(copy_key(key)),
            32 => FieldKey::Aes256(copy_key(key)),
            actual => return Err(CryptoError::InvalidKeyLen { actual }),
        };
        Ok(Self { key })
    }

    /// Build from a hex encoded key.
    pub fn from_hex(key_hex: &str) -> Result<Self, CryptoError> {
        let key = hex::decode(key_hex.trim())
            .map_err(|e| CryptoError::InvalidEncoding(format!("key: {}", e)))?;
        Self::new(&key)
    }

    /// Encrypt a text value into base64 ciphertext.
    pub fn encrypt(&self, plaintext: &str) -> String {
        STANDARD.encode(self.encrypt_bytes(plaintext.as_bytes()))
    }

    /// Decrypt base64 ciphertext back into text.
    pub fn decrypt(&self, ciphertext: &str) -> Result<String, CryptoError> {
        let raw = STANDARD
            .decode(ciphertext.trim())
            .map_err(|e| CryptoError::InvalidEncoding(e.to_string()))?;
        let plain = self.decrypt_bytes(&raw)?;
        String::from_utf8(plain).map_err(|_| CryptoError::InvalidUtf8)
    }

    pub fn encrypt_bytes(&self, plaintext: &[u8]) -> Vec<u8> {
        match &self.key {
            FieldKey::Aes128(k) => ecb::Encryptor::<Aes128>::new(k.into())
                .encrypt_padded_vec_mut::<Pkcs7>(plaintext),
            FieldKey::Aes192(k) => ecb::Encryptor::<Aes192>::new(k.into())
                .encrypt_padded_vec_mut::<Pkcs7>(plaintext),
            FieldKey::Aes256(k) => ecb::Encryptor::<Aes256>::new(k.into())
                .encrypt_padded_vec_mut::<Pkcs7>(plaintext),
        }
    }

    pub fn decrypt_bytes(&self, ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        if ciphertext.is_empty() || ciphertext.len() % BLOCK_LEN != 0 {
            return Err(CryptoError::InvalidCiphertextLen { len: ciphertext.len() });
        }

        let out = match &self.key {
            FieldKey::Aes128(k) => ecb::Decryptor::<Aes128>::new(k.into())
                .decrypt_padded_vec_mut::<Pkcs7>(ciphertext),
            FieldKey::Aes192(k) => ecb::Decryptor::<Aes192>::new(k.into())
                .decrypt_padded_vec_mut::<Pkcs7>(ciphertext),
            FieldKey::Aes256(k) => ecb::Decryptor::<Aes256>::new(k.into())
                .decrypt_padded_vec_mut::<Pkcs7>(ciphertext),
        };
        out.map_err(|_| CryptoError::BadPadding)
    }
}

fn copy_key<const N: usize>(key: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(key);
    out
}
