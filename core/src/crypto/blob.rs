// ## 📂 File: `src/crypto/blob.rs`

//! crypto/blob.rs
//! Map blob decryption.
//!
//! Pipeline (download body -> map bytes):
//! 1. base64 decode (surrounding whitespace ignored)
//! 2. AES-128-CBC decrypt with the device key/IV, PKCS#7 unpad
//! 3. zlib inflate
//!
//! Every step fails closed: no partial plaintext is returned.

use std::io::Read;

use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, KeyIvInit};
use aes::Aes128;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use flate2::read::ZlibDecoder;

use crate::crypto::map_key::MapKey;
use crate::crypto::types::{CryptoError, BLOCK_LEN};

type Aes128CbcDec = cbc::Decryptor<Aes128>;

pub struct BlobCipher {
    key: MapKey,
}

impl BlobCipher {
    pub fn new(key: MapKey) -> Self {
        Self { key }
    }

    /// Decrypt and inflate a downloaded map blob.
    pub fn open(&self, body: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let text: Vec<u8> = body
            .iter()
            .copied()
            .filter(|b| !b.is_ascii_whitespace())
            .collect();
        let raw = STANDARD
            .decode(&text)
            .map_err(|e| CryptoError::InvalidEncoding(e.to_string()))?;

        let compressed = self.decrypt_raw(&raw)?;
        inflate(&compressed)
    }

    /// AES-128-CBC decrypt only.
    pub fn decrypt_raw(&self, ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        if ciphertext.is_empty() || ciphertext.len() % BLOCK_LEN != 0 {
            return Err(CryptoError::InvalidCiphertextLen { len: ciphertext.len() });
        }

        Aes128CbcDec::new(&self.key.key.into(), &self.key.iv.into())
            .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
            .map_err(|_| CryptoError::BadPadding)
    }
}

fn inflate(compressed: &[u8]) -> Result<Vec<u8>, CryptoError> {
    let mut dec = ZlibDecoder::new(compressed);
    let mut out = Vec::new();
    dec.read_to_end(&mut out)
        .map_err(|e| CryptoError::Inflate(e.to_string()))?;
    Ok(out)
}
