// ## 📂 File: `src/crypto/types.rs`

use std::fmt;

/// AES block length (bytes).
pub const BLOCK_LEN: usize = 16;

/// Map blob key and IV length (bytes).
pub const MAP_KEY_LEN: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// Key length not accepted by the cipher.
    InvalidKeyLen { actual: usize },

    /// Ciphertext was not valid base64.
    InvalidEncoding(String),

    /// Ciphertext length is zero or not a multiple of the block size.
    InvalidCiphertextLen { len: usize },

    /// PKCS#7 padding check failed after decryption.
    BadPadding,

    /// Decrypted bytes were not valid UTF-8 where text was expected.
    InvalidUtf8,

    /// zlib stream could not be inflated.
    Inflate(String),
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CryptoError::*;
        match self {
            InvalidKeyLen { actual } =>
                write!(f, "invalid key length: {} (expected 16, 24 or 32)", actual),
            InvalidEncoding(msg) =>
                write!(f, "invalid ciphertext encoding: {}", msg),
            InvalidCiphertextLen { len } =>
                write!(f, "invalid ciphertext length: {} is not a positive multiple of {}", len, BLOCK_LEN),
            BadPadding =>
                write!(f, "bad padding"),
            InvalidUtf8 =>
                write!(f, "plaintext is not valid UTF-8"),
            Inflate(msg) =>
                write!(f, "inflate failed: {}", msg),
        }
    }
}

impl std::error::Error for CryptoError {}
