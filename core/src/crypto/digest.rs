//! crypto/digest.rs
//! One-way digest used for request signatures and map key derivation.

use md5::{Digest as _, Md5};

/// MD5 over `data`, rendered as 32 lower-case hex characters.
#[inline]
pub fn md5_hex(data: &[u8]) -> String {
    let mut hasher = Md5::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// MD5 over the concatenation of `parts`, without building the joined buffer.
pub fn md5_hex_parts(parts: &[&[u8]]) -> String {
    let mut hasher = Md5::new();
    for part in parts {
        hasher.update(part);
    }
    hex::encode(hasher.finalize())
}
