// ## src/crypto/map_key.rs

//! crypto/map_key.rs
//! Device-bound key/IV derivation for downloaded map blobs.
//!
//! Contract:
//! - Same (product id, serial, MAC) always yields the same key and IV.
//! - Different devices yield different keys.
//! - The derivation is an external contract verified against captured blobs,
//!   so it sits behind a trait and can be replaced without touching the pipeline.

use crate::crypto::digest::md5_hex;
use crate::crypto::types::MAP_KEY_LEN;

/// Key and IV for the map blob cipher.
#[derive(Clone, PartialEq, Eq)]
pub struct MapKey {
    pub key: [u8; MAP_KEY_LEN],
    pub iv: [u8; MAP_KEY_LEN],
}

impl std::fmt::Debug for MapKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("MapKey(..)")
    }
}

/// Device attributes consumed by key derivation.
#[derive(Debug, Clone, Copy)]
pub struct MapKeyInput<'a> {
    pub serial: &'a str,
    pub mac: &'a str,
    pub product_id: &'a str,
}

pub trait MapKeyDerivation: Send + Sync {
    fn derive(&self, input: &MapKeyInput<'_>) -> MapKey;
}

/// Default derivation:
/// `hex(md5("{product_id}+{serial}+{mac}"))[8..24]` as ASCII bytes, used for both key and IV.
#[derive(Debug, Clone, Copy, Default)]
pub struct Md5MapKey;

impl MapKeyDerivation for Md5MapKey {
    fn derive(&self, input: &MapKeyInput<'_>) -> MapKey {
        let seed = format!("{}+{}+{}", input.product_id, input.serial, input.mac);
        let digest = md5_hex(seed.as_bytes());

        // 32 hex chars; the middle 16 are the key material.
        let mut key = [0u8; MAP_KEY_LEN];
        key.copy_from_slice(&digest.as_bytes()[8..8 + MAP_KEY_LEN]);

        MapKey { key, iv: key }
    }
}
