use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::constants::{NONCE_LEN, PHONE_COUNTRY_PREFIX};

/// Seconds since the Unix epoch.
pub fn timestamp() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Random lower-case hex nonce.
pub fn nonce() -> String {
    let mut bytes = [0u8; NONCE_LEN / 2];
    rand::thread_rng().fill(&mut bytes[..]);
    hex::encode(bytes)
}

/// Random alphanumeric string of `len` characters.
pub fn random_string(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Loose e-mail test: a non-empty local part, then a domain containing a dot
/// that neither starts nor ends the domain.
pub fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || value.chars().any(char::is_whitespace) {
        return false;
    }
    match domain.rfind('.') {
        Some(dot) => dot > 0 && dot + 1 < domain.len(),
        None => false,
    }
}

/// Usernames that are not e-mail addresses are phone numbers and carry a country prefix.
pub fn normalize_username(username: &str) -> String {
    if is_email(username) {
        username.to_string()
    } else {
        format!("{}{}", PHONE_COUNTRY_PREFIX, username)
    }
}
