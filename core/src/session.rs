//! session.rs
//! Caller-owned authentication state and discovered domains.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Authentication state returned by login.
///
/// Authorized iff both `auth_token` and `user_id` are non-empty. Only
/// `reset` (logout) mutates it after creation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    #[serde(alias = "token", deserialize_with = "string_or_number")]
    pub auth_token: String,
    #[serde(alias = "userId", deserialize_with = "string_or_number")]
    pub user_id: String,
    #[serde(alias = "countryCode", deserialize_with = "string_or_number")]
    pub country_code: String,
    /// Client generated; not part of the login result.
    #[serde(skip_deserializing)]
    pub register_id: String,
}

impl Session {
    pub fn is_authorized(&self) -> bool {
        !self.auth_token.is_empty() && !self.user_id.is_empty()
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// Clear all state. The session is unauthorized afterward.
    pub fn reset(&mut self) {
        *self = Session::default();
    }
}

/// Region domains returned by discovery. Empty strings mean "keep the default".
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Domains {
    #[serde(alias = "appApi")]
    pub app_api: String,
    pub mqtt: String,
    #[serde(alias = "openApi")]
    pub open_api: String,
}

/// Accept JSON strings, numbers and null where the service is inconsistent.
pub(crate) fn string_or_number<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(de)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(serde::de::Error::custom(format!("expected string, got {}", other))),
    }
}
