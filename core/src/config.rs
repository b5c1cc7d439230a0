//! config.rs
//! Immutable client configuration and the resolved endpoint pair.
//!
//! A `ClientConfig` is built once (default, JSON string or JSON file) and
//! threaded into the client. `Endpoints` is produced once at connect time
//! and never mutated afterward.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{region_urls, service_codes, TENANT_ID};
use crate::crypto::FieldCipher;
use crate::types::{ClientError, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    #[default]
    Eu,
    Us,
    Cn,
}

impl Region {
    pub fn base_url(self) -> &'static str {
        match self {
            Region::Eu => region_urls::EU,
            Region::Us => region_urls::US,
            Region::Cn => region_urls::CN,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    De,
    Da,
    Nb,
    Sv,
    Fi,
    Fr,
    Es,
    It,
    Nl,
    Pl,
    Pt,
    Zh,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Language::En => "en",
            Language::De => "de",
            Language::Da => "da",
            Language::Nb => "nb",
            Language::Sv => "sv",
            Language::Fi => "fi",
            Language::Fr => "fr",
            Language::Es => "es",
            Language::It => "it",
            Language::Nl => "nl",
            Language::Pl => "pl",
            Language::Pt => "pt",
            Language::Zh => "zh",
        };
        f.write_str(code)
    }
}

/// Client configuration.
///
/// `field_key` is the hex encoded application key used for field encryption.
/// It is deployment data: the default configuration carries none.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub region: Region,
    /// Replaces the region base URL before discovery (test servers, proxies).
    pub base_url_override: Option<String>,
    pub tenant_id: String,
    pub language: Language,
    pub field_key: Option<String>,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    /// Envelope codes classified as access denied.
    pub access_denied_codes: Vec<i64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            region: Region::Eu,
            base_url_override: None,
            tenant_id: TENANT_ID.to_string(),
            language: Language::En,
            field_key: None,
            request_timeout_secs: 10,
            connect_timeout_secs: 5,
            access_denied_codes: vec![service_codes::ACCESS_DENIED],
        }
    }
}

impl ClientConfig {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| ClientError::Config(e.to_string()))
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ClientError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&raw)
    }

    pub fn with_field_key(mut self, key_hex: impl Into<String>) -> Self {
        self.field_key = Some(key_hex.into());
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url_override = Some(url.into());
        self
    }

    /// Base URL used for discovery and until discovery overrides it.
    pub fn initial_base_url(&self) -> String {
        self.base_url_override
            .clone()
            .unwrap_or_else(|| self.region.base_url().to_string())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn field_cipher(&self) -> Result<FieldCipher> {
        let key = self
            .field_key
            .as_deref()
            .ok_or_else(|| ClientError::Config("field_key is not configured".into()))?;
        FieldCipher::from_hex(key).map_err(|e| ClientError::Config(e.to_string()))
    }
}

/// Resolved API / MQTT base URLs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    pub api_base: String,
    pub mqtt: Option<String>,
}

impl Endpoints {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self { api_base: api_base.into(), mqtt: None }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }
}
