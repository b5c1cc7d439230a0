use std::fmt;
use thiserror::Error;

use crate::crypto::CryptoError;

/// Classification of a non-zero service envelope code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceErrorKind {
    /// Session token missing or rejected; the caller should log in again.
    AccessDenied,
    Generic,
}

impl fmt::Display for ServiceErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceErrorKind::AccessDenied => write!(f, "access denied"),
            ServiceErrorKind::Generic => write!(f, "service error"),
        }
    }
}

/// Unified client error.
/// - Every failure surfaces immediately; nothing here is retried or swallowed.
/// - `Service` keeps the originating code and message for the caller.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP status other than 200.
    #[error("HTTP error: {status}")]
    Transport { status: u16 },

    /// Connection, TLS or timeout failure before a status was received.
    #[error("network error: {0}")]
    Network(String),

    /// Non-zero envelope code.
    #[error("{kind} ({code}): {message}")]
    Service {
        code: i64,
        message: String,
        kind: ServiceErrorKind,
    },

    /// Envelope result present but of the wrong shape.
    #[error("invalid response: {0}")]
    MalformedResponse(String),

    /// Field decryption or JSON parse failure.
    #[error("decode error: {0}")]
    Decode(String),

    #[error("map decrypt error: {0}")]
    MapDecrypt(String),

    #[error("map decode error: {0}")]
    MapDecode(String),

    /// Unusable client configuration.
    #[error("config error: {0}")]
    Config(String),
}

impl ClientError {
    /// Access denied raised locally, before any request was sent.
    pub fn not_authorized() -> Self {
        ClientError::Service {
            code: crate::constants::service_codes::ACCESS_DENIED,
            message: "Not authorized".into(),
            kind: ServiceErrorKind::AccessDenied,
        }
    }

    pub fn is_access_denied(&self) -> bool {
        matches!(
            self,
            ClientError::Service { kind: ServiceErrorKind::AccessDenied, .. }
        )
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Decode(e.to_string())
    }
}

/// Field-cipher failures are decode errors; map failures are wrapped by the
/// map pipeline explicitly.
impl From<CryptoError> for ClientError {
    fn from(e: CryptoError) -> Self {
        ClientError::Decode(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
