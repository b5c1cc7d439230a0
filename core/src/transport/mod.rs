//! transport/mod.rs
//! HTTP seam between the signed request envelope and the network.
//!
//! The core only builds `HttpRequest` values and interprets `HttpResponse`
//! values; `Transport` implementations own the I/O. Calls are synchronous
//! and bounded by the implementation's timeouts.

pub mod http;

pub use http::*;

use crate::signing::Method;
use crate::types::Result;

#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// URL-encoded by the transport.
    pub query: Vec<(String, String)>,
    /// JSON body bytes, if any.
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Body parsed back as JSON (diagnostics and tests).
    pub fn json(&self) -> Option<serde_json::Value> {
        self.body.as_deref().and_then(|b| serde_json::from_slice(b).ok())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn ok_json(value: &serde_json::Value) -> Self {
        Self::new(200, value.to_string())
    }
}

pub trait Transport: Send + Sync {
    /// Send one request. Network-level failures map to `ClientError::Network`;
    /// any received status is returned as-is.
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse>;
}
