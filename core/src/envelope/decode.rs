// ## 📂 File: `src/envelope/decode.rs`

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::constants::service_codes;
use crate::crypto::FieldCipher;
use crate::envelope::codes::ErrorCodeTable;
use crate::transport::HttpResponse;
use crate::types::{ClientError, Result};

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Envelope {
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    /// `None` when absent or null.
    #[serde(default)]
    pub result: Option<Value>,
}

impl Envelope {
    pub fn parse(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(|e| ClientError::Decode(format!("envelope: {}", e)))
    }
}

/// Validate and unwrap a response. `Ok(None)` means success without a result.
pub fn decode_response(resp: &HttpResponse, codes: &ErrorCodeTable) -> Result<Option<Value>> {
    if resp.status != 200 {
        warn!(status = resp.status, "non-200 response");
        return Err(ClientError::Transport { status: resp.status });
    }

    let envelope = Envelope::parse(&resp.body)?;
    if envelope.code != service_codes::OK {
        let kind = codes.classify(envelope.code);
        debug!(code = envelope.code, %kind, "service rejected request");
        return Err(ClientError::Service {
            code: envelope.code,
            message: envelope.msg,
            kind,
        });
    }

    match envelope.result {
        None => Ok(None),
        Some(Value::String(text)) => Err(ClientError::MalformedResponse(text)),
        Some(value) => Ok(Some(value)),
    }
}

/// Decode a response whose result mapping carries one encrypted field, and
/// return that field decrypted and parsed as JSON.
pub fn decode_field(
    resp: &HttpResponse,
    codes: &ErrorCodeTable,
    field: &str,
    cipher: &FieldCipher,
) -> Result<Option<Value>> {
    let Some(result) = decode_response(resp, codes)? else {
        return Ok(None);
    };

    let ciphertext = match &result {
        Value::Object(map) => map.get(field),
        _ => return Err(ClientError::MalformedResponse(format!("expected object holding `{}`", field))),
    };
    let ciphertext = match ciphertext {
        Some(Value::String(s)) => s,
        Some(_) => return Err(ClientError::MalformedResponse(format!("`{}` is not a string", field))),
        None => return Err(ClientError::MalformedResponse(format!("missing `{}`", field))),
    };

    let plain = cipher.decrypt(ciphertext)?;
    let value = serde_json::from_str(&plain)?;
    Ok(Some(value))
}
