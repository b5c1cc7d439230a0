// ## 📂 File: `src/signing/canonical.rs`

use std::io;

use serde::Serialize;
use serde_json::ser::Formatter;
use serde_json::Value;

use crate::constants::headers;
use crate::crypto::md5_hex_parts;
use crate::signing::request::ApiRequest;

/// Per-request signing inputs. Built fresh for every call, never stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SigningContext {
    /// Seconds since epoch, decimal.
    pub timestamp: String,
    pub nonce: String,
    /// Empty for unauthenticated calls.
    pub auth_token: String,
}

impl SigningContext {
    pub fn new(timestamp: i64, nonce: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.to_string(),
            nonce: nonce.into(),
            auth_token: auth_token.into(),
        }
    }

    /// Context with the current time and a fresh random nonce.
    pub fn fresh(auth_token: impl Into<String>) -> Self {
        Self::new(crate::utils::timestamp(), crate::utils::nonce(), auth_token)
    }
}

/// `sign`, `ts` and `nonce` header values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedHeaders {
    pub sign: String,
    pub ts: String,
    pub nonce: String,
}

impl SignedHeaders {
    pub fn to_pairs(&self) -> [(&'static str, String); 3] {
        [
            (headers::SIGN, self.sign.clone()),
            (headers::TS, self.ts.clone()),
            (headers::NONCE, self.nonce.clone()),
        ]
    }
}

/// Render one body value for the signing string.
///
/// Booleans are capitalized (`True`/`False`) and structured values are compact
/// JSON with every non-ASCII character escaped as `\uXXXX`, matching the
/// server's own rendering.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::String(s) => s.clone(),
        Value::Object(_) | Value::Array(_) => compact_ascii_json(value),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
    }
}

/// Compact JSON text (`,` and `:` without spaces) restricted to ASCII.
fn compact_ascii_json(value: &Value) -> String {
    let mut out = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut out, AsciiEscapeFormatter);
    match value.serialize(&mut ser) {
        Ok(()) => String::from_utf8_lossy(&out).into_owned(),
        // Writing into a Vec has no I/O failure mode.
        Err(_) => value.to_string(),
    }
}

/// Compact formatter that writes non-ASCII characters as UTF-16 `\uXXXX`
/// escapes, surrogate pairs included.
struct AsciiEscapeFormatter;

impl Formatter for AsciiEscapeFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (idx, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            writer.write_all(fragment[start..idx].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units).iter() {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = idx + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

/// Canonical body string of a request.
pub fn canonical_body(request: &ApiRequest) -> String {
    if !request.method().has_body() {
        return String::new();
    }

    let mut out = String::new();
    for (name, value) in request.fields() {
        out.push_str(name);
        out.push_str(&render_value(value));
    }
    out
}

/// Digest over `auth_token ++ timestamp ++ nonce ++ canonical_body`.
pub fn signature(ctx: &SigningContext, canonical: &str) -> String {
    md5_hex_parts(&[
        ctx.auth_token.as_bytes(),
        ctx.timestamp.as_bytes(),
        ctx.nonce.as_bytes(),
        canonical.as_bytes(),
    ])
}

/// Sign a request. Never fails: a wrong canonical form is only detected by
/// the server, as an access denied envelope.
pub fn sign(request: &ApiRequest, ctx: &SigningContext) -> SignedHeaders {
    let canonical = canonical_body(request);
    SignedHeaders {
        sign: signature(ctx, &canonical),
        ts: ctx.timestamp.clone(),
        nonce: ctx.nonce.clone(),
    }
}
