//! signing/mod.rs
//! Canonical request signing.
//!
//! Signature = lower-hex MD5(auth_token ++ ts ++ nonce ++ canonical_body).
//! The server recomputes this string, so canonicalization must be byte-exact:
//! - GET: canonical body is empty; query parameters never enter the signature.
//! - POST/PUT: fields in insertion order, `name ++ rendered value` each.

pub mod request;
pub mod canonical;

pub use request::*;
pub use canonical::*;
