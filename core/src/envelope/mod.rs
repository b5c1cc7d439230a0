//! envelope/mod.rs
//! The service's uniform `{code, msg, result}` response wrapper.
//!
//! Decode order (first failure wins):
//! 1. HTTP status != 200        -> `Transport { status }`
//! 2. envelope code != 0        -> `Service { code, message, kind }`
//! 3. no result                 -> empty success
//! 4. result is a bare string   -> `MalformedResponse`
//! 5. named field requested     -> field-decrypt + JSON parse

pub mod codes;
pub mod decode;

pub use codes::*;
pub use decode::*;
