//! karcher-core
//!
//! Client core for the Kärcher Home robot cloud: the signed request
//! envelope, field encryption, and the floor-map retrieval pipeline.
//! Blocking, single-shot calls; no shared mutable state.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;
pub mod config;

// Request envelope
pub mod crypto;
pub mod signing;
pub mod envelope;
pub mod transport;

// Domain
pub mod session;
pub mod device;
pub mod map;

pub mod client;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::client::KarcherHome;
    pub use crate::config::{ClientConfig, Endpoints, Language, Region};
    pub use crate::device::{Device, DeviceIdentity};
    pub use crate::map::{FloorMap, MapChannel, MapData};
    pub use crate::session::Session;
    pub use crate::transport::{HttpRequest, HttpResponse, HttpTransport, Transport};
    pub use crate::types::{ClientError, Result, ServiceErrorKind};
}
