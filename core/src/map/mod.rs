//! map/mod.rs
//! Floor map retrieval: storage path, download URL resolution, wire
//! messages and the channel-dependent decoder.
//!
//! Channels 1 and 2 carry a protobuf `RobotMap` decoded into `FloorMap`.
//! Every other channel carries JSON text returned as-is.

pub mod storage;
pub mod proto;
pub mod types;
pub mod decode;

pub use storage::*;
pub use types::*;
pub use decode::*;
