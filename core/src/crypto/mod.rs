pub mod types;
pub mod digest;
pub mod field;
pub mod map_key;
pub mod blob;

pub use types::*;
pub use digest::*;
pub use field::*;
pub use map_key::*;
pub use blob::*;
