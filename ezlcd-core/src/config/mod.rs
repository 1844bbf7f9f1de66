//! Driver configuration
//!
//! Board-agnostic settings applied by the driver at init, optionally stored
//! as postcard binary data.

pub mod types;

pub use types::*;
