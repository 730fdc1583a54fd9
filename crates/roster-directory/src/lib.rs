//! Member directory backends for the roster resolver.
//!
//! [`HttpDirectory`] reads the organisation's REST backend; [`SnapshotDirectory`]
//! reads a JSON file in the same wire shape. Both translate wire records into
//! [`roster_core::person`] types through the lenient decoders in `wire`.

mod http;
mod snapshot;
mod wire;

pub mod error;

pub use error::{Error, Result};
pub use http::{HttpConfig, HttpDirectory};
pub use snapshot::SnapshotDirectory;
