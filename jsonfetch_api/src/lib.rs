//! Minimal client that fetches one JSON document from an HTTP endpoint.
//!
//! The pipeline has two stages: a [`Transport`] returns the raw body and
//! [`decode`] turns it into a [`Document`]. Each stage fails with its own
//! [`Error`] variant.

mod client;
mod decode;
mod errors;
mod path;
mod transport;
pub use self::client::{Client, DEFAULT_ENDPOINT};
pub use self::decode::{decode, Document};
pub use self::errors::{Error, ErrorKind};
pub use self::path::lookup;
pub use self::transport::{HttpTransport, Transport, REQUEST_TIMEOUT};
