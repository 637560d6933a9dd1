//! Client facade sequencing the transport and decode stages.

use std::fmt;

use crate::{decode, Document, Error, HttpTransport, Transport};

/// Endpoint used when none (or an empty one) is supplied.
pub const DEFAULT_ENDPOINT: &str = "https://api.example.com/data";

/// Fetches a JSON document from a single fixed endpoint.
///
/// Holds only the endpoint and a stateless transport, so one instance can be
/// shared across threads and called reentrantly. Each [`fetch_data`] makes
/// exactly one request; there are no retries.
///
/// [`fetch_data`]: Client::fetch_data
#[derive(Clone)]
pub struct Client<T = HttpTransport> {
    endpoint: String,
    transport: T,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a client for [`DEFAULT_ENDPOINT`] using the HTTP transport.
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Creates a client for a custom endpoint. An empty or whitespace-only
    /// string falls back to [`DEFAULT_ENDPOINT`].
    pub fn with_endpoint(endpoint: &str) -> Self {
        Self::with_transport(endpoint, HttpTransport)
    }
}

impl<T: Transport> Client<T> {
    /// Creates a client that performs its I/O through `transport`.
    pub fn with_transport(endpoint: &str, transport: T) -> Self {
        let endpoint = if endpoint.trim().is_empty() {
            DEFAULT_ENDPOINT
        } else {
            endpoint
        };
        Self {
            endpoint: endpoint.to_string(),
            transport,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Requests the endpoint and decodes the body as JSON.
    ///
    /// The endpoint reaches the transport verbatim. With [`HttpTransport`], an
    /// endpoint that is not a valid URL fails the same way an unreachable one
    /// does, with [`Error::Network`].
    pub fn fetch_data(&self) -> Result<Document, Error> {
        let body = self.transport.fetch(&self.endpoint)?;
        decode(&body)
    }
}

impl<T> fmt::Debug for Client<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}
