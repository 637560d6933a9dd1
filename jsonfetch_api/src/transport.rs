//! Transport stage: one HTTP GET, raw body out.

use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::redirect::Policy;
use url::Url;

use crate::Error;

/// Request timeout applied by [`HttpTransport`].
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("jsonfetch/", env!("CARGO_PKG_VERSION"));

/// Performs the network I/O for a [`Client`](crate::Client).
///
/// `target` is the client's endpoint exactly as configured. Implementations
/// return the response body as-is. HTTP status is not interpreted: an error
/// page (or a redirect) is still a body, and the decode stage decides what to
/// make of it.
///
/// Any `Fn(&str) -> Result<Vec<u8>, Error>` closure is a transport, which is
/// what tests use to stand in for the network.
pub trait Transport {
    fn fetch(&self, target: &str) -> Result<Vec<u8>, Error>;
}

impl<F> Transport for F
where
    F: Fn(&str) -> Result<Vec<u8>, Error>,
{
    fn fetch(&self, target: &str) -> Result<Vec<u8>, Error> {
        self(target)
    }
}

/// Blocking HTTP transport backed by `reqwest`.
///
/// Builds a fresh `reqwest::blocking::Client` per request with a 30-second
/// timeout, so constructing the transport itself never fails. Redirects are
/// not followed: one call is one request.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpTransport;

impl Transport for HttpTransport {
    fn fetch(&self, target: &str) -> Result<Vec<u8>, Error> {
        let url = Url::parse(target).map_err(|e| {
            tracing::error!("Invalid endpoint {:?}: {}", target, e);
            Error::network(&e)
        })?;

        tracing::debug!("GET {}", url);
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .redirect(Policy::none())
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::network(&e)
            })?;
        let resp = client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::network(&e)
            })?;

        let status = resp.status();
        tracing::debug!("{} responded with status {}", url, status);

        let body = resp.bytes().map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::network(&e)
        })?;

        Ok(body.to_vec())
    }
}
