//! Page fetching.
//!
//! The extractor never talks to the network directly: it asks a `Transport`
//! to navigate to a profile URL and gets back a status code and a body.
//! `HttpTransport` is the production implementation; tests plug in stubs.

mod http;
mod request;

use std::future::Future;

use crate::error_handling::TransportError;

pub use http::HttpTransport;

/// Raw page returned by a `Transport`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResponse {
    /// HTTP status code of the final response
    pub status: u16,
    /// Response body, decoded as text
    pub body: String,
}

impl PageResponse {
    /// Builds a response from a status code and body.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Performs a single navigation to a URL.
///
/// Implementations must not retry; one call is one request.
pub trait Transport {
    /// Navigates to `url` and returns the response, or an error if no response
    /// could be obtained.
    fn navigate(&self, url: &str)
        -> impl Future<Output = Result<PageResponse, TransportError>> + Send;
}
