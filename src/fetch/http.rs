//! `reqwest`-backed transport.

use log::debug;

use super::request::RequestHeaders;
use super::{PageResponse, Transport};
use crate::config::{Config, MAX_RESPONSE_BODY_SIZE};
use crate::error_handling::{InitializationError, TransportError};
use crate::initialization::init_client;

/// Transport that fetches pages with a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    language: String,
    max_body_size: usize,
}

impl HttpTransport {
    /// Wraps an already configured client.
    pub fn new(client: reqwest::Client, language: impl Into<String>) -> Self {
        Self {
            client,
            language: language.into(),
            max_body_size: MAX_RESPONSE_BODY_SIZE,
        }
    }

    /// Builds the client (User-Agent, timeouts, redirects) from `config`.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        let client = init_client(config)?;
        Ok(Self::new(client, config.language.clone()))
    }

    /// Overrides the response body cap (bytes).
    pub fn with_max_body_size(mut self, max_body_size: usize) -> Self {
        self.max_body_size = max_body_size;
        self
    }
}

impl Transport for HttpTransport {
    async fn navigate(&self, url: &str) -> Result<PageResponse, TransportError> {
        debug!(
            "GET {} with headers {:?}",
            url,
            RequestHeaders::as_vec(&self.language)
        );
        let request =
            RequestHeaders::apply_to_request_builder(self.client.get(url), &self.language);
        let response = request.send().await?;
        let status = response.status().as_u16();

        if let Some(length) = response.content_length() {
            let length = usize::try_from(length).unwrap_or(usize::MAX);
            if length > self.max_body_size {
                return Err(TransportError::BodyTooLarge {
                    size: length,
                    limit: self.max_body_size,
                });
            }
        }

        let body = response.text().await?;
        if body.len() > self.max_body_size {
            return Err(TransportError::BodyTooLarge {
                size: body.len(),
                limit: self.max_body_size,
            });
        }

        debug!("{} answered {} ({} bytes)", url, status, body.len());
        Ok(PageResponse { status, body })
    }
}
