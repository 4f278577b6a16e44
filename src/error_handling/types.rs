//! Error type definitions.
//!
//! This module defines the error types used throughout the crate, plus the
//! `FailureKind` categories used when logging transport failures.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The configured base URL cannot be parsed.
    #[error("Invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Errors raised by a `Transport` while navigating to a page.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The HTTP request itself failed (connect, timeout, TLS, ...).
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),

    /// The response body exceeded the configured size cap.
    #[error("Response body too large: {size} bytes (limit {limit})")]
    BodyTooLarge { size: usize, limit: usize },

    /// The transport could not produce a response for another reason.
    #[error("Navigation failed: {0}")]
    Navigation(String),
}

/// Errors raised by a `Document` while evaluating a selector.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// The selector string could not be parsed.
    #[error("Invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },
}

/// Why a profile page could not be turned into candidate nodes.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The transport failed before returning a response.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The page was returned with a non-200 status.
    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    /// The selector could not be evaluated against the page.
    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Categories of transport-level failures, used for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FailureKind {
    HttpRequestBuilderError,
    HttpRequestRedirectError,
    HttpRequestTimeoutError,
    HttpRequestConnectError,
    HttpRequestBodyError,
    HttpRequestDecodeError,
    HttpRequestOtherError,
    // Status codes seen on profile pages
    HttpRequestNotFound,            // 404 Not Found (unknown username)
    HttpRequestLoginRedirect,       // 301/302 to the login wall
    HttpRequestTooManyRequests,     // 429 Too Many Requests
    HttpRequestBotDetectionError,   // 403 Forbidden - typically bot detection
    HttpRequestServerError,         // 5xx
    HttpRequestUnexpectedStatus,    // anything else that is not 200
    // Response handling
    ResponseBodyTooLarge,
    SelectorError,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::HttpRequestBuilderError => "HTTP request builder error",
            FailureKind::HttpRequestRedirectError => "HTTP request redirect error",
            FailureKind::HttpRequestTimeoutError => "HTTP request timeout",
            FailureKind::HttpRequestConnectError => "HTTP connection error",
            FailureKind::HttpRequestBodyError => "HTTP response body error",
            FailureKind::HttpRequestDecodeError => "HTTP response decode error",
            FailureKind::HttpRequestOtherError => "HTTP request error",
            FailureKind::HttpRequestNotFound => "Profile not found (404)",
            FailureKind::HttpRequestLoginRedirect => "Redirected to login",
            FailureKind::HttpRequestTooManyRequests => "Too many requests (429)",
            FailureKind::HttpRequestBotDetectionError => "Bot detection (403)",
            FailureKind::HttpRequestServerError => "Server error (5xx)",
            FailureKind::HttpRequestUnexpectedStatus => "Unexpected HTTP status",
            FailureKind::ResponseBodyTooLarge => "Response body too large",
            FailureKind::SelectorError => "Invalid selector",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_failure_kind_labels_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for kind in FailureKind::iter() {
            assert!(seen.insert(kind.as_str()), "duplicate label for {:?}", kind);
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }

    #[test]
    fn test_fetch_error_display() {
        assert_eq!(FetchError::Status(404).to_string(), "Unexpected HTTP status 404");

        let err = FetchError::from(DocumentError::InvalidSelector {
            selector: "[[".to_string(),
            reason: "unexpected token".to_string(),
        });
        assert_eq!(err.to_string(), "Invalid selector '[[': unexpected token");

        let err = FetchError::from(TransportError::BodyTooLarge {
            size: 10,
            limit: 5,
        });
        assert!(err.to_string().contains("limit 5"));
    }
}
