//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - Logger (plain or JSON)
//! - HTTP client (User-Agent, timeouts, redirects)
//! - Base URL validation

mod client;
mod logger;

use url::Url;

use crate::error_handling::InitializationError;

// Re-export public API
pub use client::init_client;
pub use logger::{init_logger, init_logger_with};

/// Validates and normalizes the base URL that usernames are appended to.
///
/// The result always ends with a `/` so that `base + username + "/"` yields a
/// path segment rather than replacing the last one.
///
/// # Errors
///
/// Returns `InitializationError::InvalidBaseUrl` if the URL cannot be parsed
/// or is not `http(s)`.
pub fn init_base_url(base_url: &str) -> Result<String, InitializationError> {
    let trimmed = base_url.trim();
    let parsed = Url::parse(trimmed).map_err(|source| InitializationError::InvalidBaseUrl {
        url: trimmed.to_string(),
        source,
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(InitializationError::InvalidBaseUrl {
            url: trimmed.to_string(),
            source: url::ParseError::RelativeUrlWithCannotBeABaseBase,
        });
    }

    let mut normalized = parsed.to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_base_url_adds_trailing_slash() {
        assert_eq!(
            init_base_url("http://127.0.0.1:8080/profiles").unwrap(),
            "http://127.0.0.1:8080/profiles/"
        );
        assert_eq!(
            init_base_url("https://www.instagram.com/").unwrap(),
            "https://www.instagram.com/"
        );
    }

    #[test]
    fn test_init_base_url_rejects_garbage() {
        assert!(init_base_url("not a url").is_err());
        assert!(init_base_url("ftp://example.com/").is_err());
    }
}
