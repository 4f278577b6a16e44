//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{Config, MAX_REDIRECT_HOPS, TCP_CONNECT_TIMEOUT_SECS};

/// Initializes the HTTP client used by `HttpTransport`.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent resolved from the config (explicit override or generated)
/// - Request timeout from the config
/// - Connect timeout (`TCP_CONNECT_TIMEOUT_SECS`)
/// - Redirect following, up to `MAX_REDIRECT_HOPS`
/// - A cookie-less session (every navigation starts fresh)
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, reqwest::Error> {
    let user_agent = config.resolve_user_agent();
    log::debug!("Using User-Agent: {}", user_agent);

    ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .connect_timeout(Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS))
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECT_HOPS))
        .user_agent(user_agent)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_client_default_config() {
        let config = Config::default();
        assert!(init_client(&config).is_ok());
    }

    #[test]
    fn test_init_client_with_explicit_user_agent() {
        let config = Config {
            user_agent: Some("insta_query_test/1.0".to_string()),
            timeout_seconds: 1,
            ..Default::default()
        };
        assert!(init_client(&config).is_ok());
    }
}
