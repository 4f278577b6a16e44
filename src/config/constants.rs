//! Configuration constants.
//!
//! This module defines the defaults used to build profile URLs, configure the
//! HTTP transport, and select candidate nodes in profile pages.

/// Base URL that profile usernames are appended to.
///
/// The request URL is always `DEFAULT_BASE_URL + username + "/"`.
pub const DEFAULT_BASE_URL: &str = "https://www.instagram.com/";

/// Environment variable that overrides the base URL (also read from `.env`).
pub const BASE_URL_ENV_VAR: &str = "INSTA_QUERY_BASE_URL";

/// Default browser language, sent as the primary `Accept-Language` entry.
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;

// Response and body size limits
/// Maximum response body size in bytes (2MB)
/// Responses larger than this are rejected by the transport
pub const MAX_RESPONSE_BODY_SIZE: usize = 2 * 1024 * 1024;

/// Maximum number of redirect hops the HTTP client follows
pub const MAX_REDIRECT_HOPS: usize = 10;

/// Selector for inline scripts in the page body (`//body/script`).
pub const SCRIPT_SELECTOR: &str = "body > script";

/// Selector for the meta description in the page head
/// (`//head/meta[@name="description"]`).
pub const META_DESCRIPTION_SELECTOR: &str = "head > meta[name=\"description\"]";

/// Maximum HTML preview length in characters, used in debug logs
pub const MAX_HTML_PREVIEW_CHARS: usize = 200;

// HTTP status codes
pub const HTTP_STATUS_OK: u16 = 200;
