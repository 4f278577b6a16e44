//! HTTP request building.
//!
//! This module provides the browser-like headers sent with every profile page
//! request.

/// Realistic browser request headers to reduce bot detection.
///
/// These headers mimic a browser navigating to a page from a search engine.
/// The User-Agent is configured on the client itself; the language is
/// configurable and drives `Accept-Language`.
pub(crate) struct RequestHeaders;

impl RequestHeaders {
    /// Returns headers as a vector of (name, value) tuples, for debug logging.
    pub(crate) fn as_vec(language: &str) -> Vec<(String, String)> {
        vec![
            (
                "accept".to_string(),
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8".to_string(),
            ),
            ("accept-language".to_string(), accept_language(language)),
            ("referer".to_string(), "https://www.google.com/".to_string()),
            ("sec-fetch-dest".to_string(), "document".to_string()),
            ("sec-fetch-mode".to_string(), "navigate".to_string()),
            ("sec-fetch-site".to_string(), "cross-site".to_string()),
            ("sec-fetch-user".to_string(), "?1".to_string()),
            ("upgrade-insecure-requests".to_string(), "1".to_string()),
        ]
    }

    /// Applies the standard request headers to a `reqwest::RequestBuilder`.
    pub(crate) fn apply_to_request_builder(
        builder: reqwest::RequestBuilder,
        language: &str,
    ) -> reqwest::RequestBuilder {
        builder
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, accept_language(language))
            .header(reqwest::header::REFERER, "https://www.google.com/")
            .header(
                reqwest::header::HeaderName::from_static("sec-fetch-dest"),
                "document",
            )
            .header(
                reqwest::header::HeaderName::from_static("sec-fetch-mode"),
                "navigate",
            )
            .header(
                reqwest::header::HeaderName::from_static("sec-fetch-site"),
                "cross-site",
            )
            .header(
                reqwest::header::HeaderName::from_static("sec-fetch-user"),
                "?1",
            )
            .header(
                reqwest::header::HeaderName::from_static("upgrade-insecure-requests"),
                "1",
            )
    }
}

/// Builds an `Accept-Language` value from a language tag.
///
/// `"fr-FR"` becomes `"fr-FR,fr;q=0.9"`; a bare `"fr"` is sent as-is.
pub(crate) fn accept_language(language: &str) -> String {
    let language = language.trim();
    if language.is_empty() {
        return accept_language(crate::config::DEFAULT_LANGUAGE);
    }
    match language.split_once('-') {
        Some((primary, _)) if !primary.is_empty() => format!("{},{};q=0.9", language, primary),
        _ => language.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_language_with_region() {
        assert_eq!(accept_language("en-US"), "en-US,en;q=0.9");
        assert_eq!(accept_language("pt-BR"), "pt-BR,pt;q=0.9");
    }

    #[test]
    fn test_accept_language_bare_and_empty() {
        assert_eq!(accept_language("de"), "de");
        assert_eq!(accept_language("  "), "en-US,en;q=0.9");
    }

    #[test]
    fn test_as_vec_carries_language() {
        let headers = RequestHeaders::as_vec("it-IT");
        assert!(headers
            .iter()
            .any(|(name, value)| name == "accept-language" && value == "it-IT,it;q=0.9"));
    }
}
