//! Failure categorization.
//!
//! Maps transport, status, and selector failures onto `FailureKind` so the
//! extractor can log a short, stable reason for an empty result.

use super::types::{FailureKind, FetchError, TransportError};

/// Categorizes a `reqwest::Error` into a `FailureKind`.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> FailureKind {
    if let Some(status) = error.status() {
        return categorize_status(status.as_u16());
    }

    if error.is_builder() {
        FailureKind::HttpRequestBuilderError
    } else if error.is_redirect() {
        FailureKind::HttpRequestRedirectError
    } else if error.is_timeout() {
        FailureKind::HttpRequestTimeoutError
    } else if error.is_connect() {
        FailureKind::HttpRequestConnectError
    } else if error.is_body() {
        FailureKind::HttpRequestBodyError
    } else if error.is_decode() {
        FailureKind::HttpRequestDecodeError
    } else {
        FailureKind::HttpRequestOtherError
    }
}

/// Categorizes a non-200 HTTP status returned for a profile page.
pub fn categorize_status(status: u16) -> FailureKind {
    match status {
        301 | 302 | 303 | 307 | 308 => FailureKind::HttpRequestLoginRedirect,
        403 => FailureKind::HttpRequestBotDetectionError,
        404 => FailureKind::HttpRequestNotFound,
        429 => FailureKind::HttpRequestTooManyRequests,
        500..=599 => FailureKind::HttpRequestServerError,
        _ => FailureKind::HttpRequestUnexpectedStatus,
    }
}

/// Categorizes any `FetchError`.
pub fn categorize_fetch_error(error: &FetchError) -> FailureKind {
    match error {
        FetchError::Transport(TransportError::Request(e)) => categorize_reqwest_error(e),
        FetchError::Transport(TransportError::BodyTooLarge { .. }) => {
            FailureKind::ResponseBodyTooLarge
        }
        FetchError::Transport(TransportError::Navigation(_)) => FailureKind::HttpRequestOtherError,
        FetchError::Status(status) => categorize_status(*status),
        FetchError::Document(_) => FailureKind::SelectorError,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::DocumentError;

    #[test]
    fn test_categorize_status() {
        assert_eq!(categorize_status(404), FailureKind::HttpRequestNotFound);
        assert_eq!(categorize_status(403), FailureKind::HttpRequestBotDetectionError);
        assert_eq!(categorize_status(429), FailureKind::HttpRequestTooManyRequests);
        assert_eq!(categorize_status(302), FailureKind::HttpRequestLoginRedirect);
        assert_eq!(categorize_status(503), FailureKind::HttpRequestServerError);
        assert_eq!(categorize_status(204), FailureKind::HttpRequestUnexpectedStatus);
    }

    #[test]
    fn test_categorize_fetch_error() {
        assert_eq!(
            categorize_fetch_error(&FetchError::Status(404)),
            FailureKind::HttpRequestNotFound
        );
        assert_eq!(
            categorize_fetch_error(&FetchError::Transport(TransportError::BodyTooLarge {
                size: 3,
                limit: 2
            })),
            FailureKind::ResponseBodyTooLarge
        );
        assert_eq!(
            categorize_fetch_error(&FetchError::Transport(TransportError::Navigation(
                "closed".to_string()
            ))),
            FailureKind::HttpRequestOtherError
        );
        assert_eq!(
            categorize_fetch_error(&FetchError::Document(DocumentError::InvalidSelector {
                selector: "!".to_string(),
                reason: "bad".to_string()
            })),
            FailureKind::SelectorError
        );
    }
}
