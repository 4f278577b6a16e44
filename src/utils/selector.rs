//! CSS selector parsing utilities.

use scraper::Selector;

use crate::error_handling::DocumentError;

/// Parses a CSS selector, turning parse failures into `DocumentError`.
///
/// Selectors come from callers at runtime, so a bad one is reported rather than
/// panicking. The failure is also logged with `context` to locate the caller.
pub fn parse_selector(selector_str: &str, context: &str) -> Result<Selector, DocumentError> {
    Selector::parse(selector_str).map_err(|e| {
        log::error!(
            "Failed to parse CSS selector '{}' in {}: {}",
            selector_str,
            context,
            e
        );
        DocumentError::InvalidSelector {
            selector: selector_str.to_string(),
            reason: e.to_string(),
        }
    })
}
