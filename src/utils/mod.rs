//! Utility functions.
//!
//! This module provides:
//! - CSS selector parsing utilities
//! - String helpers for log previews

mod selector;

pub use selector::parse_selector;

/// Truncates `text` to at most `max_chars` characters for log output.
pub fn preview(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{}... ({} bytes total)", head, text.len())
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
