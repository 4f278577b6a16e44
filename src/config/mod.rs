//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (base URL, timeouts, selectors, limits)
//! - The library `Config` struct and logging enums

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
