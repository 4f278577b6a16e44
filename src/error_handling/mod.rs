//! Error handling.
//!
//! This module provides:
//! - Error type definitions for initialization, transport, document and fetch failures
//! - Failure categorization used when logging why a lookup came back empty

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_fetch_error, categorize_reqwest_error, categorize_status};
pub use types::{DocumentError, FailureKind, FetchError, InitializationError, TransportError};
