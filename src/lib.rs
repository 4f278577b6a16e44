//! insta_query library: profile field extraction
//!
//! This library fetches public profile pages and pulls individual fields out of
//! them: profile picture URL, page ids, profile id, display name, and the
//! follower / following / post counters.
//!
//! # Example
//!
//! ```no_run
//! use insta_query::{Config, Extractor, Field};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = Extractor::from_config(&Config::default())?;
//!
//! let infos = extractor.find_infos("jane").await;
//! println!("followers: {:?}", infos.count(Field::Followers));
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod config;
mod error_handling;
mod extract;
mod fetch;
pub mod initialization;
mod parse;
mod user_agent;
mod utils;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{
    categorize_fetch_error, categorize_reqwest_error, categorize_status, DocumentError,
    FailureKind, FetchError, InitializationError, TransportError,
};
pub use extract::{
    ExtractionResult, Extractor, Field, FieldMatch, FieldSpec, Lookup, Multiplicity, NodeSource,
    Target, INFO_FIELDS,
};
pub use fetch::{HttpTransport, PageResponse, Transport};
pub use parse::{Document, DocumentNode, DocumentParser, HtmlDocument, HtmlDocumentParser, NodeKind};
pub use user_agent::{generate_user_agent, BrowserProfile};
