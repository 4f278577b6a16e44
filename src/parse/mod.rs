//! HTML parsing.
//!
//! This module turns a profile page into the candidate nodes the extractor
//! scans:
//! - `DocumentParser` / `Document`: the parsing seam, so tests can feed fixtures
//! - `HtmlDocumentParser`: the production implementation on top of `scraper`
//! - `DocumentNode`: an owned snapshot of an element (tag, attributes, text children)

mod document;

// Re-export public API
pub use document::{
    Document, DocumentNode, DocumentParser, HtmlDocument, HtmlDocumentParser, NodeKind,
};

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
