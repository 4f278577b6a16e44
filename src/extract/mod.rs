//! Profile field extraction.
//!
//! The `Extractor` turns a (username, field) pair into a result:
//!
//! 1. build `base_url + username + "/"` and navigate to it through a `Transport`
//! 2. on HTTP 200, parse the body and select candidate nodes with a selector
//! 3. scan `<meta>` `content` attributes and `<script>` text children, in
//!    document order, against the field's pattern
//! 4. normalize the captured value
//!
//! Any failure (empty username, transport error, non-200 status, no match)
//! yields an empty `ExtractionResult` from the `find_*` / `extract_*` methods.
//! `lookup` and `lookup_all` expose the typed `Lookup` instead.

mod field;
mod result;

use log::{debug, trace, warn};

use crate::config::{Config, HTTP_STATUS_OK, MAX_HTML_PREVIEW_CHARS};
use crate::error_handling::{categorize_fetch_error, FetchError, InitializationError};
use crate::fetch::{HttpTransport, Transport};
use crate::initialization::init_base_url;
use crate::parse::{Document, DocumentNode, DocumentParser, HtmlDocumentParser, NodeKind};
use crate::utils::preview;

pub use field::{Field, FieldSpec, Multiplicity, NodeSource, Target, INFO_FIELDS};
pub use result::{ExtractionResult, FieldMatch, Lookup};

/// Fetches profile pages and extracts fields from them.
///
/// Holds only read-only configuration and its two collaborators, so one
/// extractor can serve any number of independent lookups.
#[derive(Debug, Clone)]
pub struct Extractor<T = HttpTransport, P = HtmlDocumentParser> {
    transport: T,
    parser: P,
    base_url: String,
}

impl Extractor<HttpTransport, HtmlDocumentParser> {
    /// Builds an extractor with the HTTP transport and the `scraper` parser.
    ///
    /// # Errors
    ///
    /// Returns an `InitializationError` if the base URL is invalid or the HTTP
    /// client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        let base_url = init_base_url(&config.base_url)?;
        let transport = HttpTransport::from_config(config)?;
        Ok(Self::new(transport, HtmlDocumentParser, base_url))
    }
}

impl<T: Transport, P: DocumentParser> Extractor<T, P> {
    /// Creates an extractor. `base_url` is used verbatim as the URL prefix.
    pub fn new(transport: T, parser: P, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            parser,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of a profile page: `base_url + username + "/"`.
    pub fn profile_url(&self, username: &str) -> String {
        format!("{}{}/", self.base_url, username)
    }

    /// Fetches the profile page and returns the nodes matching `selector`.
    ///
    /// # Errors
    ///
    /// - `FetchError::Transport` if no response was obtained
    /// - `FetchError::Status` for any status other than 200
    /// - `FetchError::Document` if the selector is invalid
    pub async fn fetch_document_nodes(
        &self,
        username: &str,
        selector: &str,
    ) -> Result<Vec<DocumentNode>, FetchError> {
        let url = self.profile_url(username);
        debug!("Navigating to {}", url);

        let response = self.transport.navigate(&url).await?;
        if response.status != HTTP_STATUS_OK {
            return Err(FetchError::Status(response.status));
        }
        trace!(
            "Body of {}: {}",
            url,
            preview(&response.body, MAX_HTML_PREVIEW_CHARS)
        );

        let document = self.parser.parse(&response.body);
        let nodes = document.query(selector)?;
        debug!("{} candidate nodes for '{}' on {}", nodes.len(), selector, url);
        Ok(nodes)
    }

    /// Looks up `target` and stops at the first candidate that matches.
    ///
    /// Candidates that do not match are skipped, `<meta>` nodes included: with a
    /// selector returning several meta nodes, the first one whose `content`
    /// matches wins, not simply the first one.
    pub async fn lookup(
        &self,
        username: &str,
        target: impl Into<Target>,
        selector: &str,
    ) -> Lookup {
        let target = target.into();
        let nodes = match self.candidates(username, target, selector).await {
            Ok(nodes) => nodes,
            Err(unfetched) => return unfetched.into(),
        };

        match scan_first(&nodes, target) {
            Some(result) => {
                debug!("Found {} for '{}'", target, username);
                Lookup::Found(result)
            }
            None => {
                debug!("No {} found for '{}'", target, username);
                Lookup::NoMatch
            }
        }
    }

    /// Looks up `target` in every candidate, keeping one entry per candidate
    /// (empty where it did not match).
    ///
    /// Returns `Lookup::NoMatch` only when there was no candidate to scan.
    pub async fn lookup_all(
        &self,
        username: &str,
        target: impl Into<Target>,
        selector: &str,
    ) -> Lookup<Vec<ExtractionResult>> {
        let target = target.into();
        let nodes = match self.candidates(username, target, selector).await {
            Ok(nodes) => nodes,
            Err(unfetched) => return unfetched.into(),
        };

        let entries = scan_every(&nodes, target);
        debug!(
            "{} of {} candidates matched {} for '{}'",
            entries.iter().filter(|e| !e.is_empty()).count(),
            entries.len(),
            target,
            username
        );
        if entries.is_empty() {
            Lookup::NoMatch
        } else {
            Lookup::Found(entries)
        }
    }

    /// First-match lookup; empty result on any failure.
    pub async fn extract_single(
        &self,
        username: &str,
        target: impl Into<Target>,
        selector: &str,
    ) -> ExtractionResult {
        self.lookup(username, target, selector).await.into_value()
    }

    /// Every-candidate lookup; empty sequence on failure.
    pub async fn extract_all(
        &self,
        username: &str,
        target: impl Into<Target>,
        selector: &str,
    ) -> Vec<ExtractionResult> {
        self.lookup_all(username, target, selector)
            .await
            .into_value()
    }

    /// Profile picture URL, with `\/` unescaped.
    pub async fn find_profile_pic(&self, username: &str) -> ExtractionResult {
        self.find(username, Field::Picture).await
    }

    /// Every page id occurrence, one entry per inline script.
    pub async fn find_page_id(&self, username: &str) -> Vec<ExtractionResult> {
        let target = Target::Field(Field::Page);
        self.extract_all(username, target, target.default_selector())
            .await
    }

    pub async fn find_profile_id(&self, username: &str) -> ExtractionResult {
        self.find(username, Field::Profile).await
    }

    /// Display name, without any parenthesized suffix.
    pub async fn find_profile_name(&self, username: &str) -> ExtractionResult {
        self.find(username, Field::Name).await
    }

    /// Followers, following and posts from the meta description, in that order.
    pub async fn find_infos(&self, username: &str) -> ExtractionResult {
        self.find(username, Target::Infos).await
    }

    pub async fn find_followers(&self, username: &str) -> ExtractionResult {
        self.find(username, Field::Followers).await
    }

    pub async fn find_following(&self, username: &str) -> ExtractionResult {
        self.find(username, Field::Following).await
    }

    pub async fn find_posts(&self, username: &str) -> ExtractionResult {
        self.find(username, Field::Posts).await
    }

    async fn find(&self, username: &str, target: impl Into<Target>) -> ExtractionResult {
        let target = target.into();
        self.extract_single(username, target, target.default_selector())
            .await
    }

    /// Shared front half of `lookup` / `lookup_all`: input check and fetch.
    async fn candidates(
        &self,
        username: &str,
        target: Target,
        selector: &str,
    ) -> Result<Vec<DocumentNode>, Unfetched> {
        if username.trim().is_empty() {
            debug!("Skipping {} lookup: empty username", target);
            return Err(Unfetched::EmptyInput);
        }

        self.fetch_document_nodes(username, selector)
            .await
            .map_err(|e| {
                warn!(
                    "Lookup of {} for '{}' failed ({}): {}",
                    target,
                    username,
                    categorize_fetch_error(&e),
                    e
                );
                Unfetched::Failed(e)
            })
    }
}

/// Why a lookup never got candidate nodes to scan.
#[derive(Debug)]
enum Unfetched {
    EmptyInput,
    Failed(FetchError),
}

impl<T> From<Unfetched> for Lookup<T> {
    fn from(unfetched: Unfetched) -> Self {
        match unfetched {
            Unfetched::EmptyInput => Lookup::EmptyInput,
            Unfetched::Failed(e) => Lookup::FetchFailed(e),
        }
    }
}

/// Scans one candidate string for every field of `target`.
fn scan_text(target: Target, text: &str) -> ExtractionResult {
    target
        .fields()
        .iter()
        .filter_map(|field| field.capture(text))
        .collect()
}

/// Text of a candidate node to scan; `None` for nodes that are skipped.
fn candidate_texts(node: &DocumentNode) -> Option<Vec<&str>> {
    match node.kind() {
        NodeKind::Meta => Some(vec![node.attr("content").unwrap_or_default()]),
        NodeKind::Script => Some(node.text_nodes().iter().map(String::as_str).collect()),
        NodeKind::Other => {
            trace!("Skipping <{}> candidate", node.tag_name());
            None
        }
    }
}

/// First match wins: across text children first, then across nodes.
/// A non-matching candidate of any kind is passed over.
fn scan_first(nodes: &[DocumentNode], target: Target) -> Option<ExtractionResult> {
    nodes
        .iter()
        .filter_map(candidate_texts)
        .flatten()
        .map(|text| scan_text(target, text))
        .find(|result| !result.is_empty())
}

/// One entry per scanned text. Meta content is split into one entry per field,
/// so an aggregate lookup yields followers, following and posts separately.
fn scan_every(nodes: &[DocumentNode], target: Target) -> Vec<ExtractionResult> {
    let mut entries: Vec<ExtractionResult> = Vec::new();
    for node in nodes {
        let Some(texts) = candidate_texts(node) else {
            continue;
        };
        for text in texts {
            if node.kind() == NodeKind::Meta {
                entries.extend(
                    target
                        .fields()
                        .iter()
                        .map(|field| field.capture(text).into_iter().collect::<ExtractionResult>()),
                );
            } else {
                entries.push(scan_text(target, text));
            }
        }
    }
    entries
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
