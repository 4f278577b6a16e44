//! Document collaborator: HTML parsing and selector queries.

use scraper::{ElementRef, Html};

use crate::error_handling::DocumentError;
use crate::utils::parse_selector;

/// Element kinds the extractor knows how to scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// `<script>`: scan each child text node
    Script,
    /// `<meta>`: scan the `content` attribute
    Meta,
    /// Anything else is skipped
    Other,
}

/// Owned snapshot of a selected element.
///
/// Nodes are detached from the parsed tree so they can outlive the document
/// and be built by hand in tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentNode {
    tag_name: String,
    attributes: Vec<(String, String)>,
    text_nodes: Vec<String>,
}

impl DocumentNode {
    /// Creates an element with no attributes and no children.
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into().to_ascii_lowercase(),
            ..Default::default()
        }
    }

    /// Adds an attribute.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Appends a child text node.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text_nodes.push(text.into());
        self
    }

    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// Returns the value of the first attribute named `name` (ASCII case-insensitive).
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Direct child text nodes, in document order.
    pub fn text_nodes(&self) -> &[String] {
        &self.text_nodes
    }

    pub fn kind(&self) -> NodeKind {
        match self.tag_name.as_str() {
            "script" => NodeKind::Script,
            "meta" => NodeKind::Meta,
            _ => NodeKind::Other,
        }
    }

    fn from_element(element: ElementRef<'_>) -> Self {
        let value = element.value();
        let attributes = value
            .attrs()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        let text_nodes = element
            .children()
            .filter_map(|child| {
                child.value().as_text().map(|text| {
                    let text: &str = text;
                    text.to_owned()
                })
            })
            .collect();

        Self {
            tag_name: value.name().to_ascii_lowercase(),
            attributes,
            text_nodes,
        }
    }
}

/// Parses raw HTML into a queryable document.
pub trait DocumentParser {
    type Document: Document;

    fn parse(&self, html: &str) -> Self::Document;
}

/// A parsed page that answers selector queries.
pub trait Document {
    /// Returns the elements matching `selector`, in document order.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::InvalidSelector` if the selector cannot be parsed.
    fn query(&self, selector: &str) -> Result<Vec<DocumentNode>, DocumentError>;
}

/// `scraper`-backed parser; selectors are CSS.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlDocumentParser;

/// Document produced by `HtmlDocumentParser`.
pub struct HtmlDocument {
    html: Html,
}

impl DocumentParser for HtmlDocumentParser {
    type Document = HtmlDocument;

    fn parse(&self, html: &str) -> HtmlDocument {
        HtmlDocument {
            html: Html::parse_document(html),
        }
    }
}

impl Document for HtmlDocument {
    fn query(&self, selector: &str) -> Result<Vec<DocumentNode>, DocumentError> {
        let parsed = parse_selector(selector, "document query")?;
        let nodes: Vec<DocumentNode> = self
            .html
            .select(&parsed)
            .map(DocumentNode::from_element)
            .collect();
        log::debug!("Selector '{}' matched {} nodes", selector, nodes.len());
        Ok(nodes)
    }
}
