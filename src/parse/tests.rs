// Parse module tests.

use super::*;
use crate::config::{META_DESCRIPTION_SELECTOR, SCRIPT_SELECTOR};

const PROFILE_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Jane Doe (@jane) • Instagram photos and videos</title>
    <meta name="viewport" content="width=device-width">
    <meta name="description" content="1,234 Followers, 56 Following, 789 Posts - See Instagram photos and videos from Jane Doe (@jane)">
    <script>var headScript = 1;</script>
</head>
<body>
    <script type="text/javascript">window._sharedData = {"page_id":"profilePage_42"};</script>
    <script src="/static/bundle.js"></script>
    <div><script>nested = true;</script></div>
</body>
</html>"#;

fn parse_profile_page() -> HtmlDocument {
    HtmlDocumentParser.parse(PROFILE_PAGE)
}

#[test]
fn test_query_body_scripts_skips_head_and_nested() {
    let nodes = parse_profile_page().query(SCRIPT_SELECTOR).unwrap();
    assert_eq!(nodes.len(), 2);
    assert!(nodes.iter().all(|n| n.kind() == NodeKind::Script));
    assert_eq!(
        nodes[0].text_nodes(),
        &[r#"window._sharedData = {"page_id":"profilePage_42"};"#.to_string()]
    );
    // External script: no text children
    assert!(nodes[1].text_nodes().is_empty());
    assert_eq!(nodes[1].attr("src"), Some("/static/bundle.js"));
}

#[test]
fn test_query_meta_description() {
    let nodes = parse_profile_page()
        .query(META_DESCRIPTION_SELECTOR)
        .unwrap();
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].kind(), NodeKind::Meta);
    assert!(nodes[0]
        .attr("content")
        .unwrap()
        .starts_with("1,234 Followers"));
    assert!(nodes[0].text_nodes().is_empty());
}

#[test]
fn test_query_no_matches_is_empty() {
    let nodes = parse_profile_page().query("body > video").unwrap();
    assert!(nodes.is_empty());
}

#[test]
fn test_query_invalid_selector_is_error() {
    let result = parse_profile_page().query("body >>> ???");
    assert!(result.is_err());
}

#[test]
fn test_query_on_garbage_html() {
    // html5ever never fails; garbage still yields a document
    let document = HtmlDocumentParser.parse("<<<not html at all");
    assert!(document.query(SCRIPT_SELECTOR).unwrap().is_empty());
}

#[test]
fn test_document_node_builder() {
    let node = DocumentNode::new("META")
        .with_attr("Content", "10 Posts")
        .with_text("ignored");
    assert_eq!(node.tag_name(), "meta");
    assert_eq!(node.kind(), NodeKind::Meta);
    assert_eq!(node.attr("content"), Some("10 Posts"));
    assert_eq!(node.attr("name"), None);
    assert_eq!(node.text_nodes().len(), 1);
    assert_eq!(DocumentNode::new("div").kind(), NodeKind::Other);
}
