#![allow(dead_code)]

use std::sync::Once;

use reader_engine::{Document, NodeId};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(reader_logging::initialize_for_tests);
}

/// First attached element with the given tag.
pub fn first(doc: &Document, tag: &str) -> NodeId {
    doc.elements()
        .into_iter()
        .find(|id| doc.tag_name(*id) == Some(tag))
        .unwrap_or_else(|| panic!("no <{tag}> in document"))
}

/// 250 characters of prose, trailing space included.
pub fn prose_250() -> String {
    "abcdefghi ".repeat(25)
}

/// Article page from the extraction scenario: a link-heavy nav of about 80
/// characters next to an article with a heading, prose and an image.
pub fn article_page() -> String {
    let links: String = (1..=8)
        .map(|i| format!(r#"<a href="/s{i}">Section {i}</a> "#))
        .collect();
    format!(
        r#"<html><head><title>T</title><style>body {{ color: red }}</style><link rel="stylesheet" href="site.css"></head><body><nav>{links}</nav><article><h1>Title</h1><p style="color:red">{prose}</p><img src="a.jpg"></article></body></html>"#,
        prose = prose_250()
    )
}
