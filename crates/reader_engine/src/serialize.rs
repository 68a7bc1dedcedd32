//! HTML serialization of the arena document.
//!
//! The walk follows `NodeRef::traverse` open and close edges, so output depth
//! is not bounded by the call stack.

use ego_tree::iter::Edge;
use ego_tree::NodeRef;

use crate::dom::{DomNode, ElementData};

const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

const RAW_TEXT_TAGS: &[&str] = &[
    "script", "style", "xmp", "iframe", "noembed", "noframes", "plaintext",
];

pub(crate) fn children_html(node: NodeRef<'_, DomNode>) -> String {
    let mut out = String::new();
    for child in node.children() {
        write_subtree(child, &mut out);
    }
    out
}

pub(crate) fn node_html(node: NodeRef<'_, DomNode>) -> String {
    let mut out = String::new();
    write_subtree(node, &mut out);
    out
}

fn write_subtree(root: NodeRef<'_, DomNode>, out: &mut String) {
    for edge in root.traverse() {
        match edge {
            Edge::Open(node) => open_node(node, out),
            Edge::Close(node) => {
                if let DomNode::Element(element) = node.value() {
                    close_element(element, out);
                }
            }
        }
    }
}

fn open_node(node: NodeRef<'_, DomNode>, out: &mut String) {
    match node.value() {
        DomNode::Document => {}
        DomNode::Doctype(name) => {
            out.push_str("<!DOCTYPE ");
            out.push_str(name);
            out.push('>');
        }
        DomNode::Comment(comment) => {
            out.push_str("<!--");
            out.push_str(comment);
            out.push_str("-->");
        }
        DomNode::Text(text) => {
            if in_raw_text_element(node) {
                out.push_str(text);
            } else {
                escape_into(text, false, out);
            }
        }
        DomNode::Element(element) => {
            out.push('<');
            out.push_str(element.name());
            for (name, value) in element.attrs() {
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                escape_into(value, true, out);
                out.push('"');
            }
            out.push('>');
        }
    }
}

fn close_element(element: &ElementData, out: &mut String) {
    if VOID_TAGS.contains(&element.name()) {
        return;
    }
    out.push_str("</");
    out.push_str(element.name());
    out.push('>');
}

fn in_raw_text_element(node: NodeRef<'_, DomNode>) -> bool {
    node.parent().is_some_and(|parent| match parent.value() {
        DomNode::Element(element) => RAW_TEXT_TAGS.contains(&element.name()),
        _ => false,
    })
}

fn escape_into(text: &str, attribute: bool, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            '"' if attribute => out.push_str("&quot;"),
            '<' if !attribute => out.push_str("&lt;"),
            '>' if !attribute => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Document, ElementData};

    #[test]
    fn serializes_escaped_text_and_void_elements() {
        let doc = Document::parse(r#"<body><p title="a&quot;b">1 &lt; 2<br>x</p></body>"#);
        let body = doc.body().unwrap();
        assert_eq!(
            doc.inner_html(body),
            r#"<p title="a&quot;b">1 &lt; 2<br>x</p>"#
        );
    }

    #[test]
    fn script_text_is_not_escaped() {
        let doc = Document::parse("<body><script>if (a < b) {}</script></body>");
        let body = doc.body().unwrap();
        assert_eq!(doc.inner_html(body), "<script>if (a < b) {}</script>");
    }

    #[test]
    fn deeply_nested_document_serializes_without_recursion() {
        const DEPTH: usize = 200_000;
        let mut doc = Document::new();
        let mut parent = doc.root();
        for _ in 0..DEPTH {
            let span = doc.create_element(ElementData::new("span"));
            doc.append_child(parent, span);
            parent = span;
        }
        let text = doc.create_text("x");
        doc.append_child(parent, text);

        let html = doc.to_html();

        assert_eq!(html.len(), DEPTH * ("<span>".len() + "</span>".len()) + 1);
        assert!(html.starts_with("<span><span>"));
        assert!(html.contains("<span>x</span>"));
        assert!(html.ends_with("</span></span>"));
    }
}
