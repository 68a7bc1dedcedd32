use ego_tree::NodeId;
use reader_logging::{reader_trace, reader_warn};
use url::Url;

use crate::config::ReaderConfig;
use crate::dom::{Document, DomNode, ElementData};
use crate::text::{collapse_whitespace, is_blank};
use crate::types::{BlockTag, InlineTag, SanitizedNode};

/// Elements dropped together with their whole subtree.
const NON_CONTENT_TAGS: &[&str] = &[
    "head", "script", "style", "noscript", "template", "iframe", "object", "embed", "canvas",
    "svg", "button", "input", "select", "textarea",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Image,
    LineBreak,
    Block(BlockTag),
    Inline(InlineTag),
    Discard,
    /// Unknown wrapper: tag dropped, children spliced into the parent.
    Transparent,
}

fn classify(name: &str) -> Category {
    match name {
        "img" => Category::Image,
        "br" => Category::LineBreak,
        _ => {
            if let Some(tag) = BlockTag::from_name(name) {
                Category::Block(tag)
            } else if let Some(tag) = InlineTag::from_name(name) {
                Category::Inline(tag)
            } else if NON_CONTENT_TAGS.contains(&name) {
                Category::Discard
            } else {
                Category::Transparent
            }
        }
    }
}

/// Rebuilds an arbitrary document subtree into the closed
/// [`SanitizedNode`] vocabulary. The document is only read.
pub struct Sanitizer<'a> {
    config: &'a ReaderConfig,
}

impl<'a> Sanitizer<'a> {
    pub fn new(config: &'a ReaderConfig) -> Self {
        Self { config }
    }

    /// Returns `None` when nothing readable survives. A transparent root comes
    /// back as a `Fragment` whose children are the spliced content.
    pub fn sanitize(&self, document: &Document, node: NodeId) -> Option<SanitizedNode> {
        self.sanitize_at(document, node, 0)
    }

    fn sanitize_at(&self, document: &Document, id: NodeId, depth: usize) -> Option<SanitizedNode> {
        let node = document.get(id)?;
        match node.value() {
            DomNode::Text(text) => Some(sanitize_text(text)),
            DomNode::Comment(_) | DomNode::Doctype(_) => None,
            DomNode::Document => Some(SanitizedNode::Fragment(
                self.sanitize_children(document, id, depth),
            )),
            DomNode::Element(element) => {
                if depth >= self.config.max_depth {
                    return self.flatten(document, id, depth);
                }
                match classify(element.name()) {
                    Category::Image => self.image(element),
                    Category::LineBreak => Some(SanitizedNode::LineBreak),
                    Category::Block(tag) => keep_if_substantive(SanitizedNode::Block {
                        tag,
                        children: self.sanitize_children(document, id, depth),
                    }),
                    Category::Inline(tag) => keep_if_substantive(SanitizedNode::Inline {
                        tag,
                        children: self.sanitize_children(document, id, depth),
                    }),
                    Category::Discard => {
                        reader_trace!("Dropping non-content <{}>", element.name());
                        None
                    }
                    Category::Transparent => Some(SanitizedNode::Fragment(
                        self.sanitize_children(document, id, depth),
                    )),
                }
            }
        }
    }

    fn sanitize_children(
        &self,
        document: &Document,
        id: NodeId,
        depth: usize,
    ) -> Vec<SanitizedNode> {
        let mut out = Vec::new();
        for child in document.children(id) {
            match self.sanitize_at(document, child, depth + 1) {
                Some(SanitizedNode::Fragment(spliced)) => out.extend(spliced),
                Some(node) => out.push(node),
                None => {}
            }
        }
        out
    }

    fn flatten(&self, document: &Document, id: NodeId, depth: usize) -> Option<SanitizedNode> {
        reader_warn!(
            "Depth ceiling {} reached at depth {}; flattening subtree to text",
            self.config.max_depth,
            depth
        );
        let text = document.rendered_text(id);
        if is_blank(&text) {
            return None;
        }
        Some(SanitizedNode::text(collapse_whitespace(&text)))
    }

    fn image(&self, element: &ElementData) -> Option<SanitizedNode> {
        let base = self.config.base_url.as_ref();
        let src = std::iter::once("src")
            .chain(self.config.lazy_src_attributes.iter().map(String::as_str))
            .filter_map(|name| element.attr(name))
            .find_map(|raw| resolve_source(raw, base));
        let Some(src) = src else {
            reader_trace!("Dropping image without a usable source");
            return None;
        };
        Some(SanitizedNode::Image {
            src,
            alt: element.attr("alt").map(str::to_string),
        })
    }
}

/// Convenience wrapper around [`Sanitizer::sanitize`].
pub fn sanitize(document: &Document, node: NodeId, config: &ReaderConfig) -> Option<SanitizedNode> {
    Sanitizer::new(config).sanitize(document, node)
}

fn sanitize_text(text: &str) -> SanitizedNode {
    if is_blank(text) {
        SanitizedNode::text(" ")
    } else {
        SanitizedNode::text(collapse_whitespace(text))
    }
}

fn keep_if_substantive(node: SanitizedNode) -> Option<SanitizedNode> {
    node.has_substance().then_some(node)
}

fn resolve_source(raw: &str, base: Option<&Url>) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with('#') || lower.starts_with("javascript:") {
        return None;
    }
    match base {
        Some(base) => base.join(trimmed).ok().map(String::from),
        None => Some(trimmed.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::{classify, resolve_source, Category};
    use crate::types::{BlockTag, InlineTag};
    use url::Url;

    #[test]
    fn classification_is_closed() {
        assert_eq!(classify("img"), Category::Image);
        assert_eq!(classify("br"), Category::LineBreak);
        assert_eq!(classify("h3"), Category::Block(BlockTag::H3));
        assert_eq!(classify("a"), Category::Inline(InlineTag::Anchor));
        assert_eq!(classify("script"), Category::Discard);
        assert_eq!(classify("x-tracking-wrapper"), Category::Transparent);
        assert_eq!(classify("table"), Category::Transparent);
    }

    #[test]
    fn sources_resolve_against_base() {
        let base = Url::parse("https://news.example.com/a/b.html").unwrap();
        assert_eq!(
            resolve_source(" /img/1.png ", Some(&base)).as_deref(),
            Some("https://news.example.com/img/1.png")
        );
        assert_eq!(resolve_source("pic.jpg", None).as_deref(), Some("pic.jpg"));
        assert_eq!(resolve_source("  ", None), None);
        assert_eq!(resolve_source("javascript:void(0)", Some(&base)), None);
        assert_eq!(resolve_source("#top", None), None);
    }
}
