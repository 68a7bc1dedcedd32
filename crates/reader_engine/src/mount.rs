use ego_tree::NodeId;

use crate::dom::{Document, ElementData};
use crate::types::SanitizedNode;

/// Class carried by every keep-together span in the mounted view.
pub const KEEP_TOGETHER_CLASS: &str = "keep-together";

/// Builds a detached `<div id=container_id>` holding `content`.
pub fn build_container(
    document: &mut Document,
    container_id: &str,
    content: &[SanitizedNode],
) -> NodeId {
    let container = document.create_element(ElementData::new("div").with_attr("id", container_id));
    for node in content {
        append_sanitized(document, container, node);
    }
    container
}

fn append_sanitized(document: &mut Document, parent: NodeId, node: &SanitizedNode) {
    match node {
        SanitizedNode::Text(run) => {
            for segment in run.segments() {
                let text = document.create_text(segment.text.as_str());
                if segment.keep_together {
                    let span = document.create_element(
                        ElementData::new("span").with_attr("class", KEEP_TOGETHER_CLASS),
                    );
                    document.append_child(span, text);
                    document.append_child(parent, span);
                } else {
                    document.append_child(parent, text);
                }
            }
        }
        SanitizedNode::Block { tag, children } => {
            let element = document.create_element(ElementData::new(tag.as_str()));
            append_all(document, element, children);
            document.append_child(parent, element);
        }
        SanitizedNode::Inline { tag, children } => {
            let element = document.create_element(ElementData::new(tag.as_str()));
            append_all(document, element, children);
            document.append_child(parent, element);
        }
        SanitizedNode::Image { src, alt } => {
            let mut image = ElementData::new("img").with_attr("src", src.as_str());
            if let Some(alt) = alt {
                image.set_attr("alt", alt.as_str());
            }
            let image = image
                .with_attr("loading", "lazy")
                .with_attr("decoding", "async");
            let element = document.create_element(image);
            document.append_child(parent, element);
        }
        SanitizedNode::LineBreak => {
            let element = document.create_element(ElementData::new("br"));
            document.append_child(parent, element);
        }
        SanitizedNode::Fragment(children) => append_all(document, parent, children),
    }
}

fn append_all(document: &mut Document, parent: NodeId, children: &[SanitizedNode]) {
    for child in children {
        append_sanitized(document, parent, child);
    }
}
