use ego_tree::NodeId;

use crate::config::ReaderConfig;
use crate::dom::Document;
use crate::text::collapsed_len;
use crate::types::Score;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct ElementCounts {
    paragraphs: i64,
    images: i64,
    headings: i64,
    links: i64,
}

/// Scores `node` as a content-root candidate.
///
/// Nodes whose collapsed rendered text is shorter than `config.min_text_len`
/// characters are disqualified. Otherwise the text length is adjusted by
/// bonuses for paragraphs, images and `h1`-`h3` headings, and a penalty per link.
pub fn score(document: &Document, node: NodeId, config: &ReaderConfig) -> Score {
    let text_len = collapsed_len(&document.rendered_text(node));
    if text_len < config.min_text_len {
        return Score::Disqualified;
    }

    let counts = count_elements(document, node);
    let weights = config.weights;
    let text_len = i64::try_from(text_len).unwrap_or(i64::MAX);
    Score::Points(
        text_len
            .saturating_add(weights.paragraph * counts.paragraphs)
            .saturating_add(weights.image * counts.images)
            .saturating_add(weights.heading * counts.headings)
            .saturating_sub(weights.link_penalty * counts.links),
    )
}

fn count_elements(document: &Document, node: NodeId) -> ElementCounts {
    let mut counts = ElementCounts::default();
    for id in document.descendant_elements(node) {
        match document.tag_name(id) {
            Some("p") => counts.paragraphs += 1,
            Some("img") => counts.images += 1,
            Some("h1" | "h2" | "h3") => counts.headings += 1,
            Some("a") => counts.links += 1,
            _ => {}
        }
    }
    counts
}
