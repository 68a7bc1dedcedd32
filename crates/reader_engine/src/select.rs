use ego_tree::NodeId;
use reader_logging::{reader_debug, reader_trace};

use crate::config::ReaderConfig;
use crate::dom::Document;
use crate::score::score;
use crate::types::Candidate;

/// Picks the single subtree most likely to hold the primary readable content.
///
/// Starts from the body (or the top-level element when there is no body),
/// then offers every landmark (`article`, `main`, `[role=main]`) and finally
/// every `section`/`div` inside the body. A candidate replaces the current
/// best only with a strictly greater score, so landmarks win ties against
/// generic containers and earlier nodes win ties against later ones.
pub fn select_content_root(document: &Document, config: &ReaderConfig) -> Candidate {
    let start = document
        .body()
        .or_else(|| document.document_element())
        .unwrap_or_else(|| document.root());
    let mut best = Candidate {
        node: start,
        score: score(document, start, config),
    };
    reader_trace!("Content root starts at {:?} with {:?}", start, best.score);

    for node in landmarks(document) {
        consider(document, node, config, &mut best);
    }
    for node in generic_containers(document, start) {
        consider(document, node, config, &mut best);
    }

    reader_debug!(
        "Selected content root <{}> with {:?}",
        document.tag_name(best.node).unwrap_or("#document"),
        best.score
    );
    best
}

fn consider(document: &Document, node: NodeId, config: &ReaderConfig, best: &mut Candidate) {
    let candidate = score(document, node, config);
    if !candidate.is_disqualified() && candidate > best.score {
        *best = Candidate {
            node,
            score: candidate,
        };
    }
}

fn landmarks(document: &Document) -> Vec<NodeId> {
    document
        .elements()
        .into_iter()
        .filter(|id| {
            document.element(*id).is_some_and(|element| {
                element.is("article")
                    || element.is("main")
                    || element
                        .attr("role")
                        .is_some_and(|role| role.trim().eq_ignore_ascii_case("main"))
            })
        })
        .collect()
}

fn generic_containers(document: &Document, scope: NodeId) -> Vec<NodeId> {
    document
        .descendant_elements(scope)
        .into_iter()
        .filter(|id| matches!(document.tag_name(*id), Some("section" | "div")))
        .collect()
}
