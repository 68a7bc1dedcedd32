use reader_logging::reader_debug;

use crate::config::ReaderConfig;
use crate::dom::Document;
use crate::sanitize::Sanitizer;
use crate::select::select_content_root;
use crate::typography::protect;
use crate::types::{Candidate, SanitizedNode};

/// Result of one extraction pass over the live document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub root: Candidate,
    /// Tag of the selected root, `None` for the document node itself.
    pub root_tag: Option<String>,
    /// Top-level nodes for the reading container. May be empty.
    pub content: Vec<SanitizedNode>,
    pub keep_together_runs: usize,
}

impl Extraction {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn text_content(&self) -> String {
        self.content.iter().map(SanitizedNode::text_content).collect()
    }
}

pub trait Extractor {
    fn extract(&self, document: &Document) -> Extraction;
}

/// Scores candidates, sanitizes the winner and protects its typography.
#[derive(Debug, Clone, Default)]
pub struct ScoringExtractor {
    config: ReaderConfig,
}

impl ScoringExtractor {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }
}

impl Extractor for ScoringExtractor {
    fn extract(&self, document: &Document) -> Extraction {
        let root = select_content_root(document, &self.config);
        let mut content = match Sanitizer::new(&self.config).sanitize(document, root.node) {
            Some(SanitizedNode::Fragment(children)) => children,
            Some(node) => vec![node],
            None => Vec::new(),
        };

        let mut keep_together_runs = 0;
        for node in &mut content {
            keep_together_runs += protect(node);
        }

        let extraction = Extraction {
            root,
            root_tag: document.tag_name(root.node).map(str::to_string),
            content,
            keep_together_runs,
        };
        reader_debug!(
            "Extracted {} top-level nodes from <{}> ({} keep-together runs)",
            extraction.content.len(),
            extraction.root_tag.as_deref().unwrap_or("#document"),
            extraction.keep_together_runs
        );
        extraction
    }
}
