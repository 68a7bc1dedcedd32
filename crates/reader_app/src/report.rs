use reader_engine::ReaderSession;
use serde::Serialize;

/// JSON summary printed with `--report`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub active: bool,
    pub transitions: u64,
    pub extraction: Option<ExtractionSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionSummary {
    pub root_tag: Option<String>,
    pub score: Option<i64>,
    pub top_level_nodes: usize,
    pub text_chars: usize,
    pub keep_together_runs: usize,
    pub style_sources_removed: usize,
}

impl RunReport {
    pub fn from_session(session: &ReaderSession) -> Self {
        let extraction = session.last_report().map(|report| ExtractionSummary {
            root_tag: report.extraction.root_tag.clone(),
            score: report.extraction.root.score.points(),
            top_level_nodes: report.extraction.content.len(),
            text_chars: report.extraction.text_content().chars().count(),
            keep_together_runs: report.extraction.keep_together_runs,
            style_sources_removed: report.styles.total(),
        });
        Self {
            active: session.is_active(),
            transitions: session.state().transitions(),
            extraction,
        }
    }
}
