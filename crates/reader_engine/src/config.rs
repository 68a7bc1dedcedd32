use url::Url;

/// Bonus and penalty weights applied by the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreWeights {
    pub paragraph: i64,
    pub image: i64,
    pub heading: i64,
    pub link_penalty: i64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            paragraph: 80,
            image: 40,
            heading: 60,
            link_penalty: 20,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Candidates whose collapsed text is shorter than this are disqualified.
    pub min_text_len: usize,
    pub weights: ScoreWeights,
    /// Sanitizer recursion ceiling; deeper subtrees are flattened to text.
    pub max_depth: usize,
    /// Attributes consulted, in order, when an image has no usable `src`.
    pub lazy_src_attributes: Vec<String>,
    pub container_id: String,
    pub toggle_control_id: String,
    pub preference_key: String,
    /// Base for resolving relative image sources. Left unresolved when `None`.
    pub base_url: Option<Url>,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            min_text_len: 200,
            weights: ScoreWeights::default(),
            max_depth: 256,
            lazy_src_attributes: vec![
                "data-src".to_string(),
                "data-original".to_string(),
                "data-lazy-src".to_string(),
            ],
            container_id: "reader-root".to_string(),
            toggle_control_id: "reader-toggle".to_string(),
            preference_key: "reader-mode".to_string(),
            base_url: None,
        }
    }
}

impl ReaderConfig {
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }
}
