//! Reader engine: live document model, content extraction pipeline and the
//! reading-mode session that mounts and restores it.
mod config;
mod decode;
mod dom;
mod extract;
mod interact;
mod mount;
mod persist;
mod prefs;
mod sanitize;
mod score;
mod select;
mod serialize;
mod session;
mod style;
mod text;
mod types;
pub mod typography;

pub use config::{ReaderConfig, ScoreWeights};
pub use decode::{decode_html, DecodeError, DecodedHtml};
pub use dom::{Document, DomNode, ElementData};
pub use ego_tree::NodeId;
pub use extract::{Extraction, Extractor, ScoringExtractor};
pub use interact::{classify_pointer_target, is_interactive_target};
pub use mount::{build_container, KEEP_TOGETHER_CLASS};
pub use persist::{ensure_parent_dir, write_atomically, PersistError};
pub use prefs::{
    format_active, parse_active, MemoryPreferenceStore, PreferenceError, PreferenceStore,
    RonPreferenceStore,
};
pub use sanitize::{sanitize, Sanitizer};
pub use score::score;
pub use select::select_content_root;
pub use session::{BodySnapshot, ReaderSession, ReadingReport};
pub use style::{strip_site_styles, StyleStripReport};
pub use text::{collapse_whitespace, collapsed_len};
pub use types::{BlockTag, Candidate, InlineTag, SanitizedNode, Score, TextRun, TextSegment};
pub use typography::protect;
