use ego_tree::NodeId;

use crate::text::is_blank;

/// Heuristic relevance of a candidate content root.
///
/// `Disqualified` orders below every `Points` value, so a plain `>` comparison
/// implements "disqualified candidates never win".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Score {
    Disqualified,
    Points(i64),
}

impl Score {
    pub fn points(self) -> Option<i64> {
        match self {
            Score::Disqualified => None,
            Score::Points(points) => Some(points),
        }
    }

    pub fn is_disqualified(self) -> bool {
        self == Score::Disqualified
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub node: NodeId,
    pub score: Score,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockTag {
    Article,
    Section,
    Div,
    Main,
    P,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Blockquote,
    Pre,
    Ul,
    Ol,
    Li,
    Figure,
    Figcaption,
}

impl BlockTag {
    pub fn from_name(name: &str) -> Option<Self> {
        let tag = match name {
            "article" => BlockTag::Article,
            "section" => BlockTag::Section,
            "div" => BlockTag::Div,
            "main" => BlockTag::Main,
            "p" => BlockTag::P,
            "h1" => BlockTag::H1,
            "h2" => BlockTag::H2,
            "h3" => BlockTag::H3,
            "h4" => BlockTag::H4,
            "h5" => BlockTag::H5,
            "h6" => BlockTag::H6,
            "blockquote" => BlockTag::Blockquote,
            "pre" => BlockTag::Pre,
            "ul" => BlockTag::Ul,
            "ol" => BlockTag::Ol,
            "li" => BlockTag::Li,
            "figure" => BlockTag::Figure,
            "figcaption" => BlockTag::Figcaption,
            _ => return None,
        };
        Some(tag)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BlockTag::Article => "article",
            BlockTag::Section => "section",
            BlockTag::Div => "div",
            BlockTag::Main => "main",
            BlockTag::P => "p",
            BlockTag::H1 => "h1",
            BlockTag::H2 => "h2",
            BlockTag::H3 => "h3",
            BlockTag::H4 => "h4",
            BlockTag::H5 => "h5",
            BlockTag::H6 => "h6",
            BlockTag::Blockquote => "blockquote",
            BlockTag::Pre => "pre",
            BlockTag::Ul => "ul",
            BlockTag::Ol => "ol",
            BlockTag::Li => "li",
            BlockTag::Figure => "figure",
            BlockTag::Figcaption => "figcaption",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineTag {
    Span,
    Strong,
    Em,
    B,
    I,
    U,
    Code,
    Small,
    Sub,
    Sup,
    Anchor,
}

impl InlineTag {
    pub fn from_name(name: &str) -> Option<Self> {
        let tag = match name {
            "span" => InlineTag::Span,
            "strong" => InlineTag::Strong,
            "em" => InlineTag::Em,
            "b" => InlineTag::B,
            "i" => InlineTag::I,
            "u" => InlineTag::U,
            "code" => InlineTag::Code,
            "small" => InlineTag::Small,
            "sub" => InlineTag::Sub,
            "sup" => InlineTag::Sup,
            "a" => InlineTag::Anchor,
            _ => return None,
        };
        Some(tag)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            InlineTag::Span => "span",
            InlineTag::Strong => "strong",
            InlineTag::Em => "em",
            InlineTag::B => "b",
            InlineTag::I => "i",
            InlineTag::U => "u",
            InlineTag::Code => "code",
            InlineTag::Small => "small",
            InlineTag::Sub => "sub",
            InlineTag::Sup => "sup",
            InlineTag::Anchor => "a",
        }
    }
}

/// A piece of a text run. `keep_together` marks an atomic, non-breaking token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSegment {
    pub text: String,
    pub keep_together: bool,
}

impl TextSegment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keep_together: false,
        }
    }

    pub fn keep_together(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keep_together: true,
        }
    }
}

/// Text content of a `SanitizedNode::Text`, split into segments by the
/// typography pass. Before that pass it holds a single plain segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    segments: Vec<TextSegment>,
}

impl TextRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            segments: vec![TextSegment::plain(text)],
        }
    }

    pub fn from_segments(segments: Vec<TextSegment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[TextSegment] {
        &self.segments
    }

    pub(crate) fn replace_segments(&mut self, segments: Vec<TextSegment>) {
        self.segments = segments;
    }

    /// The full text, protected or not, in order.
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn is_blank(&self) -> bool {
        self.segments.iter().all(|s| is_blank(&s.text))
    }
}

/// Output tree of the sanitizer. Never aliases document nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SanitizedNode {
    Text(TextRun),
    Block {
        tag: BlockTag,
        children: Vec<SanitizedNode>,
    },
    Inline {
        tag: InlineTag,
        children: Vec<SanitizedNode>,
    },
    Image {
        src: String,
        alt: Option<String>,
    },
    LineBreak,
    /// Splice-only container: its children take its place in the parent.
    Fragment(Vec<SanitizedNode>),
}

impl SanitizedNode {
    pub fn text(text: impl Into<String>) -> Self {
        SanitizedNode::Text(TextRun::plain(text))
    }

    pub fn children(&self) -> &[SanitizedNode] {
        match self {
            SanitizedNode::Block { children, .. }
            | SanitizedNode::Inline { children, .. }
            | SanitizedNode::Fragment(children) => children,
            _ => &[],
        }
    }

    /// Concatenated text of this subtree, in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            SanitizedNode::Text(run) => {
                for segment in run.segments() {
                    out.push_str(&segment.text);
                }
            }
            _ => {
                for child in self.children() {
                    child.collect_text(out);
                }
            }
        }
    }

    pub fn contains_image(&self) -> bool {
        match self {
            SanitizedNode::Image { .. } => true,
            _ => self.children().iter().any(SanitizedNode::contains_image),
        }
    }

    /// Non-whitespace text or an image somewhere in the subtree.
    pub fn has_substance(&self) -> bool {
        match self {
            SanitizedNode::Text(run) => !run.is_blank(),
            SanitizedNode::Image { .. } => true,
            SanitizedNode::LineBreak => false,
            _ => self.children().iter().any(SanitizedNode::has_substance),
        }
    }

    /// Pre-order walk over this node and all of its descendants.
    pub fn walk(&self, visit: &mut impl FnMut(&SanitizedNode)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }
}
