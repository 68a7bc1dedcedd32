//! Marks atomic runs of text as keep-together so the renderer never breaks a
//! line inside them.
//!
//! Tokens: ellipsis runs, em-dash runs, a number immediately followed by a
//! unit or counter, and Latin words (internal apostrophes included). Scanning
//! goes through `Regex::find_iter`, which holds no state between calls.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{SanitizedNode, TextRun, TextSegment};

// Longer units come before their prefixes: alternation is leftmost-first.
// Latin units must end at an ASCII word boundary so "5minutes" never yields "5m".
const KEEP_TOGETHER_PATTERN: &str = r"(?x)
    (?:\.{2,}|[…⋯]+)
  | [—―]+
  | [0-9０-９]+(?:[.．][0-9０-９]+)?
    (?:
        (?:mg|kg|km|cm|mm|°C|°F|g|t|m)(?-u:\b)
      | ℃|公斤|千克|公里|千米|厘米|毫米|小时|分钟
      | %|％|克|斤|吨|米|度|年|月|日|号|点|分|秒|岁|天|周
    )
  | [A-Za-z]+(?:['’][A-Za-z]+)*
";

static KEEP_TOGETHER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(KEEP_TOGETHER_PATTERN).expect("keep-together pattern is a valid regex")
});

/// Byte span of one keep-together token inside a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSpan {
    pub start: usize,
    pub end: usize,
}

/// Non-overlapping keep-together tokens of `text`, left to right.
pub fn find_tokens(text: &str) -> Vec<TokenSpan> {
    KEEP_TOGETHER
        .find_iter(text)
        .map(|m| TokenSpan {
            start: m.start(),
            end: m.end(),
        })
        .collect()
}

/// Splits every plain segment of every text run under `root`.
///
/// Segments already marked keep-together are left alone, so running this
/// twice changes nothing.
pub fn protect(root: &mut SanitizedNode) -> usize {
    let mut marked = 0;
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        match node {
            SanitizedNode::Text(run) => marked += protect_run(run),
            SanitizedNode::Block { children, .. }
            | SanitizedNode::Inline { children, .. }
            | SanitizedNode::Fragment(children) => stack.extend(children.iter_mut().rev()),
            SanitizedNode::Image { .. } | SanitizedNode::LineBreak => {}
        }
    }
    marked
}

/// Returns the number of new keep-together segments.
pub fn protect_run(run: &mut TextRun) -> usize {
    let mut marked = 0;
    let mut segments = Vec::with_capacity(run.segments().len());
    for segment in run.segments() {
        if segment.keep_together {
            segments.push(segment.clone());
            continue;
        }
        let tokens = find_tokens(&segment.text);
        if tokens.is_empty() {
            segments.push(segment.clone());
            continue;
        }
        marked += tokens.len();
        split_into(&segment.text, &tokens, &mut segments);
    }
    if marked > 0 {
        run.replace_segments(segments);
    }
    marked
}

fn split_into(text: &str, tokens: &[TokenSpan], out: &mut Vec<TextSegment>) {
    let mut cursor = 0;
    for token in tokens {
        if token.start > cursor {
            out.push(TextSegment::plain(&text[cursor..token.start]));
        }
        out.push(TextSegment::keep_together(&text[token.start..token.end]));
        cursor = token.end;
    }
    if cursor < text.len() {
        out.push(TextSegment::plain(&text[cursor..]));
    }
}
