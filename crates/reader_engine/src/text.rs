/// Collapses every whitespace run to a single space. Leading and trailing runs
/// are kept (as one space each) so inter-element spacing survives.
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !in_run {
                out.push(' ');
                in_run = true;
            }
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    out
}

/// Length in characters of `text` once trimmed and collapsed.
pub fn collapsed_len(text: &str) -> usize {
    let mut words = 0usize;
    let mut chars = 0usize;
    for word in text.split_whitespace() {
        words += 1;
        chars += word.chars().count();
    }
    chars + words.saturating_sub(1)
}

pub fn is_blank(text: &str) -> bool {
    text.chars().all(char::is_whitespace)
}
