use ratatui::text::Span;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans.iter().map(|s| s.content.width()).sum()
}

/// Cut `text` to at most `max` columns, ending with `…` when shortened
pub(super) fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Word-wrap `text` into lines of at most `max_width` columns.
/// Every line (including the first) is prefixed with `indent`.
pub(super) fn wrap_text(indent: &str, text: &str, max_width: usize) -> Vec<String> {
    let indent_len = indent.width();
    let mut lines = Vec::new();
    let mut current = indent.to_string();

    for word in text.split_whitespace() {
        let current_w = current.width();
        let space = if current_w == indent_len { 0 } else { 1 };
        if current_w + space + word.width() > max_width && current_w > indent_len {
            lines.push(current);
            current = indent.to_string();
        }
        if current.width() > indent_len {
            current.push(' ');
        }
        current.push_str(word);
    }
    if current.width() > indent_len || lines.is_empty() {
        lines.push(current);
    }
    lines
}
