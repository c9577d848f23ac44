//! Payload-safe text for checkout fields.

use unicode_segmentation::UnicodeSegmentation;

const ELLIPSIS: char = '…';

/// Strips control characters, collapses whitespace runs, and truncates to at
/// most `max_chars` Unicode scalar values.
///
/// Truncation happens on a grapheme boundary and is marked with a trailing
/// `…`, which counts toward the limit.
///
/// # Examples
/// ```
/// use quote_engine::boundary::sanitize_text;
///
/// assert_eq!(sanitize_text("  part\n\tA  ", 20), "part A");
/// assert_eq!(sanitize_text("abcdefgh", 5), "abcd…");
/// ```
pub fn sanitize_text(input: &str, max_chars: usize) -> String {
    let cleaned: String = input
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }
    if max_chars == 0 {
        return String::new();
    }

    let budget = max_chars - 1;
    let mut used = 0;
    let mut out = String::with_capacity(collapsed.len());
    for grapheme in collapsed.graphemes(true) {
        let width = grapheme.chars().count();
        if used + width > budget {
            break;
        }
        out.push_str(grapheme);
        used += width;
    }
    out.truncate(out.trim_end().len());
    out.push(ELLIPSIS);
    out
}
