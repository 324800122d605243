//! Text truncation with configurable ellipsis.
//!
//! Truncates text to fit within a terminal cell width, appending an ellipsis
//! (e.g. "…" or "...") when the text exceeds the available space.
//! Never breaks in the middle of a grapheme cluster.

use unicode_segmentation::UnicodeSegmentation;

use super::width::{display_width, grapheme_width};

/// Truncate text to fit within `max_width` terminal cells.
///
/// Text that fits is returned unchanged. Otherwise trailing grapheme
/// clusters are dropped until the kept text plus `ellipsis` fits, and the
/// ellipsis is appended. When `ellipsis` alone is wider than `max_width`,
/// the ellipsis itself is clipped. The result never exceeds `max_width`.
///
/// # Arguments
///
/// * `text` - The text to truncate
/// * `max_width` - Maximum display width in terminal cells
/// * `ellipsis` - String to append when truncated
pub fn truncate(text: &str, max_width: usize, ellipsis: &str) -> String {
    let text_width = display_width(text);
    if text_width <= max_width {
        return text.to_string();
    }

    let ellipsis_width = display_width(ellipsis);
    if max_width < ellipsis_width {
        return clip(ellipsis, max_width);
    }

    let mut kept: Vec<&str> = text.graphemes(true).collect();
    let mut kept_width = text_width;
    while kept_width + ellipsis_width > max_width {
        match kept.pop() {
            Some(grapheme) => kept_width -= grapheme_width(grapheme),
            None => break,
        }
    }

    let mut result = kept.concat();
    result.push_str(ellipsis);
    result
}

/// Keep the leading clusters of `text` that fit in `max_width`, no suffix.
pub fn clip(text: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width: usize = 0;

    for grapheme in text.graphemes(true) {
        let gw = grapheme_width(grapheme);
        if current_width + gw > max_width {
            break;
        }
        result.push_str(grapheme);
        current_width += gw;
    }

    result
}
