//! Word wrapping for terminal layout.
//!
//! Words are separated by single spaces and packed greedily. A word wider
//! than the line is broken at grapheme boundaries, and its last fragment
//! keeps packing with the words that follow it.

use unicode_segmentation::UnicodeSegmentation;

use super::width::{display_width, grapheme_width};

/// The line being filled: its text and display width.
struct Line {
    text: String,
    width: usize,
}

impl Line {
    fn new(text: &str, width: usize) -> Self {
        Self {
            text: text.to_string(),
            width,
        }
    }
}

/// Wrap text into lines no wider than `max_width` cells.
///
/// Returns an empty `Vec` for empty input or a zero `max_width`. A line only
/// exceeds `max_width` when a single grapheme cluster is itself wider.
pub fn wrap(text: &str, max_width: usize) -> Vec<String> {
    if text.is_empty() || max_width == 0 {
        return vec![];
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current: Option<Line> = None;

    for word in text.split(' ') {
        let word_width = display_width(word);

        if word_width > max_width {
            if let Some(line) = current.take() {
                lines.push(line.text);
            }
            current = Some(break_word(word, max_width, &mut lines));
            continue;
        }

        current = match current.take() {
            None => Some(Line::new(word, word_width)),
            Some(mut line) if line.width + 1 + word_width <= max_width => {
                line.text.push(' ');
                line.text.push_str(word);
                line.width += 1 + word_width;
                Some(line)
            }
            Some(line) => {
                lines.push(line.text);
                Some(Line::new(word, word_width))
            }
        };
    }

    if let Some(line) = current {
        lines.push(line.text);
    }

    lines
}

/// Break an overlong word into full lines, returning the remainder fragment.
fn break_word(word: &str, max_width: usize, lines: &mut Vec<String>) -> Line {
    let mut fragment = Line::new("", 0);

    for grapheme in word.graphemes(true) {
        let gw = grapheme_width(grapheme);

        if fragment.width + gw > max_width && !fragment.text.is_empty() {
            lines.push(std::mem::take(&mut fragment.text));
            fragment.width = 0;
        }

        fragment.text.push_str(grapheme);
        fragment.width += gw;
    }

    fragment
}

/// Wrap text that may contain explicit newlines.
///
/// Each `\n`-separated paragraph is wrapped on its own; an empty paragraph
/// yields one empty line. Returns an empty `Vec` for a zero `max_width`.
pub fn wrap_paragraphs(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![];
    }

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
        } else {
            lines.extend(wrap(paragraph, max_width));
        }
    }
    lines
}
