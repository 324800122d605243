//! Core width calculation for terminal text.
//!
//! Measures the display width of characters, grapheme clusters, and strings
//! in terminal cells. Uses Unicode East Asian Width for character widths and
//! grapheme cluster analysis for emoji sequences.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

/// Display width of a single Unicode codepoint in terminal cells.
///
/// - `0` for control characters, combining marks, zero-width characters
/// - `1` for normal-width characters (ASCII, Latin, Cyrillic, etc.)
/// - `2` for wide characters (CJK ideographs, fullwidth forms, emoji)
#[inline]
pub fn char_width(c: char) -> usize {
    if c.is_control() {
        return 0;
    }
    // Terminals draw these emoji blocks wide even where the tables say 1.
    match c as u32 {
        0x1F300..=0x1F5FF => 2,
        0x1F600..=0x1F64F => 2,
        0x1F680..=0x1F6FF => 2,
        0x1F900..=0x1F9FF => 2,
        0x1FA70..=0x1FAFF => 2,
        _ => c.width().unwrap_or(0),
    }
}

/// Display width of a grapheme cluster in terminal cells.
///
/// A grapheme cluster is a user-perceived character that may span multiple
/// Unicode codepoints. Examples:
/// - `é` (e + combining acute) → width 1
/// - `👨‍👩‍👧‍👦` (family ZWJ sequence) → width 2
/// - `🇺🇸` (flag: regional indicator pair) → width 2
/// - `👍🏽` (thumbs up + skin tone) → width 2
///
/// # Rules
///
/// 1. Single codepoint → delegates to `char_width()`
/// 2. Regional indicator pair (flags) → 2
/// 3. Emoji sequence (contains ZWJ, VS16, skin tone, keycap) → 2
/// 4. Base + combining marks → base character width
pub fn grapheme_width(grapheme: &str) -> usize {
    let mut chars = grapheme.chars();
    let Some(first) = chars.next() else {
        return 0;
    };

    if chars.as_str().is_empty() {
        return char_width(first);
    }

    if (0x1F1E6..=0x1F1FF).contains(&(first as u32)) {
        return 2;
    }

    for c in chars {
        match c as u32 {
            0x200D => return 2,            // ZWJ sequence
            0xFE0F => return 2,            // VS16 emoji presentation
            0x1F3FB..=0x1F3FF => return 2, // Fitzpatrick skin tone
            0x20E3 => return 2,            // enclosing keycap
            _ => {}
        }
    }

    char_width(first)
}

/// Display width of a string in terminal cells.
///
/// Summed over grapheme clusters rather than code points, so combining
/// sequences and emoji clusters measure correctly.
pub fn display_width(s: &str) -> usize {
    if s.is_empty() {
        return 0;
    }

    // Pure ASCII: count printable bytes directly.
    if s.is_ascii() {
        return s.bytes().filter(|b| (0x20..0x7F).contains(b)).count();
    }

    s.graphemes(true).map(grapheme_width).sum()
}
