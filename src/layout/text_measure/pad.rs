//! Padding and fitting text to an exact cell width.

use crate::types::TextAlign;

use super::truncate::truncate;
use super::width::display_width;

/// Build `width` cells of filler out of `fill`.
///
/// `fill` is repeated by display width, not character count. Cells a wide
/// fill cannot cover exactly are filled with spaces; a zero-width fill
/// falls back to spaces entirely.
fn filler(fill: &str, width: usize) -> String {
    let fill_width = display_width(fill);
    if fill_width == 0 {
        return " ".repeat(width);
    }

    let mut result = fill.repeat(width / fill_width);
    result.push_str(&" ".repeat(width % fill_width));
    result
}

/// Pad on the left so the text is right-aligned in `width` cells.
///
/// Text already at least `width` wide is returned unchanged.
pub fn pad_left(text: &str, width: usize, fill: &str) -> String {
    let needed = width.saturating_sub(display_width(text));
    if needed == 0 {
        return text.to_string();
    }
    let mut result = filler(fill, needed);
    result.push_str(text);
    result
}

/// Pad on the right so the text is left-aligned in `width` cells.
pub fn pad_right(text: &str, width: usize, fill: &str) -> String {
    let needed = width.saturating_sub(display_width(text));
    if needed == 0 {
        return text.to_string();
    }
    let mut result = text.to_string();
    result.push_str(&filler(fill, needed));
    result
}

/// Center the text in `width` cells; an odd extra cell goes on the right.
pub fn pad_center(text: &str, width: usize, fill: &str) -> String {
    let needed = width.saturating_sub(display_width(text));
    if needed == 0 {
        return text.to_string();
    }
    let left = needed / 2;
    let mut result = filler(fill, left);
    result.push_str(text);
    result.push_str(&filler(fill, needed - left));
    result
}

/// Make `text` exactly `width` cells wide.
///
/// Wider text is truncated with `ellipsis`; whatever is left narrower than
/// `width` is padded with `pad` according to `alignment`. That includes a
/// truncation that came up a cell short because a wide cluster straddled
/// the cut.
pub fn fit(text: &str, width: usize, alignment: TextAlign, ellipsis: &str, pad: &str) -> String {
    let text_width = display_width(text);
    if text_width == width {
        return text.to_string();
    }

    let shown = if text_width > width {
        truncate(text, width, ellipsis)
    } else {
        text.to_string()
    };

    match alignment {
        TextAlign::Left => pad_right(&shown, width, pad),
        TextAlign::Right => pad_left(&shown, width, pad),
        TextAlign::Center => pad_center(&shown, width, pad),
    }
}
