//! Border rendering.
//!
//! Paints one of the box-drawing styles around a rectangle and reports how
//! many cells a border costs so layout can shrink the content box.

use crate::types::{Attr, BorderStyle, Cell, Color, Glyph};

use super::buffer::FrameBuffer;

/// Cells a border takes away from a box: `(horizontal, vertical)`.
///
/// `(0, 0)` for `None`, one cell per side for every drawn style.
pub const fn border_inset(style: BorderStyle) -> (u16, u16) {
    match style {
        BorderStyle::None => (0, 0),
        _ => (2, 2),
    }
}

/// Draw a border around a rectangle.
///
/// A no-op for `BorderStyle::None` or when the rectangle is narrower or
/// shorter than 2 cells. Corners get the corner glyphs, the `width - 2`
/// interior columns the top/bottom glyphs, and the `height - 2` interior
/// rows the left/right glyphs. Parts off the buffer are clipped.
#[allow(clippy::too_many_arguments)]
pub fn draw_border(
    fb: &mut FrameBuffer,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    style: BorderStyle,
    fg: Color,
    bg: Color,
) {
    if style.is_none() || width < 2 || height < 2 {
        return;
    }

    let chars = style.chars();
    let glyph = |symbol: &str| Cell {
        glyph: Glyph::Cluster(symbol.to_string()),
        fg,
        bg,
        attrs: Attr::NONE,
    };

    let x2 = x.saturating_add(width - 1);
    let y2 = y.saturating_add(height - 1);

    // Corners
    fb.set_cell(x, y, glyph(chars.top_left));
    fb.set_cell(x2, y, glyph(chars.top_right));
    fb.set_cell(x, y2, glyph(chars.bottom_left));
    fb.set_cell(x2, y2, glyph(chars.bottom_right));

    // Edges walk only the interior cells that land on the buffer.
    let cols = x.saturating_add(1).max(0)..x2.min(i32::from(fb.width()));
    let rows = y.saturating_add(1).max(0)..y2.min(i32::from(fb.height()));

    for col in cols {
        fb.set_cell(col, y, glyph(chars.top));
        fb.set_cell(col, y2, glyph(chars.bottom));
    }

    for row in rows {
        fb.set_cell(x, row, glyph(chars.left));
        fb.set_cell(x2, row, glyph(chars.right));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_inset() {
        assert_eq!(border_inset(BorderStyle::None), (0, 0));
        assert_eq!(border_inset(BorderStyle::Single), (2, 2));
        assert_eq!(border_inset(BorderStyle::Double), (2, 2));
        assert_eq!(border_inset(BorderStyle::Rounded), (2, 2));
        assert_eq!(border_inset(BorderStyle::Bold), (2, 2));
        assert_eq!(border_inset(BorderStyle::Dashed), (2, 2));
    }

    #[test]
    fn test_draw_single_border() {
        let mut fb = FrameBuffer::new(5, 3);
        draw_border(&mut fb, 0, 0, 5, 3, BorderStyle::Single, Color::WHITE, Color::Default);

        assert_eq!(fb.text_lines(), vec!["┌───┐", "│   │", "└───┘"]);
        assert_eq!(fb.get_cell(0, 0).map(|c| c.fg), Some(Color::WHITE));
        assert_eq!(fb.get_cell(2, 2).map(|c| c.attrs), Some(Attr::NONE));
        // 4 corners + 3 * 2 horizontal + 1 * 2 vertical
        assert_eq!(fb.dirty_count(), 12);
    }

    #[test]
    fn test_draw_rounded_minimal_border() {
        let mut fb = FrameBuffer::new(2, 2);
        draw_border(&mut fb, 0, 0, 2, 2, BorderStyle::Rounded, Color::Default, Color::Default);
        assert_eq!(fb.text_lines(), vec!["╭╮", "╰╯"]);
    }

    #[test]
    fn test_degenerate_border_is_noop() {
        let mut fb = FrameBuffer::new(5, 5);
        draw_border(&mut fb, 0, 0, 1, 5, BorderStyle::Single, Color::Default, Color::Default);
        draw_border(&mut fb, 0, 0, 5, 1, BorderStyle::Double, Color::Default, Color::Default);
        draw_border(&mut fb, 0, 0, 5, 5, BorderStyle::None, Color::Default, Color::Default);
        assert!(fb.get_dirty_cells().is_empty());
    }

    #[test]
    fn test_border_clipped_at_buffer_edge() {
        let mut fb = FrameBuffer::new(3, 3);
        draw_border(&mut fb, 1, 1, 4, 4, BorderStyle::Bold, Color::Default, Color::Default);
        assert_eq!(fb.text_lines(), vec!["   ", " ┏━", " ┃ "]);
    }

    #[test]
    fn test_border_at_extreme_coordinates() {
        let mut fb = FrameBuffer::new(4, 4);
        draw_border(&mut fb, i32::MAX, 0, 3, 3, BorderStyle::Single, Color::Default, Color::Default);
        draw_border(&mut fb, 0, i32::MAX, 3, 3, BorderStyle::Single, Color::Default, Color::Default);
        draw_border(&mut fb, i32::MIN, i32::MIN, i32::MAX, i32::MAX, BorderStyle::Single, Color::Default, Color::Default);
        assert!(!fb.is_dirty());
    }

    #[test]
    fn test_huge_border_only_touches_visible_cells() {
        let mut fb = FrameBuffer::new(4, 4);
        draw_border(
            &mut fb,
            -1_000_000_000,
            1,
            2_000_000_000,
            2,
            BorderStyle::Single,
            Color::Default,
            Color::Default,
        );
        // Both corners are off-screen; only the two horizontal edges show.
        assert_eq!(fb.text_lines(), vec!["    ", "────", "────", "    "]);
        assert_eq!(fb.dirty_count(), 8);
    }
}
