//! Paint a laid-out scene graph into a FrameBuffer.
//!
//! Walks the `Renderable` tree and its `LayoutNode` tree in lockstep.
//! Paint order is the tree's z-order: a box's background, then its border,
//! then its children in list order. Later writes win.

use crate::layout::text_measure::fit;
use crate::layout::LayoutNode;
use crate::primitives::{BoxStyle, Renderable, TextStyle};
use crate::renderer::{draw_border, FrameBuffer};
use crate::types::{Cell, Color, Rect};

use super::config::RenderOptions;

/// Paint `root` at the positions in `layout`.
///
/// `layout` must come from laying out `root`; nodes without a matching
/// layout entry are skipped.
pub fn paint(buffer: &mut FrameBuffer, root: &Renderable, layout: &LayoutNode, options: &RenderOptions) {
    let pad = options.pad_char.to_string();
    paint_node(buffer, root, layout, options, &pad);
}

fn paint_node(
    buffer: &mut FrameBuffer,
    node: &Renderable,
    layout: &LayoutNode,
    options: &RenderOptions,
    pad: &str,
) {
    if layout.rect.is_empty() {
        return;
    }

    match node {
        Renderable::Box { children, style } => {
            paint_box(buffer, style, layout.rect);
            for (child, child_layout) in children.iter().zip(&layout.children) {
                paint_node(buffer, child, child_layout, options, pad);
            }
        }
        Renderable::Text { style, .. } | Renderable::Span { style, .. } => {
            paint_lines(buffer, style, layout, options, pad);
        }
    }
}

fn paint_box(buffer: &mut FrameBuffer, style: &BoxStyle, rect: Rect) {
    let (x, y) = (i32::from(rect.x), i32::from(rect.y));
    let (width, height) = (i32::from(rect.width), i32::from(rect.height));

    if let Some(bg) = style.bg {
        buffer.fill_rect(x, y, width, height, &Cell::blank(bg));
    }

    if !style.border.is_none() {
        let fg = style.border_fg.or(style.fg).unwrap_or_default();
        // Without its own background the border sits on whatever is beneath.
        let bg = style
            .bg
            .or_else(|| buffer.get_cell(x, y).map(|cell| cell.bg))
            .unwrap_or_default();
        draw_border(buffer, x, y, width, height, style.border, fg, bg);
    }
}

fn paint_lines(
    buffer: &mut FrameBuffer,
    style: &TextStyle,
    layout: &LayoutNode,
    options: &RenderOptions,
    pad: &str,
) {
    let rect = layout.rect;
    let fg = style.fg.unwrap_or(Color::Default);
    let attrs = style.attrs();

    for (row, line) in layout.lines.iter().take(rect.height as usize).enumerate() {
        let fitted = fit(line, rect.width as usize, style.align, &options.ellipsis, pad);
        buffer.draw_text(
            i32::from(rect.x),
            i32::from(rect.y) + row as i32,
            &fitted,
            fg,
            style.bg,
            attrs,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::compute_layout;
    use crate::types::{Align, Attr, BorderStyle, Size, TextAlign};

    fn render(root: &Renderable, width: i32, height: i32) -> FrameBuffer {
        let mut buffer = FrameBuffer::new(width, height);
        let layout = compute_layout(root, width, height);
        paint(&mut buffer, root, &layout, &RenderOptions::default());
        buffer
    }

    #[test]
    fn test_paint_bordered_box_with_text() {
        let root = Renderable::boxed(
            BoxStyle::default().border(BorderStyle::Single).fg(Color::CYAN),
            [Renderable::text("hi")],
        );

        let buffer = render(&root, 6, 3);
        assert_eq!(buffer.text_lines(), vec!["┌────┐", "│hi  │", "└────┘"]);
        assert_eq!(buffer.get_cell(0, 0).map(|c| c.fg), Some(Color::CYAN));
    }

    #[test]
    fn test_background_then_children() {
        let root = Renderable::boxed(
            BoxStyle::default().bg(Color::BLUE),
            [Renderable::styled_span("ok", TextStyle::default().fg(Color::WHITE).bold())],
        );

        let buffer = render(&root, 4, 2);
        let cell = buffer.get_cell(0, 0).cloned().unwrap_or_default();
        assert_eq!(cell.symbol(), "o");
        assert_eq!(cell.fg, Color::WHITE);
        // Text without a background keeps the box's.
        assert_eq!(cell.bg, Color::BLUE);
        assert_eq!(cell.attrs, Attr::BOLD);
        assert_eq!(buffer.get_cell(3, 1).map(|c| c.bg), Some(Color::BLUE));
    }

    #[test]
    fn test_span_truncated_with_ellipsis() {
        let root = Renderable::column([Renderable::span("hello world")]);
        let buffer = render(&root, 6, 1);
        assert_eq!(buffer.text_lines(), vec!["hello…"]);
    }

    #[test]
    fn test_text_alignment_pads_line() {
        let text = Renderable::styled_text("ab", TextStyle::default().align(TextAlign::Right));
        let root = Renderable::boxed(
            BoxStyle::default(),
            [Renderable::boxed(BoxStyle::default().width(Size::Px(5)), [text.clone()])],
        );
        let buffer = render(&root, 6, 1);
        // The text box is only as wide as its content, so nothing to align.
        assert_eq!(buffer.text_lines(), vec!["ab    "]);

        let stretched = Renderable::boxed(
            BoxStyle::default().align(Align::Stretch),
            [text],
        );
        let buffer = render(&stretched, 6, 1);
        assert_eq!(buffer.text_lines(), vec!["    ab"]);
    }

    #[test]
    fn test_border_without_background_keeps_parent_background() {
        let inner = Renderable::boxed(
            BoxStyle::default()
                .width(Size::Px(3))
                .height(Size::Px(3))
                .border(BorderStyle::Rounded),
            [],
        );
        let root = Renderable::boxed(BoxStyle::default().bg(Color::GREEN), [inner]);

        let buffer = render(&root, 4, 4);
        assert_eq!(buffer.get_cell(0, 0).map(Cell::symbol), Some("╭"));
        assert_eq!(buffer.get_cell(0, 0).map(|c| c.bg), Some(Color::GREEN));
    }

    #[test]
    fn test_empty_layout_paints_nothing() {
        let root = Renderable::boxed(BoxStyle::default().bg(Color::RED), [Renderable::text("x")]);
        let buffer = render(&root, 0, 0);
        assert!(!buffer.is_dirty());
    }
}
