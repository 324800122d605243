//! Flexbox-style layout.
//!
//! Turns a [`Renderable`] tree plus an available area into a [`LayoutNode`]
//! tree of absolute rectangles.
//!
//! # Algorithm
//!
//! 1. **Measure** (bottom-up): natural size of every node with unbounded
//!    space, cached in a [`Measured`] tree.
//! 2. **Arrange** (top-down): resolve each child's [`Size`] against the
//!    parent's content box, share out `Fill` space, then position children
//!    along the main axis per [`Justify`] and the cross axis per [`Align`].
//!
//! Widths are resolved before heights. A wrapped text block only knows its
//! height once its width is fixed, so `Auto` heights are re-derived at the
//! final width instead of read from the cache.
//!
//! # Design Decisions
//!
//! - **No failure**: degenerate space yields zero-sized rects.
//! - **Clipping**: a child never extends past its parent's content box;
//!   anything that would overflow is cut at the trailing edge.
//! - **Integer cells**: `Pct` floors, and `Fill` hands the remainder out one
//!   cell at a time to the earliest `Fill` children.

use tracing::trace;

use crate::primitives::{BoxStyle, Renderable};
use crate::renderer::border_inset;
use crate::types::{Align, Edges, Justify, Rect, Size};

use super::text_measure::{display_width, wrap_paragraphs};
use super::types::LayoutNode;

/// Natural border-box size of a node given unbounded space.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Measured {
    pub width: u16,
    pub height: u16,
    pub children: Vec<Measured>,
}

// =============================================================================
// HELPERS
// =============================================================================

fn clamp_dimension(value: i32) -> u16 {
    value.clamp(0, u16::MAX as i32) as u16
}

fn to_cells(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

fn narrow(value: u32) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

/// Floor of `pct` percent of `total`.
fn percent(total: u16, pct: u8) -> u16 {
    narrow(u32::from(total) * u32::from(pct.min(100)) / 100)
}

/// Total gap between `count` adjacent children.
fn total_gap(gap: u16, count: usize) -> u32 {
    let between = u32::try_from(count.saturating_sub(1)).unwrap_or(u32::MAX);
    u32::from(gap).saturating_mul(between)
}

/// Padding plus border.
fn insets(style: &BoxStyle) -> Edges {
    let (horizontal, vertical) = border_inset(style.border);
    style
        .padding
        .plus(&Edges::symmetric(vertical / 2, horizontal / 2))
}

/// Sizing inputs of a node: `(width, height, margin)`.
///
/// Text and spans size to content and carry no margin.
fn sizing(node: &Renderable) -> (Size, Size, Edges) {
    match node {
        Renderable::Box { style, .. } => (style.width, style.height, style.margin),
        Renderable::Text { .. } | Renderable::Span { .. } => {
            (Size::Auto, Size::Auto, Edges::ZERO)
        }
    }
}

// =============================================================================
// MEASURE
// =============================================================================

/// Natural size of a subtree with unbounded space.
///
/// Text measures as its widest paragraph by its paragraph count, a span as
/// its display width by one row, and a box as the sum of its children's
/// outer sizes along the main axis (plus gaps) by the largest along the
/// cross axis, plus padding and border. `Px` sizes override content.
pub fn measure(node: &Renderable) -> Measured {
    match node {
        Renderable::Text { content, .. } => {
            let (width, height) = content
                .split('\n')
                .fold((0, 0), |(w, h), paragraph| {
                    (display_width(paragraph).max(w), h + 1)
                });
            Measured {
                width: to_cells(width),
                height: to_cells(height),
                children: Vec::new(),
            }
        }
        Renderable::Span { content, .. } => Measured {
            width: to_cells(display_width(content)),
            height: 1,
            children: Vec::new(),
        },
        Renderable::Box { children, style } => {
            let measured: Vec<Measured> = children.iter().map(measure).collect();
            let row = style.flex_direction.is_row();

            let mut main = total_gap(style.gap, children.len());
            let mut cross = 0u32;
            for (child, m) in children.iter().zip(&measured) {
                let (_, _, margin) = sizing(child);
                let outer_w = u32::from(m.width) + u32::from(margin.horizontal());
                let outer_h = u32::from(m.height) + u32::from(margin.vertical());
                let (child_main, child_cross) = if row { (outer_w, outer_h) } else { (outer_h, outer_w) };
                main = main.saturating_add(child_main);
                cross = cross.max(child_cross);
            }

            let (content_w, content_h) = if row { (main, cross) } else { (cross, main) };
            let insets = insets(style);
            let width = match style.width {
                Size::Px(n) => n,
                _ => narrow(content_w.saturating_add(u32::from(insets.horizontal()))),
            };
            let height = match style.height {
                Size::Px(n) => n,
                _ => narrow(content_h.saturating_add(u32::from(insets.vertical()))),
            };

            Measured {
                width,
                height,
                children: measured,
            }
        }
    }
}

/// Height of a node once its border-box width is fixed.
fn height_for_width(node: &Renderable, measured: &Measured, width: u16) -> u16 {
    match node {
        Renderable::Text { content, .. } => {
            to_cells(wrap_paragraphs(content, width as usize).len().max(1))
        }
        Renderable::Span { .. } => 1,
        Renderable::Box { children, style } => {
            if let Size::Px(n) = style.height {
                return n;
            }
            let insets = insets(style);
            let inner_width = width.saturating_sub(insets.horizontal());
            let sizes = child_sizes(style, children, &measured.children, inner_width, None);

            let mut outer = children
                .iter()
                .zip(&sizes)
                .map(|(child, &(_, h))| u32::from(h) + u32::from(sizing(child).2.vertical()));
            let content = if style.flex_direction.is_row() {
                outer.max().unwrap_or(0)
            } else {
                outer.try_fold(total_gap(style.gap, children.len()), u32::checked_add)
                    .unwrap_or(u32::MAX)
            };
            narrow(content.saturating_add(u32::from(insets.vertical())))
        }
    }
}

// =============================================================================
// SIZE RESOLUTION
// =============================================================================

/// Border-box sizes `(width, height)` of a box's children.
///
/// `content_height` is `None` while the parent's own height is still being
/// derived from its content; percentages and `Fill` on the height axis then
/// fall back to the natural height.
fn child_sizes(
    style: &BoxStyle,
    children: &[Renderable],
    measured: &[Measured],
    content_width: u16,
    content_height: Option<u16>,
) -> Vec<(u16, u16)> {
    let stretch = style.align == Align::Stretch;

    if style.flex_direction.is_row() {
        let fixed: Vec<Option<u16>> = children
            .iter()
            .zip(measured)
            .map(|(child, m)| {
                let (width, _, margin) = sizing(child);
                match width {
                    Size::Px(n) => Some(n),
                    Size::Pct(p) => Some(percent(content_width, p)),
                    Size::Auto => Some(m.width.min(content_width.saturating_sub(margin.horizontal()))),
                    Size::Fill => None,
                }
            })
            .collect();
        let margins: Vec<u16> = children.iter().map(|c| sizing(c).2.horizontal()).collect();
        let widths = distribute_main(&fixed, &margins, content_width, style.gap);

        children
            .iter()
            .zip(measured)
            .zip(widths)
            .map(|((child, m), width)| {
                let (_, height, margin) = sizing(child);
                let available = content_height.map(|h| h.saturating_sub(margin.vertical()));
                let height = cross_size(height, stretch, available, content_height, || {
                    height_for_width(child, m, width)
                });
                (width, height)
            })
            .collect()
    } else {
        let widths: Vec<u16> = children
            .iter()
            .zip(measured)
            .map(|(child, m)| {
                let (width, _, margin) = sizing(child);
                let available = content_width.saturating_sub(margin.horizontal());
                cross_size(width, stretch, Some(available), Some(content_width), || m.width)
            })
            .collect();

        let fixed: Vec<Option<u16>> = children
            .iter()
            .zip(measured)
            .zip(&widths)
            .map(|((child, m), &width)| {
                let (_, height, margin) = sizing(child);
                match (height, content_height) {
                    (Size::Px(n), _) => Some(n),
                    (Size::Pct(p), Some(total)) => Some(percent(total, p)),
                    (Size::Fill, Some(_)) => None,
                    (Size::Auto, Some(total)) => Some(
                        height_for_width(child, m, width).min(total.saturating_sub(margin.vertical())),
                    ),
                    (_, None) => Some(height_for_width(child, m, width)),
                }
            })
            .collect();
        let margins: Vec<u16> = children.iter().map(|c| sizing(c).2.vertical()).collect();
        let heights = distribute_main(&fixed, &margins, content_height.unwrap_or(0), style.gap);

        widths.into_iter().zip(heights).collect()
    }
}

/// Resolve a cross-axis size.
///
/// `available` is the parent's content extent minus the child's margins,
/// `content` the full extent; either may be unknown.
fn cross_size(
    size: Size,
    stretch: bool,
    available: Option<u16>,
    content: Option<u16>,
    natural: impl FnOnce() -> u16,
) -> u16 {
    match (size, available, content) {
        (_, Some(available), _) if stretch => available,
        (Size::Px(n), _, _) => n,
        (Size::Pct(p), _, Some(total)) => percent(total, p),
        (Size::Fill, Some(available), _) => available,
        (Size::Auto, Some(available), _) => natural().min(available),
        _ => natural(),
    }
}

/// Resolve main-axis sizes.
///
/// `None` entries are `Fill` children. They split what the fixed children,
/// their margins and the gaps leave over; the remainder goes one cell at a
/// time to the earliest of them. A `Fill` child's margin comes out of its
/// own share.
fn distribute_main(fixed: &[Option<u16>], margins: &[u16], available: u16, gap: u16) -> Vec<u16> {
    let fill_count = fixed.iter().filter(|size| size.is_none()).count();
    if fill_count == 0 {
        return fixed.iter().map(|size| size.unwrap_or_default()).collect();
    }

    let used = fixed
        .iter()
        .zip(margins)
        .filter_map(|(size, &margin)| size.map(|s| u32::from(s) + u32::from(margin)))
        .fold(total_gap(gap, fixed.len()), u32::saturating_add);
    let remaining = u32::from(available).saturating_sub(used);
    let count = u32::try_from(fill_count).unwrap_or(u32::MAX);
    let share = remaining / count;
    let mut extra = remaining % count;

    trace!(fill_count, remaining, share, "distributing fill space");

    fixed
        .iter()
        .zip(margins)
        .map(|(size, &margin)| match size {
            Some(s) => *s,
            None => {
                let mut outer = share;
                if extra > 0 {
                    outer += 1;
                    extra -= 1;
                }
                narrow(outer).saturating_sub(margin)
            }
        })
        .collect()
}

// =============================================================================
// POSITIONING
// =============================================================================

/// Leading offset of child `index` of `count` from the packed position.
///
/// Cumulative: the offsets already include the space given to earlier
/// children, and never exceed `free`.
fn justify_offset(justify: Justify, free: u32, index: usize, count: usize) -> u32 {
    let free = u64::from(free);
    let i = index as u64;
    let n = (count as u64).max(1);

    let offset = match justify {
        Justify::Start => 0,
        Justify::End => free,
        Justify::Center => free / 2,
        Justify::SpaceBetween if n > 1 => free * i / (n - 1),
        Justify::SpaceBetween => 0,
        Justify::SpaceAround => free * (2 * i + 1) / (2 * n),
    };
    u32::try_from(offset).unwrap_or(u32::MAX)
}

/// Cut a rect at the trailing edges of `bounds`.
fn clip_to(bounds: Rect, x: u32, y: u32, width: u16, height: u16) -> Rect {
    let right = u32::from(bounds.right());
    let bottom = u32::from(bounds.bottom());
    let x = x.min(right);
    let y = y.min(bottom);
    Rect::new(
        narrow(x),
        narrow(y),
        narrow(u32::from(width).min(right - x)),
        narrow(u32::from(height).min(bottom - y)),
    )
}

/// Position children of sizes `sizes` inside `content`.
fn place_children(style: &BoxStyle, children: &[Renderable], sizes: &[(u16, u16)], content: Rect) -> Vec<Rect> {
    let row = style.flex_direction.is_row();
    let (main_start, main_extent, cross_start, cross_extent) = if row {
        (content.x, content.width, content.y, content.height)
    } else {
        (content.y, content.height, content.x, content.width)
    };

    // ((main lead, main trail), (cross lead, cross trail))
    let margins: Vec<((u16, u16), (u16, u16))> = children
        .iter()
        .map(|child| {
            let (_, _, m) = sizing(child);
            if row {
                ((m.left, m.right), (m.top, m.bottom))
            } else {
                ((m.top, m.bottom), (m.left, m.right))
            }
        })
        .collect();
    let along = |&(w, h): &(u16, u16)| if row { (w, h) } else { (h, w) };

    let used = sizes
        .iter()
        .zip(&margins)
        .map(|(size, &((lead, trail), _))| {
            u32::from(along(size).0) + u32::from(lead) + u32::from(trail)
        })
        .fold(total_gap(style.gap, sizes.len()), u32::saturating_add);
    let free = u32::from(main_extent).saturating_sub(used);
    let count = sizes.len();
    let gap = u32::from(style.gap);

    let mut cursor = u32::from(main_start);
    sizes
        .iter()
        .zip(&margins)
        .enumerate()
        .map(|(i, (size, &((main_lead, main_trail), (cross_lead, cross_trail))))| {
            let (main, cross) = along(size);

            let main_pos = cursor
                .saturating_add(justify_offset(style.justify, free, i, count))
                .saturating_add(u32::from(main_lead));
            cursor = cursor
                .saturating_add(u32::from(main_lead) + u32::from(main) + u32::from(main_trail))
                .saturating_add(gap);

            let outer_cross = u32::from(cross) + u32::from(cross_lead) + u32::from(cross_trail);
            let slack = u32::from(cross_extent).saturating_sub(outer_cross);
            let shift = match style.align {
                Align::Start | Align::Stretch => 0,
                Align::End => slack,
                Align::Center => slack / 2,
            };
            let cross_pos = u32::from(cross_start) + shift + u32::from(cross_lead);

            if row {
                clip_to(content, main_pos, cross_pos, main, cross)
            } else {
                clip_to(content, cross_pos, main_pos, cross, main)
            }
        })
        .collect()
}

// =============================================================================
// ARRANGE
// =============================================================================

fn arrange(node: &Renderable, measured: &Measured, rect: Rect) -> LayoutNode {
    match node {
        Renderable::Text { content, .. } => {
            let mut lines = if rect.is_empty() {
                Vec::new()
            } else {
                wrap_paragraphs(content, rect.width as usize)
            };
            lines.truncate(rect.height as usize);
            LayoutNode::leaf(rect, lines)
        }
        Renderable::Span { content, .. } => {
            let lines = if rect.is_empty() {
                Vec::new()
            } else {
                vec![content.clone()]
            };
            LayoutNode::leaf(rect, lines)
        }
        Renderable::Box { children, style } => {
            let content = rect.inset(&insets(style));
            let sizes = child_sizes(style, children, &measured.children, content.width, Some(content.height));
            let rects = place_children(style, children, &sizes, content);

            let children = children
                .iter()
                .zip(&measured.children)
                .zip(rects)
                .map(|((child, m), child_rect)| arrange(child, m, child_rect))
                .collect();

            LayoutNode {
                rect,
                lines: Vec::new(),
                children,
            }
        }
    }
}

/// Lay out a scene graph in a `width` x `height` area anchored at (0, 0).
///
/// The root takes the whole area (less its margin) for `Auto` and `Fill`;
/// `Px` and `Pct` resolve against the area. Negative dimensions are
/// treated as zero.
pub fn compute_layout(root: &Renderable, width: i32, height: i32) -> LayoutNode {
    let available = Rect::new(0, 0, clamp_dimension(width), clamp_dimension(height));
    let measured = measure(root);

    let (width_size, height_size, margin) = sizing(root);
    let area = available.inset(&margin);
    let resolve = |size: Size, extent: u16| match size {
        Size::Px(n) => n.min(extent),
        Size::Pct(p) => percent(extent, p),
        Size::Fill | Size::Auto => extent,
    };
    let rect = Rect::new(
        area.x,
        area.y,
        resolve(width_size, area.width),
        resolve(height_size, area.height),
    );

    trace!(
        available_width = available.width,
        available_height = available.height,
        width = rect.width,
        height = rect.height,
        "layout root resolved"
    );

    arrange(root, &measured, rect)
}

// =============================================================================
// TESTS
// =============================================================================
