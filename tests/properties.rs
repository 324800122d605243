use lattice_tui::layout::text_measure::{display_width, fit, truncate, wrap};
use lattice_tui::layout::{compute_layout, LayoutNode};
use lattice_tui::{
    border_inset, Align, BorderStyle, BoxStyle, Cell, Edges, FlexDirection, FrameBuffer, Justify, Renderable, Size,
    TextAlign,
};
use proptest::prelude::*;

fn text_strategy() -> impl Strategy<Value = String> {
    "[a-z 你好éー]{0,40}"
}

fn align_strategy() -> impl Strategy<Value = TextAlign> {
    prop_oneof![
        Just(TextAlign::Left),
        Just(TextAlign::Center),
        Just(TextAlign::Right),
    ]
}

fn justify_strategy() -> impl Strategy<Value = Justify> {
    prop_oneof![
        Just(Justify::Start),
        Just(Justify::End),
        Just(Justify::Center),
        Just(Justify::SpaceBetween),
        Just(Justify::SpaceAround),
    ]
}

fn size_strategy() -> impl Strategy<Value = Size> {
    prop_oneof![
        Just(Size::Auto),
        Just(Size::Fill),
        (0u16..16).prop_map(Size::Px),
        (0u8..=100).prop_map(Size::Pct),
    ]
}

fn edges_strategy() -> impl Strategy<Value = Edges> {
    (0u16..3, 0u16..3, 0u16..3, 0u16..3).prop_map(|(top, right, bottom, left)| Edges::new(top, right, bottom, left))
}

fn box_style_strategy() -> impl Strategy<Value = BoxStyle> {
    (
        (size_strategy(), size_strategy()),
        (edges_strategy(), edges_strategy()),
        any::<bool>(),
        justify_strategy(),
        prop_oneof![Just(Align::Start), Just(Align::End), Just(Align::Center), Just(Align::Stretch)],
        0u16..3,
        prop_oneof![Just(BorderStyle::None), Just(BorderStyle::Single), Just(BorderStyle::Rounded)],
    )
        .prop_map(|((width, height), (padding, margin), row, justify, align, gap, border)| {
            let direction = if row { FlexDirection::Row } else { FlexDirection::Column };
            BoxStyle::default()
                .width(width)
                .height(height)
                .padding(padding)
                .margin(margin)
                .direction(direction)
                .justify(justify)
                .align(align)
                .gap(gap)
                .border(border)
        })
}

/// Random scene graphs: boxes of every sizing kind around text and span leaves.
fn tree_strategy() -> impl Strategy<Value = Renderable> {
    let leaf = prop_oneof![
        text_strategy().prop_map(Renderable::text),
        text_strategy().prop_map(Renderable::span),
    ];
    leaf.prop_recursive(4, 40, 4, |inner| {
        (box_style_strategy(), prop::collection::vec(inner, 0..4))
            .prop_map(|(style, children)| Renderable::boxed(style, children))
    })
}

/// Every child of a box lies inside the box's content area, all the way down.
fn check_containment(node: &Renderable, layout: &LayoutNode) -> Result<(), TestCaseError> {
    let Some(style) = node.box_style() else {
        prop_assert!(layout.children.is_empty());
        return Ok(());
    };

    let (horizontal, vertical) = border_inset(style.border);
    let content = layout
        .rect
        .inset(&style.padding.plus(&Edges::symmetric(vertical / 2, horizontal / 2)));
    prop_assert_eq!(layout.children.len(), node.children().len());

    for (child, child_layout) in node.children().iter().zip(&layout.children) {
        prop_assert!(
            content.contains_rect(&child_layout.rect),
            "{:?} escapes content box {:?} of {:?}",
            child_layout.rect,
            content,
            layout.rect
        );
        prop_assert!(child_layout.lines.len() <= usize::from(child_layout.rect.height));
        check_containment(child, child_layout)?;
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn set_then_get_in_bounds(
        width in 1i32..40,
        height in 1i32..20,
        x in 0i32..40,
        y in 0i32..20,
        symbol in "[a-zA-Z0-9]",
    ) {
        prop_assume!(x < width && y < height);
        let mut buffer = FrameBuffer::new(width, height);
        let cell = Cell::new(symbol.as_str());
        buffer.set_cell(x, y, cell.clone());
        prop_assert_eq!(buffer.get_cell(x, y), Some(&cell));
        prop_assert_eq!(buffer.dirty_count(), 1);
    }

    #[test]
    fn out_of_bounds_writes_change_nothing(
        width in 0i32..20,
        height in 0i32..20,
        x in -30i32..60,
        y in -30i32..60,
    ) {
        prop_assume!(x < 0 || y < 0 || x >= width || y >= height);
        let mut buffer = FrameBuffer::new(width, height);
        let before = buffer.clone();
        buffer.set_cell(x, y, Cell::new("X"));
        prop_assert_eq!(&buffer, &before);
        prop_assert!(buffer.get_cell(x, y).is_none());
    }

    #[test]
    fn resize_preserves_overlap(
        old_w in 1i32..20,
        old_h in 1i32..20,
        new_w in 0i32..20,
        new_h in 0i32..20,
    ) {
        let mut buffer = FrameBuffer::new(old_w, old_h);
        for y in 0..old_h {
            for x in 0..old_w {
                buffer.set_cell(x, y, Cell::new(format!("{}", (x + y) % 10)));
            }
        }

        buffer.resize(new_w, new_h);

        for y in 0..new_h {
            for x in 0..new_w {
                let expected = if x < old_w && y < old_h {
                    Cell::new(format!("{}", (x + y) % 10))
                } else {
                    Cell::default()
                };
                prop_assert_eq!(buffer.get_cell(x, y), Some(&expected));
            }
        }
        prop_assert_eq!(buffer.dirty_count(), (new_w * new_h) as usize);
    }

    #[test]
    fn truncate_never_exceeds_width(text in text_strategy(), width in 0usize..30) {
        prop_assert!(display_width(&truncate(&text, width, "…")) <= width);
        prop_assert!(display_width(&truncate(&text, width, "...")) <= width);
    }

    #[test]
    fn wrap_lines_fit(text in text_strategy(), width in 2usize..30) {
        for line in wrap(&text, width) {
            prop_assert!(
                display_width(&line) <= width,
                "line {:?} exceeds {}",
                line,
                width
            );
        }
    }

    #[test]
    fn fit_is_always_exactly_the_width(
        text in text_strategy(),
        width in 0usize..30,
        align in align_strategy(),
    ) {
        let fitted = fit(&text, width, align, "…", " ");
        prop_assert_eq!(display_width(&fitted), width);
    }

    #[test]
    fn fill_children_take_the_remaining_space(
        fixed in prop::collection::vec(0u16..6, 0..4),
        fills in 1usize..4,
        width in 0u16..60,
    ) {
        let mut children: Vec<Renderable> = fixed
            .iter()
            .map(|&w| Renderable::boxed(BoxStyle::default().width(Size::Px(w)), []))
            .collect();
        children.extend(
            (0..fills).map(|_| Renderable::boxed(BoxStyle::default().width(Size::Fill), [])),
        );
        let root = Renderable::boxed(BoxStyle::default().direction(FlexDirection::Row), children);

        let layout = compute_layout(&root, i32::from(width), 3);
        let fixed_total: u16 = fixed.iter().sum();
        let fill_total: u16 = layout.children[fixed.len()..].iter().map(|c| c.rect.width).sum();
        prop_assert_eq!(fill_total, width.saturating_sub(fixed_total));

        let fill_widths: Vec<u16> = layout.children[fixed.len()..].iter().map(|c| c.rect.width).collect();
        let (min, max) = (
            fill_widths.iter().copied().min().unwrap_or(0),
            fill_widths.iter().copied().max().unwrap_or(0),
        );
        prop_assert!(max - min <= 1);
    }

    #[test]
    fn nested_nodes_stay_inside_parent_content(
        root in tree_strategy(),
        width in 0i32..40,
        height in 0i32..20,
    ) {
        let layout = compute_layout(&root, width, height);
        prop_assert!(layout.rect.right() <= width.max(0) as u16);
        prop_assert!(layout.rect.bottom() <= height.max(0) as u16);
        check_containment(&root, &layout)?;
    }
}
