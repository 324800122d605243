//! The scene graph: an owned tree of boxes and text.

use crate::types::FlexDirection;

use super::types::{BoxStyle, TextStyle};

/// A node of the scene graph.
///
/// The tree is rebuilt from scratch every frame, so nodes carry no identity
/// and are never mutated after construction. A box owns its children.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Renderable {
    /// A flex container.
    Box {
        children: Vec<Renderable>,
        style: BoxStyle,
    },
    /// A block of text that word-wraps to its box.
    Text { content: String, style: TextStyle },
    /// A single line of text; truncated instead of wrapped.
    Span { content: String, style: TextStyle },
}

impl Renderable {
    /// A box with the given style and children.
    pub fn boxed(style: BoxStyle, children: impl IntoIterator<Item = Renderable>) -> Self {
        Self::Box {
            children: children.into_iter().collect(),
            style,
        }
    }

    /// A default-styled box laying children out left to right.
    pub fn row(children: impl IntoIterator<Item = Renderable>) -> Self {
        Self::boxed(BoxStyle::default().direction(FlexDirection::Row), children)
    }

    /// A default-styled box laying children out top to bottom.
    pub fn column(children: impl IntoIterator<Item = Renderable>) -> Self {
        Self::boxed(BoxStyle::default().direction(FlexDirection::Column), children)
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::styled_text(content, TextStyle::default())
    }

    pub fn styled_text(content: impl Into<String>, style: TextStyle) -> Self {
        Self::Text {
            content: content.into(),
            style,
        }
    }

    pub fn span(content: impl Into<String>) -> Self {
        Self::styled_span(content, TextStyle::default())
    }

    pub fn styled_span(content: impl Into<String>, style: TextStyle) -> Self {
        Self::Span {
            content: content.into(),
            style,
        }
    }

    /// Children of a box; empty for text nodes.
    pub fn children(&self) -> &[Renderable] {
        match self {
            Self::Box { children, .. } => children,
            Self::Text { .. } | Self::Span { .. } => &[],
        }
    }

    /// Box style, if this is a box.
    pub fn box_style(&self) -> Option<&BoxStyle> {
        match self {
            Self::Box { style, .. } => Some(style),
            Self::Text { .. } | Self::Span { .. } => None,
        }
    }

    /// Number of nodes in this subtree, including itself.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Renderable::node_count).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Size;

    #[test]
    fn test_constructors() {
        let tree = Renderable::row([
            Renderable::text("a"),
            Renderable::column([Renderable::span("b"), Renderable::span("c")]),
        ]);

        assert_eq!(tree.children().len(), 2);
        assert_eq!(tree.node_count(), 5);
        assert_eq!(
            tree.box_style().map(|s| s.flex_direction),
            Some(FlexDirection::Row)
        );
        assert!(tree.children()[0].children().is_empty());
    }

    #[test]
    fn test_boxed_keeps_style() {
        let node = Renderable::boxed(BoxStyle::default().width(Size::Px(4)), []);
        assert_eq!(node.box_style().map(|s| s.width), Some(Size::Px(4)));
        assert_eq!(node.node_count(), 1);
    }
}
