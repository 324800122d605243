//! Layout Types
//!
//! Output types for the layout computation.

use crate::types::Rect;

/// Computed layout of one scene graph node.
///
/// The tree mirrors the `Renderable` it was computed from: `children[i]` is
/// the layout of the node's i-th child. Rects are absolute buffer
/// coordinates and always lie inside the parent's content box.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutNode {
    /// Border box of the node.
    pub rect: Rect,

    /// Visible text lines for `Text` and `Span` nodes, at most `rect.height`
    /// of them. Lines are not yet padded or truncated to `rect.width`.
    /// Always empty for boxes.
    pub lines: Vec<String>,

    pub children: Vec<LayoutNode>,
}

impl LayoutNode {
    /// Create a childless node.
    pub fn leaf(rect: Rect, lines: Vec<String>) -> Self {
        Self {
            rect,
            lines,
            children: Vec::new(),
        }
    }

    /// Number of nodes in this subtree, including itself.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(LayoutNode::node_count).sum::<usize>()
    }

    /// Pre-order walk over this subtree.
    pub fn iter(&self) -> impl Iterator<Item = &LayoutNode> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }

    /// Follow a path of child indices from this node.
    pub fn get(&self, path: &[usize]) -> Option<&LayoutNode> {
        path.iter()
            .try_fold(self, |node, &index| node.children.get(index))
    }
}
