//! Layout Module
//!
//! Flexbox-style layout computation for terminal UI, plus the text
//! measurement primitives it and the framebuffer share.
//!
//! # Architecture
//!
//! `compute_layout` consumes a [`Renderable`](crate::primitives::Renderable)
//! tree and an available area and produces a parallel [`LayoutNode`] tree:
//!
//! 1. Measures every node's natural size bottom-up
//! 2. Resolves `Px`/`Pct`/`Fill`/`Auto` sizes top-down against each
//!    parent's content box (padding and border removed)
//! 3. Positions children per `justify` and `align`, clipped to the parent
//!
//! # Example
//!
//! ```
//! use lattice_tui::layout::compute_layout;
//! use lattice_tui::primitives::Renderable;
//!
//! let root = Renderable::row([Renderable::span("left"), Renderable::span("right")]);
//! let layout = compute_layout(&root, 20, 1);
//! assert_eq!(layout.children[1].rect.x, 4);
//! ```

pub mod text_measure;

mod flex;
mod types;

pub use flex::{compute_layout, measure, Measured};
pub use types::LayoutNode;
