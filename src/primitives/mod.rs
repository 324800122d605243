//! Scene graph primitives.
//!
//! The application describes each frame as a [`Renderable`] tree of boxes,
//! text blocks and spans. The tree is pure data: the layout engine sizes
//! it and the pipeline paints it.

mod renderable;
mod types;

pub use renderable::Renderable;
pub use types::{BoxStyle, TextStyle};
