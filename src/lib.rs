//! # lattice-tui
//!
//! A terminal UI rendering engine.
//!
//! An application describes each frame as a tree of boxes and text. The
//! engine lays the tree out with a flexbox-style algorithm, paints it into
//! a grid of terminal cells, and reports exactly which cells changed since
//! the last flush. It never writes to a terminal itself.
//!
//! ## Architecture
//!
//! ```text
//! Renderable tree → layout (measure, arrange) → paint → FrameBuffer diff → CellUpdates
//! ```
//!
//! Nothing in the engine fails on odd input: negative sizes clamp to zero,
//! out-of-bounds writes are dropped and empty strings measure as zero.
//!
//! ## Example
//!
//! ```
//! use lattice_tui::{BoxStyle, BorderStyle, RenderOptions, Renderable, Renderer};
//!
//! let ui = Renderable::boxed(
//!     BoxStyle::default().border(BorderStyle::Rounded),
//!     [Renderable::text("hello")],
//! );
//!
//! let mut renderer = Renderer::new(9, 3, RenderOptions::default());
//! renderer.render(&ui);
//! assert_eq!(renderer.buffer().text_lines()[1], "│hello  │");
//!
//! let written = renderer.flush(|_cells| {
//!     // A terminal writer would emit escape sequences here.
//!     Ok::<_, std::io::Error>(())
//! });
//! assert_eq!(written.ok(), Some(27));
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Colors, cells, rects, sizing and alignment enums
//! - [`primitives`] - The scene graph (`Renderable`, `BoxStyle`, `TextStyle`)
//! - [`layout`] - Flex layout and Unicode text measurement
//! - [`renderer`] - FrameBuffer with dirty tracking, border drawing
//! - [`pipeline`] - Paint and the frame committer

pub mod layout;
pub mod pipeline;
pub mod primitives;
pub mod renderer;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use layout::{compute_layout, LayoutNode};
pub use pipeline::{paint, RenderOptions, Renderer};
pub use primitives::{BoxStyle, Renderable, TextStyle};
pub use renderer::{border_inset, draw_border, CellUpdate, FrameBuffer};
