//! Rendering Pipeline
//!
//! Connects the scene graph to the framebuffer.
//!
//! # Pipeline Architecture
//!
//! ```text
//! Renderable tree → compute_layout → paint (scratch frame) → apply_frame → flush
//! ```
//!
//! ## Data Flow
//!
//! 1. **Layout** - `compute_layout` sizes and positions every node
//! 2. **Paint** - `paint` writes backgrounds, borders and text into a fresh frame
//! 3. **Diff** - the frame is copied into the long-lived buffer cell by cell;
//!    only cells that differ become dirty
//! 4. **Flush** - the dirty cells go to a caller-supplied writer
//!
//! ## Key Design Principles
//!
//! - **No terminal knowledge**: the pipeline ends at `CellUpdate`s; escape
//!   sequences are the writer's business
//! - **Retry on failure**: the dirty set survives a failed flush

pub mod config;
mod paint;
mod render;

pub use config::RenderOptions;
pub use paint::paint;
pub use render::Renderer;
