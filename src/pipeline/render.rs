//! The frame committer.
//!
//! Owns the long-lived FrameBuffer for one surface and drives
//! layout → paint → diff once per frame.

use crate::layout::{compute_layout, LayoutNode};
use crate::primitives::Renderable;
use crate::renderer::{CellUpdate, FrameBuffer};
use crate::types::Cell;

use super::config::RenderOptions;
use super::paint::paint;

/// Renders scene graphs into a FrameBuffer and hands out what changed.
///
/// Each [`render`](Self::render) paints into a fresh scratch frame and
/// copies only the differing cells into the long-lived buffer, so the dirty
/// set is the true difference from what the terminal last received.
#[derive(Debug, Clone)]
pub struct Renderer {
    buffer: FrameBuffer,
    options: RenderOptions,
}

impl Renderer {
    /// Create a renderer for a `width` x `height` surface.
    ///
    /// The whole buffer starts dirty: the terminal's contents are unknown,
    /// so the first flush repaints everything.
    pub fn new(width: i32, height: i32, options: RenderOptions) -> Self {
        let mut buffer = FrameBuffer::new(width, height);
        buffer.clear();
        Self { buffer, options }
    }

    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: RenderOptions) {
        self.options = options;
    }

    /// Change the surface geometry. Everything becomes dirty.
    pub fn resize(&mut self, width: i32, height: i32) {
        self.buffer.resize(width, height);
    }

    /// Force the next flush to repaint the whole surface.
    pub fn invalidate(&mut self) {
        self.buffer.clear();
    }

    /// Lay out and paint one frame.
    ///
    /// Returns the computed layout so callers can hit-test against it.
    pub fn render(&mut self, root: &Renderable) -> LayoutNode {
        let width = i32::from(self.buffer.width());
        let height = i32::from(self.buffer.height());

        let layout = compute_layout(root, width, height);

        let mut frame = FrameBuffer::new(width, height);
        if !self.options.clear_color.is_default() {
            frame.fill_rect(0, 0, width, height, &Cell::blank(self.options.clear_color));
        }
        paint(&mut frame, root, &layout, &self.options);

        self.buffer.apply_frame(&frame);
        tracing::debug!(
            width,
            height,
            nodes = layout.node_count(),
            dirty = self.buffer.dirty_count(),
            "frame rendered"
        );

        layout
    }

    /// Hand the changed cells to `writer`.
    ///
    /// The dirty set is cleared only when the writer succeeds; on error it
    /// is kept intact so the same cells go out with the next flush. Returns
    /// the number of cells written.
    pub fn flush<E>(&mut self, writer: impl FnOnce(&[CellUpdate]) -> Result<(), E>) -> Result<usize, E> {
        let updates = self.buffer.get_dirty_cells();
        if updates.is_empty() {
            return Ok(0);
        }

        match writer(&updates) {
            Ok(()) => {
                self.buffer.clear_dirty();
                tracing::debug!(cells = updates.len(), "flush complete");
                Ok(updates.len())
            }
            Err(err) => {
                tracing::debug!(cells = updates.len(), "flush failed, keeping dirty cells");
                Err(err)
            }
        }
    }
}
