//! FrameBuffer and drawing primitives.
//!
//! The FrameBuffer is a 2D grid of Cells that represents what should be
//! displayed on the terminal, plus the set of cells written since the last
//! flush. All drawing operations work on this buffer.
//!
//! # Design Decisions
//!
//! - **Flat storage**: `Vec<Cell>` with row-major indexing (`y * width + x`).
//! - **Dirty tracking**: every in-bounds write marks its index; the set is
//!   only drained after the terminal writer reports a successful flush.
//! - **Clipping**: writes outside the buffer are silently dropped, per cell.
//! - **Wide characters**: CJK and emoji clusters are followed by explicit
//!   continuation cells. `draw_text` never leaves half a wide glyph behind:
//!   the rest of a glyph it partly overwrites is blanked. `set_cell` is a
//!   raw write and does no such repair.

use std::collections::BTreeSet;

use unicode_segmentation::UnicodeSegmentation;

use crate::layout::text_measure::grapheme_width;
use crate::types::{Attr, Cell, Color, Glyph};

/// A changed cell, as handed to the terminal writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellUpdate {
    pub x: u16,
    pub y: u16,
    pub cell: Cell,
}

// =============================================================================
// FrameBuffer
// =============================================================================

/// A 2D buffer of terminal cells with dirty-cell tracking.
///
/// Coordinates are signed so callers can position content partly off-screen;
/// anything outside `[0, width) x [0, height)` is clipped.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    dirty: BTreeSet<usize>,
}

/// Clamp a requested dimension into `0..=u16::MAX`.
fn clamp_dimension(value: i32) -> u16 {
    value.clamp(0, u16::MAX as i32) as u16
}

impl FrameBuffer {
    /// Create a new buffer filled with default cells.
    ///
    /// Negative dimensions are clamped to zero. The dirty set starts empty;
    /// call [`clear`](Self::clear) to force an initial full paint.
    pub fn new(width: i32, height: i32) -> Self {
        let width = clamp_dimension(width);
        let height = clamp_dimension(height);
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
            dirty: BTreeSet::new(),
        }
    }

    /// Get buffer width.
    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Get buffer height.
    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Convert (x, y) to a flat index, or `None` when not visible.
    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Check if coordinates are in bounds.
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    /// Get a cell reference (returns None if out of bounds).
    #[inline]
    pub fn get_cell(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index(x, y).map(|idx| &self.cells[idx])
    }

    /// Write a cell. Out-of-bounds writes are a silent no-op.
    ///
    /// The index is marked dirty even when the value is unchanged. Wide
    /// glyphs around the cell are not repaired; use
    /// [`draw_text`](Self::draw_text) for that.
    pub fn set_cell(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = cell;
            self.dirty.insert(idx);
        }
    }

    /// Get raw cells slice, row-major.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over cells with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (u16, u16, &Cell)> {
        let width = self.width.max(1) as usize;
        self.cells.iter().enumerate().map(move |(i, cell)| {
            let x = (i % width) as u16;
            let y = (i / width) as u16;
            (x, y, cell)
        })
    }

    /// Reset every cell to default and mark the whole buffer dirty.
    pub fn clear(&mut self) {
        tracing::debug!(width = self.width, height = self.height, "framebuffer cleared");
        self.cells.fill(Cell::default());
        self.mark_all_dirty();
    }

    /// Change the buffer geometry.
    ///
    /// The overlapping rectangle is copied cell by cell, newly exposed area
    /// gets default cells, and the entire new buffer is marked dirty.
    pub fn resize(&mut self, width: i32, height: i32) {
        let new_width = clamp_dimension(width);
        let new_height = clamp_dimension(height);
        tracing::debug!(
            old_width = self.width,
            old_height = self.height,
            new_width,
            new_height,
            "framebuffer resized"
        );

        let mut cells = vec![Cell::default(); new_width as usize * new_height as usize];
        let copy_width = self.width.min(new_width) as usize;
        let copy_height = self.height.min(new_height) as usize;

        for y in 0..copy_height {
            let old_row = y * self.width as usize;
            let new_row = y * new_width as usize;
            for x in 0..copy_width {
                cells[new_row + x] = std::mem::take(&mut self.cells[old_row + x]);
            }
        }

        self.width = new_width;
        self.height = new_height;
        self.cells = cells;
        self.mark_all_dirty();
    }

    fn mark_all_dirty(&mut self) {
        self.dirty = (0..self.cells.len()).collect();
    }

    // =========================================================================
    // Drawing Primitives
    // =========================================================================

    /// Fill a rectangle with copies of `cell`, clamped to the buffer first.
    pub fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, cell: &Cell) {
        let x1 = x.max(0);
        let y1 = y.max(0);
        let x2 = x.saturating_add(width.max(0)).min(self.width as i32);
        let y2 = y.saturating_add(height.max(0)).min(self.height as i32);

        if x2 <= x1 || y2 <= y1 {
            return;
        }

        for row in y1..y2 {
            for col in x1..x2 {
                self.set_cell(col, row, cell.clone());
            }
        }
    }

    /// Draw text starting at (x, y), one grapheme cluster at a time.
    ///
    /// A wide cluster occupies its starting cell plus `width - 1`
    /// continuation cells carrying the same colors and no attributes.
    /// Zero-width clusters occupy no cell. Cells off any edge are skipped,
    /// but the cursor always advances by the full cluster width so text
    /// that starts off-screen still lands in the right columns.
    ///
    /// `bg = None` keeps the background already in each cell.
    ///
    /// A wide glyph already in the buffer that a cluster partly covers is
    /// blanked on its own background, so no primary cell is left without its
    /// continuation and no continuation without its primary.
    ///
    /// Returns the number of columns the cursor advanced.
    pub fn draw_text(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        fg: Color,
        bg: Option<Color>,
        attrs: Attr,
    ) -> usize {
        let mut col = x;
        let mut advanced = 0usize;

        for grapheme in text.graphemes(true) {
            let gw = grapheme_width(grapheme);
            if gw == 0 {
                continue;
            }

            self.break_wide_glyphs(col, y, gw as i32);
            let cell_bg = self.background_at(col, y, bg);
            self.set_cell(
                col,
                y,
                Cell {
                    glyph: Glyph::Cluster(grapheme.to_string()),
                    fg,
                    bg: cell_bg,
                    attrs,
                },
            );

            for offset in 1..gw as i32 {
                let cont_x = col.saturating_add(offset);
                self.set_cell(cont_x, y, Cell::continuation(fg, cell_bg));
            }

            col = col.saturating_add(gw as i32);
            advanced += gw;
        }

        advanced
    }

    /// Blank what would be left of wide glyphs once `x..x + width` on row `y`
    /// is overwritten.
    fn break_wide_glyphs(&mut self, x: i32, y: i32, width: i32) {
        // Covering a continuation cuts the glyph's head off to the left.
        if self.get_cell(x, y).is_some_and(Cell::is_continuation) {
            let mut col = x;
            while col > 0 {
                col -= 1;
                let Some(cell) = self.get_cell(col, y) else { break };
                let primary = !cell.is_continuation();
                let bg = cell.bg;
                self.set_cell(col, y, Cell::blank(bg));
                if primary {
                    break;
                }
            }
        }

        // Continuations right after the write have lost their primary.
        let mut col = x.saturating_add(width);
        while let Some(bg) = self
            .get_cell(col, y)
            .filter(|cell| cell.is_continuation())
            .map(|cell| cell.bg)
        {
            self.set_cell(col, y, Cell::blank(bg));
            if col == i32::MAX {
                break;
            }
            col += 1;
        }
    }

    /// Resolve the background for a write: explicit, or whatever is there.
    fn background_at(&self, x: i32, y: i32, bg: Option<Color>) -> Color {
        match bg {
            Some(color) => color,
            None => self.get_cell(x, y).map_or(Color::Default, |cell| cell.bg),
        }
    }

    // =========================================================================
    // Dirty Tracking
    // =========================================================================

    /// Changed cells since the last [`clear_dirty`](Self::clear_dirty),
    /// in row-major order.
    pub fn get_dirty_cells(&self) -> Vec<CellUpdate> {
        let width = self.width.max(1) as usize;
        self.dirty
            .iter()
            .filter_map(|&idx| {
                self.cells.get(idx).map(|cell| CellUpdate {
                    x: (idx % width) as u16,
                    y: (idx / width) as u16,
                    cell: cell.clone(),
                })
            })
            .collect()
    }

    /// Empty the dirty set.
    ///
    /// Only call this after the terminal writer flushed successfully; an
    /// interrupted flush must retry the same cells next frame.
    pub fn clear_dirty(&mut self) {
        self.dirty.clear();
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    #[inline]
    pub fn dirty_count(&self) -> usize {
        self.dirty.len()
    }

    /// Copy `next` into this buffer, writing only the cells that differ.
    ///
    /// After this call the dirty set holds exactly the cells that changed
    /// (plus anything already dirty). A geometry mismatch resizes first,
    /// which marks everything dirty.
    pub fn apply_frame(&mut self, next: &FrameBuffer) {
        if self.width != next.width || self.height != next.height {
            self.resize(next.width as i32, next.height as i32);
        }

        for (idx, cell) in next.cells.iter().enumerate() {
            if self.cells[idx] != *cell {
                self.cells[idx] = cell.clone();
                self.dirty.insert(idx);
            }
        }
    }

    /// The buffer as plain text, one string per row.
    ///
    /// Continuation cells contribute nothing, so wide glyphs read naturally.
    pub fn text_lines(&self) -> Vec<String> {
        let width = self.width as usize;
        if width == 0 {
            return vec![String::new(); self.height as usize];
        }
        self.cells
            .chunks(width)
            .map(|row| row.iter().map(Cell::symbol).collect())
            .collect()
    }
}

// =============================================================================
// Tests
// =============================================================================
