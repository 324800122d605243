//! Render configuration.

use crate::types::Color;

/// Caller-supplied knobs for painting a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Appended to text cut short by its box.
    pub ellipsis: String,
    /// Fills the cells between a text line and the edge of its box.
    pub pad_char: char,
    /// Background of every frame before anything is painted.
    pub clear_color: Color,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            ellipsis: "…".to_string(),
            pad_char: ' ',
            clear_color: Color::Default,
        }
    }
}

impl RenderOptions {
    pub fn with_ellipsis(mut self, ellipsis: impl Into<String>) -> Self {
        self.ellipsis = ellipsis.into();
        self
    }

    pub fn with_pad_char(mut self, pad_char: char) -> Self {
        self.pad_char = pad_char;
        self
    }

    pub fn with_clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }
}
