//! Style records carried by scene graph nodes.
//!
//! Styles are plain values with chained setters:
//!
//! ```
//! use lattice_tui::primitives::BoxStyle;
//! use lattice_tui::types::{BorderStyle, Edges, FlexDirection, Size};
//!
//! let card = BoxStyle::default()
//!     .direction(FlexDirection::Row)
//!     .width(Size::Fill)
//!     .padding(Edges::symmetric(0, 1))
//!     .border(BorderStyle::Rounded);
//! assert_eq!(card.width, Size::Fill);
//! ```

use crate::types::{Align, Attr, BorderStyle, Color, Edges, FlexDirection, Justify, Size, TextAlign};

// =============================================================================
// BoxStyle
// =============================================================================

/// Layout and paint properties of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BoxStyle {
    pub width: Size,
    pub height: Size,
    pub padding: Edges,
    pub margin: Edges,
    pub flex_direction: FlexDirection,
    pub justify: Justify,
    pub align: Align,
    /// Cells between adjacent children on the main axis.
    pub gap: u16,
    pub fg: Option<Color>,
    /// Fills the whole box when set.
    pub bg: Option<Color>,
    pub border: BorderStyle,
    /// Border glyph color; falls back to `fg`.
    pub border_fg: Option<Color>,
}

impl BoxStyle {
    pub fn width(mut self, width: Size) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: Size) -> Self {
        self.height = height;
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    pub fn margin(mut self, margin: Edges) -> Self {
        self.margin = margin;
        self
    }

    pub fn direction(mut self, direction: FlexDirection) -> Self {
        self.flex_direction = direction;
        self
    }

    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    pub fn fg(mut self, fg: Color) -> Self {
        self.fg = Some(fg);
        self
    }

    pub fn bg(mut self, bg: Color) -> Self {
        self.bg = Some(bg);
        self
    }

    pub fn border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    pub fn border_fg(mut self, color: Color) -> Self {
        self.border_fg = Some(color);
        self
    }
}

// =============================================================================
// TextStyle
// =============================================================================

/// Paint properties of a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextStyle {
    pub fg: Option<Color>,
    /// `None` leaves the background underneath visible.
    pub bg: Option<Color>,
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
    pub align: TextAlign,
}

impl TextStyle {
    pub fn fg(mut self, fg: Color) -> Self {
        self.fg = Some(fg);
        self
    }

    pub fn bg(mut self, bg: Color) -> Self {
        self.bg = Some(bg);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// The attribute flags this style turns on.
    pub fn attrs(&self) -> Attr {
        let mut attrs = Attr::NONE;
        attrs.set(Attr::BOLD, self.bold);
        attrs.set(Attr::DIM, self.dim);
        attrs.set(Attr::ITALIC, self.italic);
        attrs.set(Attr::UNDERLINE, self.underline);
        attrs
    }
}
