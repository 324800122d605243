//! Core types for lattice-tui.
//!
//! These types define the foundation that everything builds on.
//! They flow from the scene graph through layout and into the framebuffer,
//! and define what the terminal writer receives.

use std::str::FromStr;

use thiserror::Error;

// =============================================================================
// Color
// =============================================================================

/// An RGB color with 8-bit channels, or the terminal's own default.
///
/// Colors are plain values: comparing two cells compares their colors
/// exactly, with no tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Terminal default color (let the terminal decide).
    #[default]
    Default,
    /// A 24-bit color.
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    /// Create an RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` integer.
    ///
    /// Bits above the low 24 are ignored.
    pub const fn from_rgb_int(value: u32) -> Self {
        Self::rgb(
            ((value >> 16) & 0xff) as u8,
            ((value >> 8) & 0xff) as u8,
            (value & 0xff) as u8,
        )
    }

    // Standard colors
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    pub const CYAN: Self = Self::rgb(0, 255, 255);
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    /// Check if this is the terminal default color.
    #[inline]
    pub const fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }

    /// The RGB channels, or `None` for the terminal default.
    #[inline]
    pub const fn channels(&self) -> Option<(u8, u8, u8)> {
        match *self {
            Self::Default => None,
            Self::Rgb { r, g, b } => Some((r, g, b)),
        }
    }

    /// Parse a hex color string.
    ///
    /// Accepts `#RRGGBB` and the `#RGB` shorthand, with or without the `#`.
    ///
    /// ```
    /// use lattice_tui::types::Color;
    ///
    /// assert_eq!(Color::from_hex("#ff0000").unwrap(), Color::rgb(255, 0, 0));
    /// assert_eq!(Color::from_hex("fff").unwrap(), Color::WHITE);
    /// assert!(Color::from_hex("#gg0000").is_err());
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.is_empty() {
            return Err(ColorParseError::Empty);
        }

        let mut digits = [0u8; 6];
        let mut count = 0;
        for c in hex.chars() {
            let value = c.to_digit(16).ok_or(ColorParseError::InvalidDigit(c))?;
            if count < digits.len() {
                digits[count] = value as u8;
            }
            count += 1;
        }

        match count {
            // #RGB -> expand each digit
            3 => Ok(Self::rgb(
                digits[0] << 4 | digits[0],
                digits[1] << 4 | digits[1],
                digits[2] << 4 | digits[2],
            )),
            6 => Ok(Self::rgb(
                digits[0] << 4 | digits[1],
                digits[2] << 4 | digits[3],
                digits[4] << 4 | digits[5],
            )),
            n => Err(ColorParseError::InvalidLength(n)),
        }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    /// Parse `default` (any case) or a hex color.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("default") {
            return Ok(Self::Default);
        }
        Self::from_hex(s)
    }
}

/// Error returned when a color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,
    #[error("hex color must have 3 or 6 digits, got {0}")]
    InvalidLength(usize),
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}

// =============================================================================
// Cell Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield for cheap storage and comparison.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::ITALIC`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
    }
}

// =============================================================================
// Cell - The atomic unit of terminal rendering
// =============================================================================

/// What a cell displays.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// A grapheme cluster, possibly several code points.
    Cluster(String),
    /// Placeholder following a wide cluster; the terminal draws nothing here.
    Continuation,
}

/// A single terminal cell.
///
/// This is what the terminal writer deals with. Nothing more complex.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    pub glyph: Glyph,
    pub fg: Color,
    pub bg: Color,
    pub attrs: Attr,
}

impl Cell {
    /// A cell showing `symbol` with default colors and no attributes.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            glyph: Glyph::Cluster(symbol.into()),
            ..Self::default()
        }
    }

    /// A blank cell with the given background.
    pub fn blank(bg: Color) -> Self {
        Self {
            bg,
            ..Self::default()
        }
    }

    /// A continuation cell trailing a wide glyph.
    pub fn continuation(fg: Color, bg: Color) -> Self {
        Self {
            glyph: Glyph::Continuation,
            fg,
            bg,
            attrs: Attr::NONE,
        }
    }

    pub fn with_fg(mut self, fg: Color) -> Self {
        self.fg = fg;
        self
    }

    pub fn with_bg(mut self, bg: Color) -> Self {
        self.bg = bg;
        self
    }

    pub fn with_attrs(mut self, attrs: Attr) -> Self {
        self.attrs = attrs;
        self
    }

    /// The displayed text: the cluster, or `""` for a continuation cell.
    #[inline]
    pub fn symbol(&self) -> &str {
        match &self.glyph {
            Glyph::Cluster(s) => s,
            Glyph::Continuation => "",
        }
    }

    #[inline]
    pub fn is_continuation(&self) -> bool {
        matches!(self.glyph, Glyph::Continuation)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            glyph: Glyph::Cluster(" ".to_string()),
            fg: Color::Default,
            bg: Color::Default,
            attrs: Attr::NONE,
        }
    }
}

impl From<char> for Cell {
    fn from(c: char) -> Self {
        Self::new(c)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

// =============================================================================
// Rect - Positioned boxes
// =============================================================================

/// An axis-aligned rectangle in buffer cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Zero-sized rect at a position.
    pub const fn empty_at(x: u16, y: u16) -> Self {
        Self::new(x, y, 0, 0)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// One past the rightmost column.
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// One past the bottom row.
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Check if a point is inside this rect.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Check if `other` lies entirely inside this rect.
    ///
    /// An empty `other` is contained when its origin is within the closed
    /// bounds of this rect.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Shrink by `edges`, never below zero size.
    pub fn inset(&self, edges: &Edges) -> Rect {
        let width = self.width.saturating_sub(edges.horizontal());
        let height = self.height.saturating_sub(edges.vertical());
        let x = self.x.saturating_add(edges.left.min(self.width));
        let y = self.y.saturating_add(edges.top.min(self.height));
        Rect::new(x, y, width, height)
    }
}

// =============================================================================
// Size & Edges
// =============================================================================

/// How a box is sized along one axis.
///
/// Only the layout engine turns a `Size` into a cell count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Size {
    /// Absolute size in terminal cells.
    Px(u16),
    /// Percentage (0-100) of the parent's content box on this axis.
    Pct(u8),
    /// Equal share of the remaining main-axis space.
    Fill,
    /// Size to content.
    #[default]
    Auto,
}

impl From<u16> for Size {
    fn from(value: u16) -> Self {
        Self::Px(value)
    }
}

/// Per-side spacing (padding or margin) in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Edges {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Edges {
    pub const ZERO: Self = Self::all(0);

    pub const fn new(top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Same value on all four sides.
    pub const fn all(value: u16) -> Self {
        Self::new(value, value, value, value)
    }

    /// `vertical` on top and bottom, `horizontal` on left and right.
    pub const fn symmetric(vertical: u16, horizontal: u16) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Left + right.
    #[inline]
    pub const fn horizontal(&self) -> u16 {
        self.left.saturating_add(self.right)
    }

    /// Top + bottom.
    #[inline]
    pub const fn vertical(&self) -> u16 {
        self.top.saturating_add(self.bottom)
    }

    /// Side-wise saturating sum.
    pub const fn plus(&self, other: &Edges) -> Edges {
        Edges::new(
            self.top.saturating_add(other.top),
            self.right.saturating_add(other.right),
            self.bottom.saturating_add(other.bottom),
            self.left.saturating_add(other.left),
        )
    }
}

// =============================================================================
// Border Styles
// =============================================================================

/// Border styles a box can be drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderStyle {
    #[default]
    None,
    /// ─ │ ┌ ┐ └ ┘
    Single,
    /// ═ ║ ╔ ╗ ╚ ╝
    Double,
    /// ─ │ ╭ ╮ ╰ ╯
    Rounded,
    /// ━ ┃ ┏ ┓ ┗ ┛
    Bold,
    /// ┄ ┆ ┌ ┐ └ ┘
    Dashed,
}

/// The eight glyphs making up a border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BorderChars {
    pub top: &'static str,
    pub bottom: &'static str,
    pub left: &'static str,
    pub right: &'static str,
    pub top_left: &'static str,
    pub top_right: &'static str,
    pub bottom_left: &'static str,
    pub bottom_right: &'static str,
}

impl BorderChars {
    const fn uniform(
        horizontal: &'static str,
        vertical: &'static str,
        top_left: &'static str,
        top_right: &'static str,
        bottom_left: &'static str,
        bottom_right: &'static str,
    ) -> Self {
        Self {
            top: horizontal,
            bottom: horizontal,
            left: vertical,
            right: vertical,
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        }
    }
}

impl BorderStyle {
    /// Get the border characters for this style.
    ///
    /// `None` maps to blanks so callers can index it without branching.
    pub const fn chars(&self) -> BorderChars {
        match self {
            Self::None => BorderChars::uniform(" ", " ", " ", " ", " ", " "),
            Self::Single => BorderChars::uniform("─", "│", "┌", "┐", "└", "┘"),
            Self::Double => BorderChars::uniform("═", "║", "╔", "╗", "╚", "╝"),
            Self::Rounded => BorderChars::uniform("─", "│", "╭", "╮", "╰", "╯"),
            Self::Bold => BorderChars::uniform("━", "┃", "┏", "┓", "┗", "┛"),
            Self::Dashed => BorderChars::uniform("┄", "┆", "┌", "┐", "└", "┘"),
        }
    }

    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

// =============================================================================
// Flex Enums - For layout
// =============================================================================

/// Main axis of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FlexDirection {
    #[default]
    Column,
    Row,
}

impl FlexDirection {
    /// Check if this is a row direction.
    pub const fn is_row(&self) -> bool {
        matches!(self, Self::Row)
    }
}

/// Main-axis distribution of children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Justify {
    #[default]
    Start,
    End,
    Center,
    SpaceBetween,
    SpaceAround,
}

/// Cross-axis placement of children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Align {
    #[default]
    Start,
    End,
    Center,
    Stretch,
}

/// Horizontal alignment of a line of text inside its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_rgb_int() {
        assert_eq!(Color::from_rgb_int(0xff0000), Color::RED);
        assert_eq!(Color::from_rgb_int(0x282a36), Color::rgb(40, 42, 54));
        assert_eq!(Color::from_rgb_int(0x1_000000), Color::BLACK);
    }

    #[test]
    fn test_color_from_hex() {
        assert_eq!(Color::from_hex("#00ff00"), Ok(Color::GREEN));
        assert_eq!(Color::from_hex("  #abc  "), Ok(Color::rgb(0xaa, 0xbb, 0xcc)));
        assert_eq!(Color::from_hex("AaBbCc"), Ok(Color::rgb(0xaa, 0xbb, 0xcc)));
    }

    #[test]
    fn test_color_from_hex_invalid() {
        assert_eq!(Color::from_hex(""), Err(ColorParseError::Empty));
        assert_eq!(Color::from_hex("#"), Err(ColorParseError::Empty));
        assert_eq!(Color::from_hex("#ffff"), Err(ColorParseError::InvalidLength(4)));
        assert_eq!(
            Color::from_hex("#fffffffff"),
            Err(ColorParseError::InvalidLength(9))
        );
        assert_eq!(Color::from_hex("#xyz"), Err(ColorParseError::InvalidDigit('x')));
    }

    #[test]
    fn test_color_from_str() {
        assert_eq!("default".parse::<Color>(), Ok(Color::Default));
        assert_eq!("DEFAULT".parse::<Color>(), Ok(Color::Default));
        assert_eq!("#0000ff".parse::<Color>(), Ok(Color::BLUE));
        assert!("blue".parse::<Color>().is_err());
    }

    #[test]
    fn test_color_channels() {
        assert_eq!(Color::Default.channels(), None);
        assert!(Color::Default.is_default());
        assert_eq!(Color::CYAN.channels(), Some((0, 255, 255)));
    }

    #[test]
    fn test_cell_default_is_space() {
        let cell = Cell::default();
        assert_eq!(cell.symbol(), " ");
        assert_eq!(cell.fg, Color::Default);
        assert_eq!(cell.bg, Color::Default);
        assert_eq!(cell.attrs, Attr::NONE);
        assert!(!cell.is_continuation());
    }

    #[test]
    fn test_continuation_differs_from_erased_cell() {
        let cont = Cell::continuation(Color::RED, Color::BLUE);
        assert_eq!(cont.symbol(), "");
        assert!(cont.is_continuation());
        assert_ne!(cont, Cell::new("").with_fg(Color::RED).with_bg(Color::BLUE));
    }

    #[test]
    fn test_rect_inset() {
        let rect = Rect::new(2, 3, 10, 6);
        assert_eq!(rect.inset(&Edges::all(1)), Rect::new(3, 4, 8, 4));
        assert_eq!(rect.inset(&Edges::all(10)), Rect::new(12, 9, 0, 0));
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10, 10, 20, 20);
        assert!(rect.contains(10, 10));
        assert!(rect.contains(29, 29));
        assert!(!rect.contains(9, 10));
        assert!(!rect.contains(30, 10));
        assert!(rect.contains_rect(&Rect::new(12, 12, 18, 18)));
        assert!(!rect.contains_rect(&Rect::new(12, 12, 19, 18)));
    }

    #[test]
    fn test_border_chars() {
        let single = BorderStyle::Single.chars();
        assert_eq!(single.top_left, "┌");
        assert_eq!(single.bottom_right, "┘");
        assert_eq!(BorderStyle::Rounded.chars().top_left, "╭");
        assert_eq!(BorderStyle::Double.chars().left, "║");
        assert!(BorderStyle::None.is_none());
    }
}
