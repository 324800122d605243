//! Text measurement for terminal rendering.
//!
//! Provides Unicode-aware text measurement, word wrapping, grapheme-safe
//! truncation, and padding to an exact cell width.
//!
//! # Capabilities
//!
//! - **Width calculation**: Correct terminal cell width for any Unicode text
//! - **Grapheme awareness**: Never breaks in the middle of a grapheme cluster
//! - **Emoji sequences**: ZWJ families, skin tones, flags measured as width 2
//! - **Wrapping**: Greedy word packing with grapheme-break fallback
//! - **Fitting**: Truncate or pad a line to exactly fill a box
//!
//! None of these functions fail: zero widths and empty strings degrade to
//! empty results.
//!
//! # Implementation
//!
//! Uses `unicode-width` (East Asian Width tables) and `unicode-segmentation`
//! (UAX #29 grapheme cluster boundaries) as the foundation, with custom
//! handling for emoji sequences.

mod pad;
mod truncate;
mod width;
mod wrap;

pub use pad::{fit, pad_center, pad_left, pad_right};
pub use truncate::{clip, truncate};
pub use width::{char_width, display_width, grapheme_width};
pub use wrap::{wrap, wrap_paragraphs};
