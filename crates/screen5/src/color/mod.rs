//! Color types and 9-bit level helpers
//!
//! Two pixel representations flow through the pipeline:
//!
//! - [`Pixel`]: an 8-bit RGBA sample as read from the source surface.
//! - [`Color`]: the RGB triple once alpha has been resolved. Equality is exact
//!   and the derived ordering is lexicographic on (R, G, B), which is the order
//!   palette indices are assigned in.
//!
//! The MSX2 palette stores 3 bits per channel. [`level`] maps an 8-bit channel
//! onto one of the eight representable levels (0, 32, .., 224), and
//! [`Color::nine_bit`] extracts the 3-bit values written to VRAM.

mod rgb;

pub use rgb::{expand, level, Color, ParseColorError, Pixel, LEVELS};
