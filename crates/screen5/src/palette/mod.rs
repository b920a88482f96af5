//! Palette construction and color matching
//!
//! - [`quantize`] reduces a [`Histogram`](crate::Histogram) to at most N
//!   colors by repeatedly folding the rarest color into its nearest neighbor.
//! - [`Palette`] holds the survivors in lexicographic order; the position is
//!   the palette index.
//! - [`NearestColorIndex`] maps arbitrary colors to palette entries and
//!   memoizes the answers for the duration of one conversion.

mod lookup;
mod palette;
mod quantize;

pub use lookup::NearestColorIndex;
pub use palette::{Palette, MAX_COLORS};
pub use quantize::{quantize, Quantization};
