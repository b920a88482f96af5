//! screen5: MSX2 GRAPHICS 4 (SCREEN 5) image conversion
//!
//! Turns an RGBA raster into a 4-bit indexed bitmap with a 16-entry palette
//! drawn from the MSX2's 512 colors (3 bits per channel), and encodes it in
//! the containers MSX software loads directly.
//!
//! # Quick Start
//!
//! ```
//! use screen5::{Color, ConvertOptions, Converter, Encoding, NoProgress, RgbaImage};
//!
//! let image = RgbaImage::filled(256, 212, Color::new(0, 128, 255));
//! let converter = Converter::new(ConvertOptions::new().encoding(Encoding::Sr5));
//!
//! let result = converter.convert(&image, &mut NoProgress).unwrap();
//! for artifact in result.artifacts() {
//!     println!("{} ({} bytes)", artifact.file_name("NONAME"), artifact.bytes.len());
//! }
//! ```
//!
//! # Pipeline
//!
//! ```text
//! ImageSurface (RGBA, alpha 0 or 255)
//!     |
//!     v
//! resolve_transparency   alpha 0 -> transparent color, reports whether used
//!     |
//!     v
//! downsample             8-bit -> 3-bit levels, optional error scattering
//!     |
//!     v
//! build_histogram        color counts, transparent color excluded
//!     |
//!     v
//! quantize               greedy merge of rarest colors, lexicographic indices
//!     |
//!     v
//! NearestColorIndex      memoized color -> index mapping
//!     |
//!     v
//! encode                 nibble packing, palette block, SC5/SR5/RAW/DAT
//! ```
//!
//! Every stage finishes before the next starts and all of them run on the
//! caller's thread. [`Converter`] drives the whole sequence; the stage
//! functions are public for callers that need only part of it.
//!
//! # Palette indices
//!
//! Colors are indexed in ascending (R, G, B) order after quantization.
//! When the image actually contains the transparent color, index 0 is
//! reserved for it and the palette holds at most 15 colors; otherwise all
//! 16 slots go to image colors.

pub mod api;
pub mod color;
pub mod downsample;
pub mod encode;
pub mod histogram;
pub mod output;
pub mod palette;
pub mod progress;
pub mod surface;
pub mod transparency;


pub use api::{ConvertError, ConvertOptions, Converter};
pub use color::{Color, ParseColorError, Pixel};
pub use downsample::downsample;
pub use encode::{Encoding, ParseEncodingError};
pub use histogram::{build_histogram, Histogram};
pub use output::{Artifact, ConvertedImage};
pub use palette::{quantize, NearestColorIndex, Palette, Quantization, MAX_COLORS};
pub use progress::{NoProgress, Progress};
pub use surface::{ImageKind, ImageSurface, RgbaImage};
pub use transparency::{resolve_transparency, TransparentColor};
