//! Unified error type for the conversion pipeline.
//!
//! Every variant renders as a sentence suitable for showing to the user as is.

use std::path::PathBuf;

use crate::encode::Encoding;

/// Error returned by the conversion pipeline.
///
/// All validation happens before the first output byte is produced, so any
/// of these leaves the source image and existing files untouched.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// An alpha value other than 0 or 255 was found.
    #[error("Invalid alpha value {value} at ({x}, {y}) (0 or 255 expected).")]
    InvalidAlphaValue { value: u8, x: usize, y: usize },

    /// A fully transparent pixel was found but no transparent color is configured.
    #[error("Transparent pixel at ({x}, {y}) not expected: no transparent color designated.")]
    NoTransparentColorDesignated { x: usize, y: usize },

    /// Image dimensions do not fit the selected encoding.
    #[error("{0}")]
    ImageFormat(String),

    /// An output file is already present at the target path.
    #[error("Output file \"{}\" already exists.", path.display())]
    OutputAlreadyExists { path: PathBuf },

    /// A compressed encoding was requested.
    #[error("{0} compression is not implemented.")]
    UnsupportedEncoding(Encoding),

    /// More colors than the hardware palette holds.
    #[error("Palette has {len} colors, at most 16 are supported.")]
    PaletteTooLarge { len: usize },
}
