//! Source image kinds.

use std::fmt;

use crate::color::Color;

/// What a surface looked like before it was expanded to RGBA.
///
/// Descriptive only: every kind is expanded to RGBA and then goes through
/// the same transparency, downsampling and histogram stages, so the same
/// pixels convert to the same bytes whatever their source layout.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ImageKind {
    /// Truecolor source.
    #[default]
    Rgb,
    /// Gray levels expanded to (v, v, v).
    Grayscale,
    /// Palette-based source with its colormap in index order.
    Indexed {
        /// Colormap entries, index order.
        colormap: Vec<Color>,
    },
}

impl fmt::Display for ImageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageKind::Rgb => write!(f, "RGB"),
            ImageKind::Grayscale => write!(f, "grayscale"),
            ImageKind::Indexed { colormap } => write!(f, "indexed ({} colors)", colormap.len()),
        }
    }
}
