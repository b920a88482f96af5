//! Conversion options.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::encode::Encoding;
use crate::transparency::TransparentColor;

/// Magenta, the customary "transparent" color of MSX artwork.
pub const DEFAULT_TRANSPARENT_COLOR: Color = Color::new(255, 0, 255);

/// Everything that controls one conversion besides the image itself.
///
/// Deserializes from a flat map with every field optional; the color is a
/// hex string and the encoding a name:
///
/// ```yaml
/// dithering: false
/// transparent_color: "#FF00FF"
/// encoding: DAT
/// ```
///
/// # Defaults
///
/// - dithering: on
/// - export_palette: on
/// - reserve_transparent_index: on, with [`DEFAULT_TRANSPARENT_COLOR`]
/// - encoding: [`Encoding::Sc5`]
/// - export_text_palette: off
///
/// # Example
///
/// ```
/// use screen5::{ConvertOptions, Encoding};
///
/// let options = ConvertOptions::new()
///     .encoding(Encoding::Dat)
///     .dithering(false);
///
/// assert_eq!(options.encoding, Encoding::Dat);
/// assert!(options.export_palette);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Scatter downsampling error to neighbors. Ignored when transparency is
    /// used.
    pub dithering: bool,

    /// Write a `.PAL` file next to the image.
    pub export_palette: bool,

    /// Reserve palette index 0 for [`transparent_color`](Self::transparent_color).
    pub reserve_transparent_index: bool,

    /// Input color standing for transparency.
    pub transparent_color: Color,

    /// Output container.
    pub encoding: Encoding,

    /// Write a `.TXT` palette listing.
    pub export_text_palette: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            dithering: true,
            export_palette: true,
            reserve_transparent_index: true,
            transparent_color: DEFAULT_TRANSPARENT_COLOR,
            encoding: Encoding::Sc5,
            export_text_palette: false,
        }
    }
}

impl ConvertOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn dithering(mut self, enabled: bool) -> Self {
        self.dithering = enabled;
        self
    }

    #[inline]
    pub fn export_palette(mut self, enabled: bool) -> Self {
        self.export_palette = enabled;
        self
    }

    #[inline]
    pub fn export_text_palette(mut self, enabled: bool) -> Self {
        self.export_text_palette = enabled;
        self
    }

    #[inline]
    pub fn encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Reserve index 0 for `color`.
    #[inline]
    pub fn transparent_color(mut self, color: Color) -> Self {
        self.transparent_color = color;
        self.reserve_transparent_index = true;
        self
    }

    /// Give all 16 indices to image colors.
    #[inline]
    pub fn no_transparency(mut self) -> Self {
        self.reserve_transparent_index = false;
        self
    }

    /// The transparent color requested before looking at the image.
    pub fn transparent(&self) -> TransparentColor {
        if self.reserve_transparent_index {
            TransparentColor::Color(self.transparent_color)
        } else {
            TransparentColor::None
        }
    }
}
