//! Alpha validation and transparent color substitution.
//!
//! The MSX2 has no alpha channel. Transparency is expressed by reserving
//! palette index 0 and painting transparent areas with a designated color.
//! This stage validates the alpha channel, rewrites fully transparent pixels
//! to that color and reports whether any transparency is actually present.

use crate::api::ConvertError;
use crate::color::{Color, Pixel};
use crate::progress::{row_fraction, Progress};
use crate::surface::ImageSurface;

/// The color standing for "transparent" in the input, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransparentColor {
    /// No transparency reserved; every pixel gets a palette color.
    #[default]
    None,
    /// Pixels of exactly this RGB value are transparent.
    Color(Color),
}

impl TransparentColor {
    /// Whether `color` is the transparent color. Always false for `None`.
    #[inline]
    pub fn matches(self, color: Color) -> bool {
        matches!(self, TransparentColor::Color(c) if c == color)
    }

    /// The designated color, if any.
    #[inline]
    pub fn color(self) -> Option<Color> {
        match self {
            TransparentColor::None => None,
            TransparentColor::Color(c) => Some(c),
        }
    }

    #[inline]
    pub fn is_some(self) -> bool {
        matches!(self, TransparentColor::Color(_))
    }
}

impl From<Option<Color>> for TransparentColor {
    fn from(color: Option<Color>) -> Self {
        color.map_or(TransparentColor::None, TransparentColor::Color)
    }
}

/// Validate alpha values and substitute the transparent color.
///
/// Scans every pixel once:
///
/// - alpha other than 0 or 255 fails with [`ConvertError::InvalidAlphaValue`]
/// - alpha 0 fails with [`ConvertError::NoTransparentColorDesignated`] when
///   `transparent` is `None`, otherwise the pixel is rewritten to the
///   transparent color (opaque) and transparency counts as used
/// - an opaque pixel equal to the transparent color also counts as used
///
/// Returns whether transparency is used. When it is not, the caller drops
/// the index 0 reservation.
pub fn resolve_transparency<S>(
    surface: &mut S,
    transparent: TransparentColor,
    progress: &mut dyn Progress,
) -> Result<bool, ConvertError>
where
    S: ImageSurface + ?Sized,
{
    let (width, height) = (surface.width(), surface.height());
    let mut used = false;

    progress.stage("Pre-processing image...");
    for y in 0..height {
        for x in 0..width {
            let pixel = surface.get_pixel(x, y);
            match pixel.a {
                255 => {
                    if transparent.matches(pixel.color()) {
                        used = true;
                    }
                }
                0 => {
                    let Some(color) = transparent.color() else {
                        return Err(ConvertError::NoTransparentColorDesignated { x, y });
                    };
                    surface.set_pixel(x, y, Pixel::opaque(color));
                    used = true;
                }
                value => return Err(ConvertError::InvalidAlphaValue { value, x, y }),
            }
        }
        progress.report_progress(row_fraction(y, height), None);
    }

    tracing::debug!(used_transparency = used, "Resolved transparency");
    Ok(used)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::NoProgress;
    use crate::surface::RgbaImage;

    const MAGENTA: Color = Color::new(255, 0, 255);

    fn image(pixels: &[Pixel], width: usize) -> RgbaImage {
        RgbaImage::from_pixels(width, pixels.len() / width, pixels.to_vec())
    }

    #[test]
    fn test_opaque_image_without_transparent_color() {
        let mut img = image(&[Pixel::new(1, 2, 3, 255); 4], 2);
        let used =
            resolve_transparency(&mut img, TransparentColor::None, &mut NoProgress).unwrap();
        assert!(!used);
    }

    #[test]
    fn test_alpha_zero_is_rewritten() {
        let mut img = image(&[Pixel::new(1, 2, 3, 255), Pixel::new(9, 9, 9, 0)], 2);
        let used =
            resolve_transparency(&mut img, TransparentColor::Color(MAGENTA), &mut NoProgress)
                .unwrap();

        assert!(used);
        assert_eq!(img.get_pixel(0, 0), Pixel::new(1, 2, 3, 255));
        assert_eq!(img.get_pixel(1, 0), Pixel::opaque(MAGENTA));
    }

    #[test]
    fn test_matching_opaque_pixel_counts_as_used() {
        let mut img = image(&[Pixel::opaque(MAGENTA), Pixel::new(0, 0, 0, 255)], 2);
        let used =
            resolve_transparency(&mut img, TransparentColor::Color(MAGENTA), &mut NoProgress)
                .unwrap();
        assert!(used);
    }

    #[test]
    fn test_unused_transparent_color() {
        let mut img = image(&[Pixel::new(0, 0, 0, 255); 2], 2);
        let used =
            resolve_transparency(&mut img, TransparentColor::Color(MAGENTA), &mut NoProgress)
                .unwrap();
        assert!(!used);
    }

    #[test]
    fn test_partial_alpha_is_rejected() {
        let mut img = image(&[Pixel::new(0, 0, 0, 255), Pixel::new(0, 0, 0, 128)], 2);
        let err = resolve_transparency(&mut img, TransparentColor::Color(MAGENTA), &mut NoProgress)
            .unwrap_err();
        assert!(matches!(
            err,
            ConvertError::InvalidAlphaValue {
                value: 128,
                x: 1,
                y: 0
            }
        ));
    }

    #[test]
    fn test_alpha_zero_without_transparent_color_is_rejected() {
        let mut img = image(&[Pixel::new(0, 0, 0, 0)], 1);
        let err =
            resolve_transparency(&mut img, TransparentColor::None, &mut NoProgress).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::NoTransparentColorDesignated { x: 0, y: 0 }
        ));
    }

    #[test]
    fn test_matches() {
        assert!(!TransparentColor::None.matches(MAGENTA));
        assert!(TransparentColor::Color(MAGENTA).matches(MAGENTA));
        assert!(!TransparentColor::Color(MAGENTA).matches(Color::new(255, 0, 254)));
        assert_eq!(TransparentColor::from(Some(MAGENTA)).color(), Some(MAGENTA));
        assert_eq!(TransparentColor::from(None), TransparentColor::None);
    }
}
