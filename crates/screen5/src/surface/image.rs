//! ImageSurface trait and the owned RGBA buffer implementation.

use super::ImageKind;
use crate::color::Pixel;

/// A mutable 2D grid of RGBA pixels.
///
/// The pipeline takes exclusive ownership of a surface for the duration of a
/// conversion and mutates it in place (transparency rewrite, downsampling).
/// Coordinates are always in bounds; implementations may panic otherwise.
pub trait ImageSurface {
    /// Width in pixels.
    fn width(&self) -> usize;

    /// Height in pixels.
    fn height(&self) -> usize;

    /// Read the pixel at (x, y).
    fn get_pixel(&self, x: usize, y: usize) -> Pixel;

    /// Overwrite the pixel at (x, y).
    fn set_pixel(&mut self, x: usize, y: usize, pixel: Pixel);

    /// Produce an independent copy that can be mutated freely.
    fn duplicate(&self) -> RgbaImage;

    /// Whether the surface carries a meaningful alpha channel.
    fn has_alpha(&self) -> bool;

    /// Add an alpha channel, making every existing pixel opaque.
    fn add_alpha(&mut self);

    /// What the source image was before expansion to RGBA.
    fn kind(&self) -> ImageKind {
        ImageKind::Rgb
    }
}

/// Owned RGBA pixel buffer in row-major order.
///
/// # Example
///
/// ```
/// use screen5::{Color, ImageSurface, Pixel, RgbaImage};
///
/// let mut image = RgbaImage::filled(4, 2, Color::new(255, 0, 0));
/// image.set_pixel(3, 1, Pixel::new(0, 0, 0, 0));
///
/// assert_eq!(image.width(), 4);
/// assert_eq!(image.get_pixel(0, 0), Pixel::new(255, 0, 0, 255));
/// assert_eq!(image.get_pixel(3, 1).a, 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RgbaImage {
    width: usize,
    height: usize,
    pixels: Vec<Pixel>,
    alpha: bool,
    kind: ImageKind,
}

impl RgbaImage {
    /// Create an image from pixels in row-major order.
    ///
    /// # Panics
    ///
    /// Panics if `pixels.len() != width * height`. The byte constructors
    /// below pass through here, so a short buffer fails at construction
    /// rather than on the first out-of-range pixel access.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Pixel>) -> Self {
        assert_eq!(
            pixels.len(),
            width * height,
            "pixel count ({}) must match width * height ({}x{})",
            pixels.len(),
            width,
            height,
        );
        Self {
            width,
            height,
            pixels,
            alpha: true,
            kind: ImageKind::Rgb,
        }
    }

    /// Create an opaque image of a single color.
    pub fn filled(width: usize, height: usize, color: crate::Color) -> Self {
        Self::from_pixels(width, height, vec![Pixel::opaque(color); width * height])
    }

    /// Create an image from interleaved RGBA bytes.
    pub fn from_rgba_bytes(width: usize, height: usize, bytes: &[u8]) -> Self {
        let pixels = bytes
            .chunks_exact(4)
            .map(|p| Pixel::new(p[0], p[1], p[2], p[3]))
            .collect();
        Self::from_pixels(width, height, pixels)
    }

    /// Create an image without alpha channel from interleaved RGB bytes.
    pub fn from_rgb_bytes(width: usize, height: usize, bytes: &[u8]) -> Self {
        let pixels = bytes
            .chunks_exact(3)
            .map(|p| Pixel::new(p[0], p[1], p[2], 255))
            .collect();
        Self::from_pixels(width, height, pixels).without_alpha()
    }

    /// Mark the image as having no alpha channel.
    pub fn without_alpha(mut self) -> Self {
        self.alpha = false;
        self
    }

    /// Record the source image kind.
    pub fn with_kind(mut self, kind: ImageKind) -> Self {
        self.kind = kind;
        self
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Interleaved RGBA bytes, row-major.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|p| [p.r, p.g, p.b, p.a])
            .collect()
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height, "({x}, {y}) out of bounds");
        x + y * self.width
    }
}

impl ImageSurface for RgbaImage {
    #[inline]
    fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn get_pixel(&self, x: usize, y: usize) -> Pixel {
        self.pixels[self.offset(x, y)]
    }

    #[inline]
    fn set_pixel(&mut self, x: usize, y: usize, pixel: Pixel) {
        let offset = self.offset(x, y);
        self.pixels[offset] = pixel;
    }

    fn duplicate(&self) -> RgbaImage {
        self.clone()
    }

    fn has_alpha(&self) -> bool {
        self.alpha
    }

    fn add_alpha(&mut self) {
        if !self.alpha {
            for p in &mut self.pixels {
                p.a = 255;
            }
            self.alpha = true;
        }
    }

    fn kind(&self) -> ImageKind {
        self.kind.clone()
    }
}
