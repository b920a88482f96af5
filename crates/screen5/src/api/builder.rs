//! Converter -- the single conversion entry point.

use super::{ConvertError, ConvertOptions};
use crate::color::Pixel;
use crate::downsample::downsample;
use crate::encode::{encode_image, encode_palette_file, preview_listing, Encoding, PaletteBlock};
use crate::histogram::build_histogram;
use crate::output::ConvertedImage;
use crate::palette::{quantize, NearestColorIndex, Quantization, MAX_COLORS};
use crate::progress::{row_fraction, Progress};
use crate::surface::ImageSurface;
use crate::transparency::{resolve_transparency, TransparentColor};

/// Runs the whole pipeline for one image.
///
/// 1. validate encoding and dimensions
/// 2. duplicate the source and make sure it has alpha
/// 3. resolve transparency; drop the index 0 reservation if unused,
///    otherwise turn dithering off
/// 4. downsample to 9-bit color
/// 5. build the histogram of the downsampled pixels
/// 6. quantize to 16 colors, or 15 with transparency
/// 7. map every pixel to its nearest palette index and encode
///
/// The source is never modified. `convert` takes `&self`, so one converter
/// can process any number of images; each call gets its own color cache.
///
/// # Example
///
/// ```
/// use screen5::{Color, ConvertOptions, Converter, NoProgress, RgbaImage};
///
/// let image = RgbaImage::filled(256, 212, Color::new(255, 0, 0));
/// let converter = Converter::new(ConvertOptions::new().dithering(false));
///
/// let result = converter.convert(&image, &mut NoProgress).unwrap();
///
/// assert_eq!(result.palette().colors(), &[Color::new(224, 0, 0)]);
/// assert_eq!(result.palette_file().unwrap()[7], 112);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    #[inline]
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Extensions of the files a successful conversion of this converter
    /// produces, image first.
    pub fn output_extensions(&self) -> Vec<&'static str> {
        let mut extensions = Vec::with_capacity(3);
        extensions.extend(self.options.encoding.extension());
        if self.options.export_palette {
            extensions.push("PAL");
        }
        if self.options.export_text_palette {
            extensions.push("TXT");
        }
        extensions
    }

    /// Convert `source`.
    ///
    /// # Errors
    ///
    /// Fails before any pixel work on an unsupported encoding or dimensions
    /// that do not fit it, and during transparency resolution on bad alpha.
    pub fn convert<S>(
        &self,
        source: &S,
        progress: &mut dyn Progress,
    ) -> Result<ConvertedImage, ConvertError>
    where
        S: ImageSurface + ?Sized,
    {
        let options = &self.options;
        let encoding = options.encoding;
        let (width, height) = (source.width(), source.height());
        encoding.validate(width, height)?;

        let mut surface = source.duplicate();
        if !surface.has_alpha() {
            surface.add_alpha();
        }
        let kind = surface.kind();
        tracing::debug!(width, height, %kind, %encoding, "Converting image");

        let used_transparency = resolve_transparency(&mut surface, options.transparent(), progress)?;
        let (transparent, dithering) = if used_transparency {
            if options.dithering {
                tracing::debug!("Dithering disabled, image uses transparency");
            }
            (options.transparent(), false)
        } else {
            if options.reserve_transparent_index {
                tracing::info!("No transparent pixels, palette index 0 freed");
            }
            (TransparentColor::None, options.dithering)
        };
        let budget = MAX_COLORS - usize::from(used_transparency);

        downsample(&mut surface, transparent, dithering, progress);

        let histogram = build_histogram(&surface, transparent, progress);

        progress.stage("Quantizing colors...");
        let Quantization { palette, merges } = quantize(&histogram, budget);
        tracing::debug!(colors = palette.len(), merges, "Palette ready");

        let offset = u8::from(used_transparency);
        let block = PaletteBlock::new(&palette, offset as usize);
        let mut nearest = NearestColorIndex::new(&palette);
        let mut preview = (encoding == Encoding::NoOutput).then(|| surface.clone());
        let mut indices = Vec::with_capacity(width * height);

        progress.stage(&format!("Exporting image to {encoding} format..."));
        for y in 0..height {
            for x in 0..width {
                let color = surface.get_pixel(x, y).color();
                if transparent.matches(color) {
                    indices.push(0);
                    continue;
                }
                // the palette is only empty when every pixel is transparent
                let Some((index, matched)) = nearest.query(color) else {
                    indices.push(0);
                    continue;
                };
                indices.push(index + offset);
                if let Some(preview) = preview.as_mut() {
                    preview.set_pixel(x, y, Pixel::opaque(matched));
                }
            }
            progress.report_progress(row_fraction(y, height), None);
        }
        tracing::debug!(cached = nearest.cached(), "Mapped pixels to palette");

        let image = encode_image(encoding, &indices, width, height, &block)?;
        let palette_file = if options.export_palette {
            Some(encode_palette_file(&block)?)
        } else {
            None
        };
        let text_palette = options.export_text_palette.then(|| match encoding {
            Encoding::NoOutput => preview_listing(&palette),
            _ => block.listing(),
        });

        Ok(ConvertedImage {
            width,
            height,
            indices,
            palette,
            used_transparency,
            encoding,
            image,
            palette_file,
            text_palette,
            preview,
        })
    }
}
