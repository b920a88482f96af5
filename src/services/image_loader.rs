//! PNG decoding into an [`RgbaImage`].
//!
//! Palette and low-bit-depth images are expanded to 8-bit RGB(A); 16-bit
//! channels are truncated. The source layout is kept as the image's
//! [`ImageKind`] for logging.

use std::io::Cursor;
use std::path::Path;

use screen5::{Color, ImageKind, ImageSurface, RgbaImage};

use crate::error::AppError;

/// Read and decode a PNG file.
pub fn load_png(path: &Path) -> Result<RgbaImage, AppError> {
    let bytes = std::fs::read(path)?;
    let image = decode_png(&bytes)?;
    tracing::debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        kind = %image.kind(),
        "Loaded image"
    );
    Ok(image)
}

/// Decode PNG bytes.
pub fn decode_png(bytes: &[u8]) -> Result<RgbaImage, AppError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;

    let info = reader.info();
    let kind = match info.color_type {
        png::ColorType::Indexed => {
            let colormap = info
                .palette
                .as_deref()
                .unwrap_or_default()
                .chunks_exact(3)
                .map(|c| Color::new(c[0], c[1], c[2]))
                .collect();
            ImageKind::Indexed { colormap }
        }
        png::ColorType::Grayscale | png::ColorType::GrayscaleAlpha => ImageKind::Grayscale,
        png::ColorType::Rgb | png::ColorType::Rgba => ImageKind::Rgb,
    };

    let mut buf = vec![0; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut buf)?;
    let data = &buf[..frame.buffer_size()];
    let (width, height) = (frame.width as usize, frame.height as usize);

    let image = match frame.color_type {
        png::ColorType::Rgba => RgbaImage::from_rgba_bytes(width, height, data),
        png::ColorType::Rgb => RgbaImage::from_rgb_bytes(width, height, data),
        png::ColorType::GrayscaleAlpha => {
            let rgba: Vec<u8> = data
                .chunks_exact(2)
                .flat_map(|p| [p[0], p[0], p[0], p[1]])
                .collect();
            RgbaImage::from_rgba_bytes(width, height, &rgba)
        }
        png::ColorType::Grayscale => {
            let rgb: Vec<u8> = data.iter().flat_map(|&v| [v, v, v]).collect();
            RgbaImage::from_rgb_bytes(width, height, &rgb)
        }
        png::ColorType::Indexed => {
            return Err(AppError::UnsupportedPng(
                "indexed data was not expanded".to_string(),
            ))
        }
    };

    Ok(image.with_kind(kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use screen5::Pixel;

    fn encode(
        width: u32,
        height: u32,
        color: png::ColorType,
        palette: Option<&[u8]>,
        trns: Option<&[u8]>,
        data: &[u8],
    ) -> Vec<u8> {
        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, width, height);
            encoder.set_color(color);
            encoder.set_depth(png::BitDepth::Eight);
            if let Some(palette) = palette {
                encoder.set_palette(palette);
            }
            if let Some(trns) = trns {
                encoder.set_trns(trns);
            }
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
        }
        buf
    }

    #[test]
    fn test_decode_rgb_has_no_alpha() {
        let png = encode(2, 1, png::ColorType::Rgb, None, None, &[1, 2, 3, 4, 5, 6]);
        let image = decode_png(&png).unwrap();

        assert!(!image.has_alpha());
        assert_eq!(image.kind(), ImageKind::Rgb);
        assert_eq!(image.get_pixel(1, 0), Pixel::new(4, 5, 6, 255));
    }

    #[test]
    fn test_decode_rgba() {
        let png = encode(1, 1, png::ColorType::Rgba, None, None, &[9, 8, 7, 0]);
        let image = decode_png(&png).unwrap();

        assert!(image.has_alpha());
        assert_eq!(image.get_pixel(0, 0), Pixel::new(9, 8, 7, 0));
    }

    #[test]
    fn test_decode_grayscale() {
        let png = encode(2, 1, png::ColorType::Grayscale, None, None, &[0, 200]);
        let image = decode_png(&png).unwrap();

        assert_eq!(image.kind(), ImageKind::Grayscale);
        assert_eq!(image.get_pixel(1, 0), Pixel::new(200, 200, 200, 255));
    }

    #[test]
    fn test_decode_indexed_keeps_colormap() {
        let palette = [255, 0, 0, 0, 0, 255];
        let png = encode(2, 1, png::ColorType::Indexed, Some(&palette), None, &[1, 0]);
        let image = decode_png(&png).unwrap();

        assert_eq!(
            image.kind(),
            ImageKind::Indexed {
                colormap: vec![Color::new(255, 0, 0), Color::new(0, 0, 255)]
            }
        );
        assert_eq!(image.get_pixel(0, 0), Pixel::new(0, 0, 255, 255));
        assert_eq!(image.get_pixel(1, 0), Pixel::new(255, 0, 0, 255));
    }

    #[test]
    fn test_decode_indexed_with_transparency() {
        let palette = [255, 0, 255, 10, 20, 30];
        let png = encode(2, 1, png::ColorType::Indexed, Some(&palette), Some(&[0]), &[0, 1]);
        let image = decode_png(&png).unwrap();

        assert!(image.has_alpha());
        assert_eq!(image.get_pixel(0, 0).a, 0);
        assert_eq!(image.get_pixel(1, 0), Pixel::new(10, 20, 30, 255));
    }

    #[test]
    fn test_decode_garbage() {
        assert!(matches!(
            decode_png(b"not a png"),
            Err(AppError::PngDecode(_))
        ));
    }
}
