//! PNG export of no-output previews.

use std::io::Cursor;
use std::path::Path;

use screen5::{ImageSurface, RgbaImage};

use super::output_writer::write_atomic;
use crate::error::AppError;

/// Encode `image` as an 8-bit RGBA PNG.
pub fn encode_preview_png(image: &RgbaImage) -> Result<Vec<u8>, AppError> {
    let width = u32::try_from(image.width())
        .map_err(|_| AppError::UnsupportedPng(format!("width {} too large", image.width())))?;
    let height = u32::try_from(image.height())
        .map_err(|_| AppError::UnsupportedPng(format!("height {} too large", image.height())))?;

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&image.to_rgba_bytes())?;
    }
    Ok(buf.into_inner())
}

/// Write the preview PNG to `path`, refusing to overwrite.
pub fn write_preview(path: &Path, image: &RgbaImage) -> Result<(), AppError> {
    let bytes = encode_preview_png(image)?;
    write_atomic(path, &bytes)?;
    tracing::info!(path = %path.display(), "Wrote preview");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::decode_png;
    use screen5::{Color, Pixel};

    #[test]
    fn test_preview_decodes_back() {
        let mut image = RgbaImage::filled(3, 2, Color::new(224, 0, 0));
        image.set_pixel(2, 1, Pixel::opaque(Color::new(0, 96, 160)));

        let png = encode_preview_png(&image).unwrap();
        let decoded = decode_png(&png).unwrap();

        assert_eq!(decoded.pixels(), image.pixels());
    }
}
