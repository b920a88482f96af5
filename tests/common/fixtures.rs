//! PNG fixtures written on the fly.

use std::path::{Path, PathBuf};

/// Write an 8-bit PNG and return its path.
pub fn write_png(
    dir: &Path,
    name: &str,
    width: u32,
    height: u32,
    color: png::ColorType,
    palette: Option<&[u8]>,
    data: &[u8],
) -> PathBuf {
    let path = dir.join(name);
    let file = std::fs::File::create(&path).unwrap();
    let mut encoder = png::Encoder::new(std::io::BufWriter::new(file), width, height);
    encoder.set_color(color);
    encoder.set_depth(png::BitDepth::Eight);
    if let Some(palette) = palette {
        encoder.set_palette(palette);
    }
    let mut writer = encoder.write_header().unwrap();
    writer.write_image_data(data).unwrap();
    writer.finish().unwrap();
    path
}

/// Solid RGB image.
pub fn solid_rgb(dir: &Path, name: &str, width: u32, height: u32, rgb: [u8; 3]) -> PathBuf {
    let data: Vec<u8> = (0..width * height).flat_map(|_| rgb).collect();
    write_png(dir, name, width, height, png::ColorType::Rgb, None, &data)
}

/// RGBA image: `background` everywhere, fully transparent in the left half
/// of every even row.
pub fn half_transparent(dir: &Path, name: &str, width: u32, height: u32, background: [u8; 4]) -> PathBuf {
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            if y % 2 == 0 && x < width / 2 {
                data.extend_from_slice(&[0, 0, 0, 0]);
            } else {
                data.extend_from_slice(&background);
            }
        }
    }
    write_png(dir, name, width, height, png::ColorType::Rgba, None, &data)
}

/// Horizontal RGB gradient with more than 16 distinct downsampled colors.
pub fn gradient(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            data.extend_from_slice(&[x as u8, (y * 8) as u8, 255 - x as u8]);
        }
    }
    write_png(dir, name, width, height, png::ColorType::Rgb, None, &data)
}
