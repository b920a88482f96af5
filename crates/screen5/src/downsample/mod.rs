//! Reduction of 8-bit RGB to the MSX2 9-bit color space.
//!
//! Each channel is snapped to one of eight levels (see [`level`]). With
//! dithering enabled the per-channel quantization error is scattered to
//! unvisited neighbors using [`SCATTER_KERNEL`], so flat areas of an
//! unrepresentable color turn into a mix of the surrounding levels.
//!
//! Processing is a single left-to-right, top-to-bottom pass. Pixels of the
//! transparent color are left untouched and receive no error of their own
//! (dithering is never combined with transparency).
//!
//! [`level`]: crate::color::level

mod kernel;

pub use kernel::{Kernel, SCATTER_KERNEL};

use crate::color::{Color, Pixel};
use crate::progress::{row_fraction, Progress};
use crate::surface::ImageSurface;
use crate::transparency::TransparentColor;

/// Downsample every non-transparent pixel in place.
///
/// See the [module documentation](self) for the algorithm.
pub fn downsample<S>(
    surface: &mut S,
    transparent: TransparentColor,
    dithering: bool,
    progress: &mut dyn Progress,
) where
    S: ImageSurface + ?Sized,
{
    let (width, height) = (surface.width(), surface.height());

    progress.stage("Downsampling...");
    for y in 0..height {
        for x in 0..width {
            let original = surface.get_pixel(x, y).color();
            if transparent.matches(original) {
                continue;
            }
            let quantized = original.downsampled();
            surface.set_pixel(x, y, Pixel::opaque(quantized));

            if dithering {
                let error = [
                    original.r as i32 - quantized.r as i32,
                    original.g as i32 - quantized.g as i32,
                    original.b as i32 - quantized.b as i32,
                ];
                scatter_error(surface, x, y, error, &SCATTER_KERNEL);
            }
        }
        progress.report_progress(row_fraction(y, height), None);
    }
}

/// Add shares of `error` to the neighbors of (x, y) listed in `kernel`.
///
/// Each channel becomes `round(value + error * share)` clamped to 0..=255,
/// with ties rounding to even. Neighbors outside the surface are skipped.
fn scatter_error<S>(surface: &mut S, x: usize, y: usize, error: [i32; 3], kernel: &Kernel)
where
    S: ImageSurface + ?Sized,
{
    let (width, height) = (surface.width() as i64, surface.height() as i64);

    for &(dx, dy, weight) in kernel.entries {
        let nx = x as i64 + dx as i64;
        let ny = y as i64 + dy as i64;
        if nx < 0 || ny < 0 || nx >= width || ny >= height {
            continue;
        }
        let (nx, ny) = (nx as usize, ny as usize);

        let share = kernel.share(weight);
        let [r, g, b] = surface.get_pixel(nx, ny).color().to_bytes();
        let spread = |value: u8, err: i32| -> u8 {
            (value as f64 + err as f64 * share)
                .round_ties_even()
                .clamp(0.0, 255.0) as u8
        };
        let adjusted = Color::new(
            spread(r, error[0]),
            spread(g, error[1]),
            spread(b, error[2]),
        );
        surface.set_pixel(nx, ny, Pixel::opaque(adjusted));
    }
}
