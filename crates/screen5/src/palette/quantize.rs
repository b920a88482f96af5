//! Greedy histogram reduction.

use super::palette::{Palette, MAX_COLORS};
use crate::color::Color;
use crate::histogram::Histogram;

/// Result of [`quantize`].
#[derive(Debug, Clone, PartialEq)]
pub struct Quantization {
    /// Surviving colors, index-ordered.
    pub palette: Palette,
    /// Number of merge steps performed.
    pub merges: usize,
}

/// Reduce `histogram` to at most `length` colors.
///
/// While too many colors remain:
///
/// 1. stable-sort the entries by ascending count
/// 2. remove the first (rarest) entry
/// 3. find the remaining entry nearest to it by Euclidean RGB distance,
///    the first one winning ties
/// 4. add the removed count to that entry; the removed color is gone
///
/// Survivors are then indexed in ascending (R, G, B) order. This greedy
/// scheme is not an optimal clustering, but it is what decides which colors
/// existing files were encoded with.
///
/// `length` is capped at [`MAX_COLORS`].
///
/// # Example
///
/// ```
/// use screen5::{quantize, Color, Histogram};
///
/// let histogram: Histogram = [
///     (Color::new(0, 0, 0), 10),
///     (Color::new(32, 0, 0), 1),
///     (Color::new(224, 224, 224), 10),
/// ]
/// .into_iter()
/// .collect();
///
/// let result = quantize(&histogram, 2);
/// assert_eq!(result.merges, 1);
/// assert_eq!(
///     result.palette.colors(),
///     &[Color::new(0, 0, 0), Color::new(224, 224, 224)]
/// );
/// ```
pub fn quantize(histogram: &Histogram, length: usize) -> Quantization {
    let length = length.min(MAX_COLORS);
    let mut entries: Vec<(Color, u64)> = histogram.entries().to_vec();
    let mut merges = 0;

    while entries.len() > length {
        entries.sort_by_key(|&(_, count)| count);
        let (rarest, count) = entries.remove(0);

        let Some(nearest) = entries
            .iter()
            .enumerate()
            .min_by_key(|(_, (color, _))| rarest.distance_squared(*color))
            .map(|(i, _)| i)
        else {
            // length == 0: nothing left to merge into
            break;
        };
        entries[nearest].1 += count;
        merges += 1;
    }

    tracing::debug!(
        from = histogram.len(),
        to = entries.len(),
        merges,
        "Quantized colors"
    );

    let mut colors: Vec<Color> = entries.into_iter().map(|(color, _)| color).collect();
    colors.sort_unstable();
    Quantization {
        palette: Palette::from_sorted(colors),
        merges,
    }
}
