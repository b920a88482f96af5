//! Color occurrence counting.

use std::collections::HashMap;

use crate::color::Color;
use crate::progress::{row_fraction, Progress};
use crate::surface::ImageSurface;
use crate::transparency::TransparentColor;

/// Occurrence count per distinct color.
///
/// Entries keep first-seen order. The quantizer's stable frequency sort
/// breaks ties in this order, which makes the merge sequence reproducible
/// for a given image.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Histogram {
    entries: Vec<(Color, u64)>,
    index: HashMap<Color, usize>,
}

impl Histogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `color`.
    #[inline]
    pub fn add(&mut self, color: Color) {
        self.add_count(color, 1);
    }

    /// Count `count` more occurrences of `color`.
    pub fn add_count(&mut self, color: Color, count: u64) {
        match self.index.get(&color) {
            Some(&i) => self.entries[i].1 += count,
            None => {
                self.index.insert(color, self.entries.len());
                self.entries.push((color, count));
            }
        }
    }

    /// Occurrences of `color` (0 if never seen).
    pub fn count(&self, color: Color) -> u64 {
        self.index.get(&color).map_or(0, |&i| self.entries[i].1)
    }

    /// Number of distinct colors.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|&(_, n)| n).sum()
    }

    /// (color, count) pairs in first-seen order.
    pub fn entries(&self) -> &[(Color, u64)] {
        &self.entries
    }
}

impl FromIterator<Color> for Histogram {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        let mut histogram = Histogram::new();
        for color in iter {
            histogram.add(color);
        }
        histogram
    }
}

impl FromIterator<(Color, u64)> for Histogram {
    fn from_iter<I: IntoIterator<Item = (Color, u64)>>(iter: I) -> Self {
        let mut histogram = Histogram::new();
        for (color, count) in iter {
            histogram.add_count(color, count);
        }
        histogram
    }
}

/// Count every pixel of `surface` except those of the transparent color.
pub fn build_histogram<S>(
    surface: &S,
    transparent: TransparentColor,
    progress: &mut dyn Progress,
) -> Histogram
where
    S: ImageSurface + ?Sized,
{
    let (width, height) = (surface.width(), surface.height());
    let mut histogram = Histogram::new();

    progress.stage("Creating histogram...");
    for y in 0..height {
        for x in 0..width {
            let color = surface.get_pixel(x, y).color();
            if !transparent.matches(color) {
                histogram.add(color);
            }
        }
        progress.report_progress(row_fraction(y, height), None);
    }

    tracing::debug!(colors = histogram.len(), "Built histogram");
    histogram
}
