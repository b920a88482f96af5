//! Memoized nearest-color queries against a palette.

use std::collections::HashMap;

use super::palette::Palette;
use crate::color::Color;

/// Maps colors to their nearest palette entry, remembering every answer.
///
/// Seeded with the palette itself, so palette members resolve without a
/// search. Any other color is compared against every entry by Euclidean
/// distance (first entry wins ties) and the result cached under the queried
/// color. The cache belongs to one conversion; build a new index per image.
///
/// # Example
///
/// ```
/// use screen5::{Color, NearestColorIndex, Palette};
///
/// let palette = Palette::new(vec![Color::new(0, 0, 0), Color::new(224, 224, 224)]).unwrap();
/// let mut index = NearestColorIndex::new(&palette);
///
/// assert_eq!(index.query(Color::new(0, 0, 0)), Some((0, Color::new(0, 0, 0))));
/// assert_eq!(index.query(Color::new(200, 210, 190)), Some((1, Color::new(224, 224, 224))));
/// ```
#[derive(Debug, Clone)]
pub struct NearestColorIndex<'a> {
    palette: &'a Palette,
    cache: HashMap<Color, u8>,
}

impl<'a> NearestColorIndex<'a> {
    /// Create an index seeded with every palette entry.
    pub fn new(palette: &'a Palette) -> Self {
        let cache = palette.iter().map(|(i, c)| (c, i as u8)).collect();
        Self { palette, cache }
    }

    /// Palette index and color nearest to `color`, `None` for an empty
    /// palette.
    pub fn query(&mut self, color: Color) -> Option<(u8, Color)> {
        if let Some(&index) = self.cache.get(&color) {
            return Some((index, self.palette.color(index as usize)));
        }

        let (index, nearest) = self
            .palette
            .iter()
            .min_by_key(|&(_, candidate)| color.distance_squared(candidate))?;
        self.cache.insert(color, index as u8);
        Some((index as u8, nearest))
    }

    /// Number of remembered colors, palette entries included.
    pub fn cached(&self) -> usize {
        self.cache.len()
    }
}
