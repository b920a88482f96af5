//! The final, index-ordered palette.

use crate::api::ConvertError;
use crate::color::Color;

/// Number of entries in the MSX2 hardware palette.
pub const MAX_COLORS: usize = 16;

/// Up to 16 distinct colors sorted in ascending (R, G, B) order.
///
/// A color's index is its position. When index 0 is reserved for
/// transparency the palette holds at most 15 colors and the encoder adds
/// one to every index; the reservation is not an entry here.
///
/// # Example
///
/// ```
/// use screen5::{Color, Palette};
///
/// let palette = Palette::new(vec![Color::new(224, 0, 0), Color::new(0, 0, 0)]).unwrap();
///
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.color(0), Color::new(0, 0, 0));
/// assert_eq!(palette.index_of(Color::new(224, 0, 0)), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Build a palette from colors in any order; duplicates are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::PaletteTooLarge`] with more than
    /// [`MAX_COLORS`] distinct colors.
    pub fn new(mut colors: Vec<Color>) -> Result<Self, ConvertError> {
        colors.sort_unstable();
        colors.dedup();
        if colors.len() > MAX_COLORS {
            return Err(ConvertError::PaletteTooLarge { len: colors.len() });
        }
        Ok(Self { colors })
    }

    /// Wrap colors already sorted and unique.
    pub(crate) fn from_sorted(colors: Vec<Color>) -> Self {
        debug_assert!(colors.windows(2).all(|w| w[0] < w[1]));
        debug_assert!(colors.len() <= MAX_COLORS);
        Self { colors }
    }

    /// Number of colors.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The color at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    pub fn color(&self, index: usize) -> Color {
        self.colors[index]
    }

    /// All colors in index order.
    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Index of an exact palette member.
    #[inline]
    pub fn index_of(&self, color: Color) -> Option<usize> {
        self.colors.binary_search(&color).ok()
    }

    /// (index, color) pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Color)> + '_ {
        self.colors.iter().copied().enumerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_and_deduplicated() {
        let palette = Palette::new(vec![
            Color::new(32, 0, 0),
            Color::new(0, 64, 0),
            Color::new(0, 0, 96),
            Color::new(32, 0, 0),
        ])
        .unwrap();

        assert_eq!(
            palette.colors(),
            &[
                Color::new(0, 0, 96),
                Color::new(0, 64, 0),
                Color::new(32, 0, 0),
            ]
        );
        assert_eq!(palette.index_of(Color::new(0, 64, 0)), Some(1));
        assert_eq!(palette.index_of(Color::new(0, 64, 1)), None);
    }

    #[test]
    fn test_too_many_colors() {
        let colors: Vec<Color> = (0..17u8).map(|i| Color::new(i, 0, 0)).collect();
        assert!(matches!(
            Palette::new(colors),
            Err(ConvertError::PaletteTooLarge { len: 17 })
        ));
    }

    #[test]
    fn test_empty_palette_is_allowed() {
        let palette = Palette::new(Vec::new()).unwrap();
        assert!(palette.is_empty());
        assert_eq!(palette.iter().count(), 0);
    }
}
