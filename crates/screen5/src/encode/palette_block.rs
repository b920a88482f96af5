//! The 32-byte hardware palette table.

use crate::palette::{Palette, MAX_COLORS};

/// Size of the palette table in bytes.
pub const PALETTE_BLOCK_LEN: usize = MAX_COLORS * 2;

/// Palette in V9938 register format.
///
/// Slot `i` occupies two bytes: `0RRR0BBB` then `00000GGG`. Slots not
/// covered by the palette stay zero (black).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteBlock([u8; PALETTE_BLOCK_LEN]);

impl PaletteBlock {
    /// Lay out `palette` starting at slot `offset` (1 when index 0 is the
    /// transparent color, 0 otherwise). Entries past slot 15 are dropped.
    pub fn new(palette: &Palette, offset: usize) -> Self {
        let mut bytes = [0u8; PALETTE_BLOCK_LEN];
        for (index, color) in palette.iter() {
            let slot = index + offset;
            if slot >= MAX_COLORS {
                break;
            }
            let [r, g, b] = color.nine_bit();
            bytes[slot * 2] = (r << 4) | b;
            bytes[slot * 2 + 1] = g;
        }
        Self(bytes)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; PALETTE_BLOCK_LEN] {
        &self.0
    }

    /// 3-bit (r, g, b) of `slot`.
    pub fn slot(&self, slot: usize) -> [u8; 3] {
        let rb = self.0[slot * 2];
        let g = self.0[slot * 2 + 1];
        [(rb >> 4) & 0x07, g & 0x07, rb & 0x07]
    }

    /// Listing written to the `.TXT` file: a header line, then every slot
    /// as `i: r, g, b`.
    pub fn listing(&self) -> String {
        let mut text = String::from("SCREEN 5 palette:\n");
        for slot in 0..MAX_COLORS {
            let [r, g, b] = self.slot(slot);
            text.push_str(&format!("{slot}: {r}, {g}, {b}\n"));
        }
        text
    }
}

/// Listing for `no-output` conversions: the palette entries only, in 3-bit
/// values, with no transparency offset.
pub fn preview_listing(palette: &Palette) -> String {
    let mut text = String::from("16-color palette:\n");
    for (index, color) in palette.iter() {
        let [r, g, b] = color.nine_bit();
        text.push_str(&format!("{index}: {r}, {g}, {b}\n"));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn palette() -> Palette {
        Palette::new(vec![Color::new(224, 0, 0), Color::new(0, 224, 32)]).unwrap()
    }

    #[test]
    fn test_register_layout() {
        let block = PaletteBlock::new(&palette(), 0);
        let bytes = block.as_bytes();
        // (0, 224, 32) sorts first
        assert_eq!(&bytes[0..4], &[0x01, 0x07, 0x70, 0x00]);
        assert!(bytes[4..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_offset_shifts_slots() {
        let block = PaletteBlock::new(&palette(), 1);
        assert_eq!(block.slot(0), [0, 0, 0]);
        assert_eq!(block.slot(1), [0, 7, 1]);
        assert_eq!(block.slot(2), [7, 0, 0]);
    }

    #[test]
    fn test_listing_covers_all_slots() {
        let text = PaletteBlock::new(&palette(), 1).listing();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 17);
        assert_eq!(lines[0], "SCREEN 5 palette:");
        assert_eq!(lines[1], "0: 0, 0, 0");
        assert_eq!(lines[2], "1: 0, 7, 1");
        assert_eq!(lines[3], "2: 7, 0, 0");
        assert_eq!(lines[16], "15: 0, 0, 0");
    }

    #[test]
    fn test_preview_listing() {
        let text = preview_listing(&palette());
        assert_eq!(text, "16-color palette:\n0: 0, 7, 1\n1: 7, 0, 0\n");
    }
}
