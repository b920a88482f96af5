//! RGB and RGBA pixel values.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Number of representable levels per channel on the MSX2 (3 bits).
pub const LEVELS: u8 = 8;

/// Map an 8-bit channel value to its 3-bit level, kept in the top bits.
///
/// Computes `round(c / 255 * 7) << 5`. The ratio never lands exactly on a
/// half for integer input, so the rounding mode does not matter here.
///
/// # Example
/// ```
/// use screen5::color::level;
/// assert_eq!(level(255), 224);
/// assert_eq!(level(0), 0);
/// assert_eq!(level(128), 128);
/// ```
#[inline]
pub fn level(c: u8) -> u8 {
    let steps = (c as f64 / 255.0 * (LEVELS - 1) as f64).round() as u8;
    steps << 5
}

/// Expand a level produced by [`level`] back to the 8-bit intensity the
/// hardware displays for it (`v * 255 / 7`, rounded).
///
/// `level` is not a fixed point on its own output: 224 encodes as 7 but
/// `level(224)` is 192. Going through the displayed intensity is.
///
/// ```
/// use screen5::color::{expand, level};
/// assert_eq!(expand(224), 255);
/// assert_eq!(level(expand(level(200))), level(200));
/// ```
#[inline]
pub fn expand(level: u8) -> u8 {
    ((level >> 5) as f64 * 255.0 / (LEVELS - 1) as f64).round() as u8
}

/// An opaque RGB color.
///
/// Field order matters: the derived `Ord` compares red, then green, then blue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Color {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Color {
    /// Create a color from 8-bit channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array [R, G, B].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Snap every channel to its nearest 3-bit level.
    ///
    /// ```
    /// use screen5::Color;
    /// assert_eq!(Color::new(255, 0, 0).downsampled(), Color::new(224, 0, 0));
    /// ```
    #[inline]
    pub fn downsampled(self) -> Self {
        Self::new(level(self.r), level(self.g), level(self.b))
    }

    /// Right-shift each channel by five, giving the 3-bit hardware values.
    #[inline]
    pub const fn nine_bit(self) -> [u8; 3] {
        [self.r >> 5, self.g >> 5, self.b >> 5]
    }

    /// Squared Euclidean distance in RGB space.
    ///
    /// Integer-exact, so comparing squared distances orders colors the same
    /// way the true distance does, ties included.
    #[inline]
    pub fn distance_squared(self, other: Color) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }

    /// Euclidean distance in RGB space.
    #[inline]
    pub fn distance(self, other: Color) -> f64 {
        (self.distance_squared(other) as f64).sqrt()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 characters)")]
    InvalidLength,
    /// Invalid hexadecimal character encountered
    #[error("invalid hex character: {0}")]
    InvalidHex(#[from] ParseIntError),
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Parse a color from `#RRGGBB`, `RRGGBB`, `#RGB` or `RGB`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }
        match hex.len() {
            6 => Ok(Self::new(
                u8::from_str_radix(&hex[0..2], 16)?,
                u8::from_str_radix(&hex[2..4], 16)?,
                u8::from_str_radix(&hex[4..6], 16)?,
            )),
            3 => {
                // Each digit doubles: "F0A" -> FF00AA
                let digit = |i: usize| -> Result<u8, ParseIntError> {
                    let v = u8::from_str_radix(&hex[i..i + 1], 16)?;
                    Ok(v * 17)
                };
                Ok(Self::new(digit(0)?, digit(1)?, digit(2)?))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}

impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// An 8-bit RGBA sample.
///
/// Alpha is expected to be either 0 (transparent) or 255 (opaque); anything
/// else is rejected by the transparency resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// An opaque pixel of the given color.
    #[inline]
    pub const fn opaque(color: Color) -> Self {
        Self::new(color.r, color.g, color.b, 255)
    }

    /// The RGB part, alpha discarded.
    #[inline]
    pub const fn color(self) -> Color {
        Color::new(self.r, self.g, self.b)
    }
}

impl From<Color> for Pixel {
    fn from(color: Color) -> Self {
        Self::opaque(color)
    }
}
