//! Output encoding selection and dimension rules.

use std::fmt;
use std::str::FromStr;

use super::{MAX_DAT_HEIGHT, MAX_PAGES, MAX_WIDTH, PAGE_HEIGHT};
use crate::api::ConvertError;

/// Output container format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Encoding {
    /// `BLOAD` binary with the palette embedded.
    #[default]
    Sc5,
    /// `BLOAD` binary without palette.
    Sr5,
    /// Width and height followed by the bitmap, for BASIC `COPY`.
    Dat,
    /// Bare bitmap.
    Raw,
    /// No file; quantized preview only.
    NoOutput,
    /// Run-length compressed. Recognized, never implemented.
    Rle,
    /// aPLib compressed. Recognized, never implemented.
    APLib,
}

impl Encoding {
    /// File extension of the image output, `None` for [`Encoding::NoOutput`]
    /// and the unsupported compressed encodings.
    pub fn extension(self) -> Option<&'static str> {
        match self {
            Encoding::Sc5 => Some("SC5"),
            Encoding::Sr5 => Some("SR5"),
            Encoding::Dat => Some("DAT"),
            Encoding::Raw => Some("RAW"),
            Encoding::NoOutput | Encoding::Rle | Encoding::APLib => None,
        }
    }

    /// Check that the encoding is implemented and that a `width` x `height`
    /// image fits it.
    ///
    /// - `SC5`, `SR5`: width exactly 256, at most one page (256 rows)
    /// - `RAW`: width exactly 256, at most four pages (1024 rows)
    /// - `DAT`: width at most 256, at most 212 rows, both even
    /// - `no-output`: any width, at most 1024 rows
    pub fn validate(self, width: usize, height: usize) -> Result<(), ConvertError> {
        let format_error =
            |message: String| -> Result<(), ConvertError> { Err(ConvertError::ImageFormat(message)) };
        let max_height = PAGE_HEIGHT * MAX_PAGES;

        match self {
            Encoding::Rle | Encoding::APLib => Err(ConvertError::UnsupportedEncoding(self)),
            Encoding::Sc5 | Encoding::Sr5 | Encoding::Raw if width != MAX_WIDTH => format_error(
                format!("Width should be exactly {MAX_WIDTH} (currently {width}) for {self} images."),
            ),
            Encoding::Sc5 | Encoding::Sr5 if height > PAGE_HEIGHT => format_error(format!(
                "Height should not be greater than {PAGE_HEIGHT} (currently {height}) for {self} images."
            )),
            Encoding::Dat if width > MAX_WIDTH => format_error(format!(
                "Width should not be greater than {MAX_WIDTH} (currently {width}) for {self} images."
            )),
            Encoding::Dat if height > MAX_DAT_HEIGHT => format_error(format!(
                "Height should not be greater than {MAX_DAT_HEIGHT} (currently {height}) for {self} images."
            )),
            Encoding::Dat if width % 2 != 0 || height % 2 != 0 => format_error(format!(
                "Width and height must be even (currently {width}x{height}) for {self} images."
            )),
            _ if height > max_height => format_error(format!(
                "Height must not be greater than {max_height} (currently {height})."
            )),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Encoding::Sc5 => "SC5",
            Encoding::Sr5 => "SR5",
            Encoding::Dat => "DAT",
            Encoding::Raw => "RAW",
            Encoding::NoOutput => "no-output",
            Encoding::Rle => "RLE",
            Encoding::APLib => "aPLib",
        };
        f.write_str(name)
    }
}

/// Unknown encoding name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown encoding \"{0}\" (expected SC5, SR5, DAT, RAW or no-output)")]
pub struct ParseEncodingError(pub String);

impl FromStr for Encoding {
    type Err = ParseEncodingError;

    /// Case-insensitive; `none` is accepted for `no-output`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sc5" => Ok(Encoding::Sc5),
            "sr5" => Ok(Encoding::Sr5),
            "dat" => Ok(Encoding::Dat),
            "raw" => Ok(Encoding::Raw),
            "no-output" | "none" => Ok(Encoding::NoOutput),
            "rle" => Ok(Encoding::Rle),
            "aplib" => Ok(Encoding::APLib),
            _ => Err(ParseEncodingError(s.to_string())),
        }
    }
}

impl serde::Serialize for Encoding {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Encoding {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("SC5".parse::<Encoding>(), Ok(Encoding::Sc5));
        assert_eq!("sr5".parse::<Encoding>(), Ok(Encoding::Sr5));
        assert_eq!("Dat".parse::<Encoding>(), Ok(Encoding::Dat));
        assert_eq!("raw".parse::<Encoding>(), Ok(Encoding::Raw));
        assert_eq!("no-output".parse::<Encoding>(), Ok(Encoding::NoOutput));
        assert_eq!("none".parse::<Encoding>(), Ok(Encoding::NoOutput));
        assert_eq!("aPLib".parse::<Encoding>(), Ok(Encoding::APLib));
        assert!("png".parse::<Encoding>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for encoding in [
            Encoding::Sc5,
            Encoding::Sr5,
            Encoding::Dat,
            Encoding::Raw,
            Encoding::NoOutput,
            Encoding::Rle,
            Encoding::APLib,
        ] {
            assert_eq!(encoding.to_string().parse::<Encoding>(), Ok(encoding));
        }
    }

    #[test]
    fn test_extensions() {
        assert_eq!(Encoding::Sc5.extension(), Some("SC5"));
        assert_eq!(Encoding::Dat.extension(), Some("DAT"));
        assert_eq!(Encoding::NoOutput.extension(), None);
        assert_eq!(Encoding::Rle.extension(), None);
    }

    #[test]
    fn test_width_must_be_256_for_vram_formats() {
        for encoding in [Encoding::Sc5, Encoding::Sr5, Encoding::Raw] {
            assert!(encoding.validate(256, 212).is_ok());
            let err = encoding.validate(300, 212).unwrap_err();
            assert!(matches!(err, ConvertError::ImageFormat(_)));
            assert!(err.to_string().contains("currently 300"));
            assert!(encoding.validate(128, 212).is_err());
        }
    }

    #[test]
    fn test_height_limits() {
        assert!(Encoding::Sc5.validate(256, 256).is_ok());
        assert!(Encoding::Sc5.validate(256, 257).is_err());
        assert!(Encoding::Sr5.validate(256, 257).is_err());
        assert!(Encoding::Raw.validate(256, 1024).is_ok());
        assert!(Encoding::Raw.validate(256, 1025).is_err());
        assert!(Encoding::NoOutput.validate(300, 1024).is_ok());
        assert!(Encoding::NoOutput.validate(300, 1025).is_err());
    }

    #[test]
    fn test_dat_rules() {
        assert!(Encoding::Dat.validate(64, 32).is_ok());
        assert!(Encoding::Dat.validate(256, 212).is_ok());
        assert!(Encoding::Dat.validate(258, 2).is_err());
        assert!(Encoding::Dat.validate(256, 214).is_err());
        assert!(Encoding::Dat.validate(63, 32).is_err());
        assert!(Encoding::Dat.validate(64, 31).is_err());
    }

    #[test]
    fn test_compressed_encodings_rejected() {
        assert!(matches!(
            Encoding::Rle.validate(256, 212),
            Err(ConvertError::UnsupportedEncoding(Encoding::Rle))
        ));
        assert!(matches!(
            Encoding::APLib.validate(256, 212),
            Err(ConvertError::UnsupportedEncoding(Encoding::APLib))
        ));
    }
}
