//! File containers around the packed bitmap.

use super::{pack_nibbles, Encoding, PaletteBlock, PALETTE_END, PALETTE_OFFSET};
use crate::api::ConvertError;

/// First byte of an MSX-BASIC `BLOAD` file.
pub const BIN_PREFIX: u8 = 0xFE;

/// `BLOAD` header: load range and execution address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryHeader {
    pub start: u16,
    pub end: u16,
    pub exec: u16,
}

impl BinaryHeader {
    pub const LEN: usize = 7;

    /// Header for `len` bytes loaded at `start`.
    pub fn for_payload(start: usize, len: usize) -> Result<Self, ConvertError> {
        let end = start + len;
        let to_u16 = |value: usize| {
            u16::try_from(value).map_err(|_| {
                ConvertError::ImageFormat(format!(
                    "Payload of {len} bytes at {start:#06X} exceeds the 64 KiB BLOAD range."
                ))
            })
        };
        Ok(Self {
            start: to_u16(start)?,
            end: to_u16(end)?,
            exec: 0,
        })
    }

    pub fn to_bytes(self) -> [u8; Self::LEN] {
        let [s0, s1] = self.start.to_le_bytes();
        let [e0, e1] = self.end.to_le_bytes();
        let [x0, x1] = self.exec.to_le_bytes();
        [BIN_PREFIX, s0, s1, e0, e1, x0, x1]
    }

    /// Read a header from the start of `bytes`.
    pub fn parse(bytes: &[u8]) -> Option<Self> {
        let header = bytes.get(..Self::LEN)?;
        if header[0] != BIN_PREFIX {
            return None;
        }
        let word = |i: usize| u16::from_le_bytes([header[i], header[i + 1]]);
        Some(Self {
            start: word(1),
            end: word(3),
            exec: word(5),
        })
    }
}

fn with_header(start: usize, payload: Vec<u8>) -> Result<Vec<u8>, ConvertError> {
    let header = BinaryHeader::for_payload(start, payload.len())?;
    let mut out = Vec::with_capacity(BinaryHeader::LEN + payload.len());
    out.extend_from_slice(&header.to_bytes());
    out.extend(payload);
    Ok(out)
}

/// Encode palette indices (already offset for transparency) into the
/// image file for `encoding`. Returns `None` for [`Encoding::NoOutput`].
///
/// Dimensions must have passed [`Encoding::validate`].
pub fn encode_image(
    encoding: Encoding,
    indices: &[u8],
    width: usize,
    height: usize,
    palette: &PaletteBlock,
) -> Result<Option<Vec<u8>>, ConvertError> {
    debug_assert_eq!(indices.len(), width * height);

    let bytes = match encoding {
        Encoding::Sc5 => {
            let mut buffer = pack_nibbles(indices, width, PALETTE_END);
            buffer[PALETTE_OFFSET..PALETTE_END].copy_from_slice(palette.as_bytes());
            with_header(0, buffer)?
        }
        Encoding::Sr5 => with_header(0, pack_nibbles(indices, width, 0))?,
        Encoding::Raw => pack_nibbles(indices, width, 0),
        Encoding::Dat => {
            let dims = |value: usize| {
                u16::try_from(value).map_err(|_| {
                    ConvertError::ImageFormat(format!("Dimension {value} does not fit DAT header."))
                })
            };
            let mut out = Vec::with_capacity(4 + indices.len() / 2);
            out.extend_from_slice(&dims(width)?.to_le_bytes());
            out.extend_from_slice(&dims(height)?.to_le_bytes());
            out.extend(pack_nibbles(indices, width, 0));
            out
        }
        Encoding::NoOutput => return Ok(None),
        Encoding::Rle | Encoding::APLib => {
            return Err(ConvertError::UnsupportedEncoding(encoding))
        }
    };
    Ok(Some(bytes))
}

/// The `.PAL` file: the palette table as a `BLOAD` file targeting its
/// VRAM address.
pub fn encode_palette_file(palette: &PaletteBlock) -> Result<Vec<u8>, ConvertError> {
    with_header(PALETTE_OFFSET, palette.as_bytes().to_vec())
}
