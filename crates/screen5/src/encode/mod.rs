//! VRAM layout and output containers
//!
//! SCREEN 5 stores two 4-bit palette indices per byte, high nibble first,
//! 128 bytes per 256-pixel row. The palette table lives at VRAM offset
//! `0x7680`, 16 entries of two bytes each.
//!
//! | Encoding | Layout |
//! |---|---|
//! | `SC5` | `BLOAD` header + packed bitmap with the palette table embedded at `0x7680` |
//! | `SR5` | `BLOAD` header + packed bitmap |
//! | `RAW` | packed bitmap only |
//! | `DAT` | `u16` width, `u16` height, packed bitmap (for `COPY` from BASIC) |
//! | `no-output` | nothing written; the quantized image is returned for preview |
//!
//! All integers are little-endian. The `BLOAD` header is
//! `0xFE, u16 start, u16 end, u16 exec` (exec always 0).

mod container;
mod encoding;
mod packing;
mod palette_block;

pub use container::{encode_image, encode_palette_file, BinaryHeader, BIN_PREFIX};
pub use encoding::{Encoding, ParseEncodingError};
pub use packing::{pack_nibbles, unpack_nibbles};
pub use palette_block::{preview_listing, PaletteBlock, PALETTE_BLOCK_LEN};

/// Width of a SCREEN 5 page in pixels.
pub const MAX_WIDTH: usize = 256;

/// Rows in one 32 KiB VRAM page.
pub const PAGE_HEIGHT: usize = 256;

/// VRAM pages available on a 128 KiB MSX2.
pub const MAX_PAGES: usize = 4;

/// Visible rows, the limit for BASIC `COPY` data.
pub const MAX_DAT_HEIGHT: usize = 212;

/// VRAM offset of the palette table.
pub const PALETTE_OFFSET: usize = 0x7680;

/// First byte past the palette table.
pub const PALETTE_END: usize = PALETTE_OFFSET + PALETTE_BLOCK_LEN;
