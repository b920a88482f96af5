//! 4-bit pixel packing.

/// Pack one palette index per pixel into two pixels per byte.
///
/// Row-major; the even column of each pair goes to the high nibble. The
/// buffer is zero-filled to at least `min_len` bytes so containers with a
/// fixed VRAM footprint can embed data past the bitmap.
///
/// Indices must fit in four bits; higher bits are masked off. An odd
/// `width` leaves the last low nibble of each row at zero.
pub fn pack_nibbles(indices: &[u8], width: usize, min_len: usize) -> Vec<u8> {
    if width == 0 {
        return vec![0; min_len];
    }
    let row_bytes = width.div_ceil(2);
    let height = indices.len() / width;
    let mut buffer = vec![0u8; min_len.max(row_bytes * height)];

    for (y, row) in indices.chunks_exact(width).enumerate() {
        let out = &mut buffer[y * row_bytes..(y + 1) * row_bytes];
        for (x, &index) in row.iter().enumerate() {
            let nibble = index & 0x0F;
            if x % 2 == 0 {
                out[x / 2] |= nibble << 4;
            } else {
                out[x / 2] |= nibble;
            }
        }
    }
    buffer
}

/// Inverse of [`pack_nibbles`]: read `width * height` indices from the
/// start of `buffer`. Missing bytes read as index 0.
pub fn unpack_nibbles(buffer: &[u8], width: usize, height: usize) -> Vec<u8> {
    let row_bytes = width.div_ceil(2);
    let mut indices = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let byte = buffer.get(y * row_bytes + x / 2).copied().unwrap_or(0);
            indices.push(if x % 2 == 0 { byte >> 4 } else { byte & 0x0F });
        }
    }
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_nibble_first() {
        assert_eq!(pack_nibbles(&[1, 2, 3, 4], 4, 0), vec![0x12, 0x34]);
    }

    #[test]
    fn test_rows_are_contiguous() {
        let indices = [0xA, 0xB, 0xC, 0xD];
        assert_eq!(pack_nibbles(&indices, 2, 0), vec![0xAB, 0xCD]);
    }

    #[test]
    fn test_zero_filled_to_min_len() {
        let buffer = pack_nibbles(&[15, 15], 2, 8);
        assert_eq!(buffer, vec![0xFF, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_odd_width_pads_low_nibble() {
        let buffer = pack_nibbles(&[1, 2, 3, 4, 5, 6], 3, 0);
        assert_eq!(buffer, vec![0x12, 0x30, 0x45, 0x60]);
        assert_eq!(unpack_nibbles(&buffer, 3, 2), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_unpack_reverses_pack() {
        let indices: Vec<u8> = (0..256u32).map(|i| (i * 7 % 16) as u8).collect();
        let buffer = pack_nibbles(&indices, 16, 0);
        assert_eq!(buffer.len(), 128);
        assert_eq!(unpack_nibbles(&buffer, 16, 16), indices);
    }
}
