pub const BYTES_PER_PIXEL: usize = 4;

/// Exchanges bits 0-7 with bits 16-23, keeping alpha and green in place.
/// An RGBA pixel read as a little-endian word becomes ARGB.
pub fn swap_red_blue(pixel: u32) -> u32 {
    (pixel & 0xFF00_FF00) | ((pixel >> 16) & 0xFF) | ((pixel & 0xFF) << 16)
}

/// Transformed words of every complete 4-byte group in `raw`.
pub fn pixel_words(raw: &[u8]) -> impl Iterator<Item = u32> + '_ {
    raw.chunks_exact(BYTES_PER_PIXEL).map(|pixel| {
        swap_red_blue(u32::from_le_bytes([pixel[0], pixel[1], pixel[2], pixel[3]]))
    })
}
