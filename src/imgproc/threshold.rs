use crate::image::Rgba;

/// Pixels whose channel sum is above this become foreground (bit set).
/// Compared against the sum of three 8-bit channels, i.e. 0..=765.
pub const THRESHOLD: u32 = 128;

// alpha is ignored
pub fn brightness(px: Rgba) -> u32 {
    px.red() as u32 + px.green() as u32 + px.blue() as u32
}

pub fn is_foreground(px: Rgba) -> bool {
    brightness(px) > THRESHOLD
}
