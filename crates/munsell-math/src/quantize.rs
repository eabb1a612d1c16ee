//! 8-bit output of sampled colors.

use crate::saturate;

/// Truncates a color to 8 bits per channel.
///
/// Channels are clamped to [0, 1] and then scaled by 255 and floored.
///
/// ```rust
/// use munsell_math::quantize_rgb8;
///
/// assert_eq!(quantize_rgb8([0.0, 0.5, 1.0]), [0, 127, 255]);
/// ```
#[inline]
pub fn quantize_rgb8(rgb: [f32; 3]) -> [u8; 3] {
    rgb.map(|c| (saturate(c) * 255.0) as u8)
}

/// Formats a color as `#rrggbb`.
pub fn hex_rgb8(rgb: [f32; 3]) -> String {
    let [r, g, b] = quantize_rgb8(rgb);
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}
