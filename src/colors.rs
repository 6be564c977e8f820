//! Color constants and helpers.
//!
//! Pixels store 8-bit `Srgb<u8>` values, the native format of addressable
//! strips. HSV construction goes through palette's float types and is
//! quantized at the end.

use palette::{FromColor, Hsv, Srgb};

/// An 8-bit RGB color as written to a strip.
pub type Color = Srgb<u8>;

pub const OFF: Color = Srgb::new(0, 0, 0);
pub const WHITE: Color = Srgb::new(255, 255, 255);
pub const RED: Color = Srgb::new(255, 0, 0);
pub const GREEN: Color = Srgb::new(0, 255, 0);
pub const BLUE: Color = Srgb::new(0, 0, 255);

/// Multiplies each channel by `factor` and truncates.
///
/// `factor` is clamped to 0.0-1.0, so scaling can only dim a color.
#[inline]
pub fn scale(color: Color, factor: f32) -> Color {
    let factor = factor.clamp(0.0, 1.0);
    Srgb::new(
        (color.red as f32 * factor) as u8,
        (color.green as f32 * factor) as u8,
        (color.blue as f32 * factor) as u8,
    )
}

/// Multiplies each channel by `numerator / denominator` and truncates.
///
/// Computed in integers, so the result is exact. `numerator` is capped at
/// `denominator`; a zero denominator gives [`OFF`].
#[inline]
pub fn scale_fraction(color: Color, numerator: u32, denominator: u32) -> Color {
    if denominator == 0 {
        return OFF;
    }
    let numerator = u64::from(numerator.min(denominator));
    let denominator = u64::from(denominator);
    let channel = |c: u8| (u64::from(c) * numerator / denominator) as u8;
    Srgb::new(channel(color.red), channel(color.green), channel(color.blue))
}

/// Creates a color from HSV (Hue, Saturation, Value) components.
#[inline]
pub fn hsv(hue: f32, saturation: f32, value: f32) -> Color {
    let hsv = Hsv::new(hue, saturation, value);
    Srgb::<f32>::from_color(hsv).into_format()
}
