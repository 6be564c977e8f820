//! In-memory model of the LED strip.

use crate::colors::{self, Color, WHITE};
use crate::types::ConfigError;
use heapless::Vec;

/// Color and brightness of one LED.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pixel {
    /// Full-brightness color.
    pub color: Color,

    /// Brightness scale, 0.0-1.0.
    pub brightness: f32,
}

impl Pixel {
    #[inline]
    pub fn new(color: Color, brightness: f32) -> Self {
        Self {
            color,
            brightness: brightness.clamp(0.0, 1.0),
        }
    }

    /// The color actually emitted: `color` scaled by `brightness`.
    #[inline]
    pub fn rendered(&self) -> Color {
        colors::scale(self.color, self.brightness)
    }
}

impl Default for Pixel {
    /// White at full brightness.
    fn default() -> Self {
        Self::new(WHITE, 1.0)
    }
}

impl core::fmt::Display for Pixel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "(({}, {}, {}), {})",
            self.color.red, self.color.green, self.color.blue, self.brightness
        )
    }
}

/// Fixed-length array of pixels.
///
/// Index writes outside `0..len()` are ignored so a bad segment or random
/// index can never take down the control loop.
///
/// # Type Parameters
/// * `MAX` - Storage size; the runtime pixel count may be smaller
#[derive(Debug, Clone)]
pub struct PixelArray<const MAX: usize> {
    pixels: Vec<Pixel, MAX>,
}

impl<const MAX: usize> PixelArray<MAX> {
    /// Creates `num_pixels` pixels, all white at full brightness.
    ///
    /// # Errors
    /// * `NoPixels` - `num_pixels` is 0
    /// * `TooManyPixels` - `num_pixels` is larger than `MAX`
    pub fn new(num_pixels: usize) -> Result<Self, ConfigError> {
        if num_pixels == 0 {
            return Err(ConfigError::NoPixels);
        }
        if num_pixels > MAX {
            return Err(ConfigError::TooManyPixels {
                requested: num_pixels,
                max: MAX,
            });
        }

        let mut pixels = Vec::new();
        pixels
            .resize(num_pixels, Pixel::default())
            .map_err(|_| ConfigError::TooManyPixels {
                requested: num_pixels,
                max: MAX,
            })?;

        Ok(Self { pixels })
    }

    /// Writes color and brightness at `index`. Returns false if out of range.
    pub fn set_pixel(&mut self, index: usize, color: Color, brightness: f32) -> bool {
        match self.pixels.get_mut(index) {
            Some(pixel) => {
                *pixel = Pixel::new(color, brightness);
                true
            }
            None => false,
        }
    }

    /// Sets every pixel to `color` at full brightness.
    pub fn fill(&mut self, color: Color) {
        for pixel in self.pixels.iter_mut() {
            *pixel = Pixel::new(color, 1.0);
        }
    }

    pub fn get(&self, index: usize) -> Option<&Pixel> {
        self.pixels.get(index)
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Always false; a pixel array has at least one pixel.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn as_slice(&self) -> &[Pixel] {
        &self.pixels
    }
}

impl<const MAX: usize> core::fmt::Display for PixelArray<MAX> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, pixel) in self.pixels.iter().enumerate() {
            if i > 0 {
                write!(f, " - ")?;
            }
            write!(f, "{}", pixel)?;
        }
        Ok(())
    }
}
