//! Pixel model bound to a strip driver.
//!
//! [`Canvas`] keeps the [`PixelArray`] and the hardware buffer in lockstep:
//! every model write is mirrored to the [`LedStrip`] with the pixel's
//! brightness already applied, and nothing reaches the LEDs until
//! [`Canvas::show`].

use crate::colors::{self, Color};
use crate::driver::LedStrip;
use crate::pixel::PixelArray;
use crate::segment::{Segment, SegmentTable};
use crate::types::ConfigError;

/// A strip driver together with its pixel model and segment table.
///
/// # Type Parameters
/// * `L` - LED strip implementation
/// * `P` - Maximum number of pixels
/// * `S` - Maximum number of named segments
pub struct Canvas<L: LedStrip, const P: usize, const S: usize> {
    strip: L,
    pixels: PixelArray<P>,
    segments: SegmentTable<S>,
}

impl<L: LedStrip, const P: usize, const S: usize> Canvas<L, P, S> {
    /// Creates a canvas of `num_pixels` over `strip`.
    ///
    /// The model starts white at full brightness; the strip is not touched.
    pub fn new(strip: L, num_pixels: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            strip,
            pixels: PixelArray::new(num_pixels)?,
            segments: SegmentTable::new(),
        })
    }

    /// Writes one pixel. Out-of-range indices are ignored.
    pub fn set_pixel(&mut self, index: usize, color: Color, brightness: f32) {
        if self.pixels.set_pixel(index, color, brightness) {
            if let Some(pixel) = self.pixels.get(index) {
                self.strip.set_pixel(index, pixel.rendered());
            }
        } else {
            trace!("ignoring write to pixel {}", index);
        }
    }

    /// Writes one pixel at brightness `numerator / denominator`.
    ///
    /// The strip receives exactly `channel * numerator / denominator`,
    /// truncated. Out-of-range indices are ignored.
    pub fn set_pixel_fraction(&mut self, index: usize, color: Color, numerator: u32, denominator: u32) {
        let brightness = if denominator == 0 {
            0.0
        } else {
            numerator as f32 / denominator as f32
        };
        if self.pixels.set_pixel(index, color, brightness) {
            self.strip
                .set_pixel(index, colors::scale_fraction(color, numerator, denominator));
        } else {
            trace!("ignoring write to pixel {}", index);
        }
    }

    /// Sets every pixel to `color` at full brightness.
    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
        self.strip.fill(color);
    }

    /// Flushes the buffered pixels to the hardware.
    pub fn show(&mut self) {
        self.strip.show();
    }

    pub fn set_global_brightness(&mut self, brightness: u8) {
        self.strip.set_brightness(brightness);
    }

    /// Registers a named segment; invalid ranges are ignored.
    pub fn define_segment(&mut self, name: &str, start: usize, end: usize) -> bool {
        self.segments.define(name, start, end, self.pixels.len())
    }

    /// Colors every pixel of the named segment and flushes once.
    ///
    /// Does nothing if the segment is undefined.
    pub fn set_segment_color(&mut self, name: &str, color: Color) {
        let Some(segment) = self.segments.get(name) else {
            debug!("segment {} not defined", name);
            return;
        };

        for index in segment.indices() {
            self.set_pixel(index, color, 1.0);
        }
        self.show();
    }

    pub fn segment(&self, name: &str) -> Option<Segment> {
        self.segments.get(name)
    }

    /// The whole strip as a segment.
    pub fn full_range(&self) -> Segment {
        Segment {
            start: 0,
            end: self.pixels.len() - 1,
        }
    }

    pub fn num_pixels(&self) -> usize {
        self.pixels.len()
    }

    pub fn pixels(&self) -> &PixelArray<P> {
        &self.pixels
    }

    pub fn segments(&self) -> &SegmentTable<S> {
        &self.segments
    }

    pub fn strip(&self) -> &L {
        &self.strip
    }

    pub fn strip_mut(&mut self) -> &mut L {
        &mut self.strip
    }

    pub fn into_strip(self) -> L {
        self.strip
    }
}
