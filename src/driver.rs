//! Hardware abstraction traits and ready-made adapters.
//!
//! The control loop talks to the outside world through three seams:
//! [`ProximitySensor`] for readings, [`LedStrip`] for output and
//! [`RandomIndex`] for the dropout animation. Delays use
//! `embedded_hal::delay::DelayNs` directly.

use crate::colors::{Color, OFF};
use rand::{Rng, RngCore};
use smart_leds::{RGB8, SmartLedsWrite, brightness};

/// Trait for abstracting an analog proximity/distance sensor.
pub trait ProximitySensor {
    /// Takes one raw reading. Implementations handle conversion timing and
    /// any hardware errors internally; this method cannot fail.
    fn read_raw(&mut self) -> u16;
}

/// Trait for abstracting an addressable LED strip.
///
/// Writes are buffered by the implementation until [`show`](Self::show).
pub trait LedStrip {
    /// Sets one pixel in the output buffer.
    fn set_pixel(&mut self, index: usize, color: Color);

    /// Sets every pixel in the output buffer.
    fn fill(&mut self, color: Color);

    /// Pushes the buffered pixels to the hardware.
    fn show(&mut self);

    /// Sets the global brightness scale applied on output (0-255).
    fn set_brightness(&mut self, brightness: u8);
}

/// Source of uniformly distributed pixel indices.
pub trait RandomIndex {
    /// Returns an index in `0..bound`. `bound` is never 0.
    fn next_index(&mut self, bound: usize) -> usize;
}

/// [`RandomIndex`] backed by any `rand` generator.
///
/// ```ignore
/// use rand::{SeedableRng, rngs::SmallRng};
/// let rng = RngIndex(SmallRng::seed_from_u64(seed));
/// ```
#[derive(Debug, Clone)]
pub struct RngIndex<R>(pub R);

impl<R: RngCore> RandomIndex for RngIndex<R> {
    fn next_index(&mut self, bound: usize) -> usize {
        self.0.random_range(0..bound)
    }
}

/// [`LedStrip`] implementation over a `smart-leds` writer (WS2812, SK6812, ...).
///
/// Keeps one frame of `N` pixels in memory and writes it on `show`, scaled by
/// the global brightness. Writer errors are dropped; the next `show` retries
/// with the full frame anyway.
///
/// `N` is the physical frame length and should equal the canvas pixel count
/// (`Config::num_pixels`). With a larger `N`, `fill` also lights the pixels
/// past the configured count. With a smaller `N`, writes to indices `N..` are
/// dropped.
pub struct SmartLedStrip<W, const N: usize> {
    writer: W,
    frame: [RGB8; N],
    brightness: u8,
}

impl<W, const N: usize> SmartLedStrip<W, N>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    /// Wraps `writer` with an all-off frame at full brightness.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            frame: [to_rgb8(OFF); N],
            brightness: u8::MAX,
        }
    }

    /// The buffered frame, before brightness scaling.
    pub fn frame(&self) -> &[RGB8; N] {
        &self.frame
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W, const N: usize> LedStrip for SmartLedStrip<W, N>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    fn set_pixel(&mut self, index: usize, color: Color) {
        if let Some(slot) = self.frame.get_mut(index) {
            *slot = to_rgb8(color);
        }
    }

    fn fill(&mut self, color: Color) {
        self.frame = [to_rgb8(color); N];
    }

    fn show(&mut self) {
        let _ = self
            .writer
            .write(brightness(self.frame.iter().copied(), self.brightness));
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }
}

#[inline]
fn to_rgb8(color: Color) -> RGB8 {
    RGB8::new(color.red, color.green, color.blue)
}
