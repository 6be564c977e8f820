//! Startup configuration.

use crate::animation::Animation;
use crate::colors::WHITE;
use crate::segment::SegmentSpec;
use crate::types::ConfigError;

/// Hardware constants and tuning heuristics, fixed at startup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Number of LEDs on the strip.
    pub num_pixels: usize,

    /// GPIO driving the strip data line. Informational; the board setup
    /// code wires the driver.
    pub led_pin: u8,

    /// ADC pin of the proximity sensor. Informational, as `led_pin`.
    pub sensor_pin: u8,

    /// Raw readings are integer-divided by this before smoothing.
    pub raw_divisor: u16,

    /// The smoothed value must be strictly above this to fire.
    pub threshold: f64,

    /// Number of recent samples averaged.
    pub window_size: usize,

    /// Delay at the end of every loop iteration.
    pub sample_interval_ms: u32,

    /// Delay after every animation frame.
    pub step_delay_ms: u32,

    /// Global strip brightness (0-255).
    pub global_brightness: u8,

    /// Loop iterations ignored after each animation. 0 disables the cooldown.
    pub cooldown_ticks: u32,

    /// Animation played on trigger.
    pub animation: Animation,

    /// Named segments registered at startup.
    pub segments: &'static [SegmentSpec],
}

impl Config {
    pub const DEFAULT: Config = Config {
        num_pixels: 32,
        led_pin: 15,
        sensor_pin: 28,
        raw_divisor: 300,
        threshold: 50.0,
        window_size: 10,
        sample_interval_ms: 100,
        step_delay_ms: 200,
        global_brightness: 10,
        cooldown_ticks: 0,
        animation: Animation::Dropout {
            steps: 30,
            reveal: WHITE,
        },
        segments: &[],
    };

    /// Checks the values that would make construction fail.
    ///
    /// Capacity limits that depend on storage sizes are checked by the
    /// components themselves.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_pixels == 0 {
            return Err(ConfigError::NoPixels);
        }
        if self.window_size == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.raw_divisor == 0 {
            return Err(ConfigError::ZeroRawDivisor);
        }
        if !self.threshold.is_finite() {
            return Err(ConfigError::InvalidThreshold);
        }
        if self.animation.steps() == 0 {
            return Err(ConfigError::ZeroAnimationSteps);
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}
