//! The sample, smooth, detect, animate, reset loop.
//!
//! [`ControlLoop`] owns every piece of mutable state: the smoothing buffer,
//! the detector, the canvas and the drivers. There is a single thread of
//! control; while an animation plays no samples are taken.

use crate::animation::{Animation, AnimationEngine};
use crate::buffer::BoundedMeanBuffer;
use crate::canvas::Canvas;
use crate::colors::OFF;
use crate::config::Config;
use crate::driver::{LedStrip, ProximitySensor, RandomIndex};
use crate::trigger::TriggerDetector;
use crate::types::ConfigError;
use embedded_hal::delay::DelayNs;

/// Outcome of one loop iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tick {
    /// Sample taken, no trigger.
    Sampled {
        /// Smoothed value after this sample.
        mean: f64,
    },
    /// Trigger fired; the animation ran and the state was reset.
    Fired {
        /// Smoothed value that caused the trigger.
        mean: f64,
    },
}

/// Reactive lighting controller.
///
/// # Type Parameters
/// * `Se` - Proximity sensor
/// * `L` - LED strip
/// * `D` - Blocking delay
/// * `R` - Random index source for the dropout animation
/// * `W` - Maximum smoothing window
/// * `P` - Maximum number of pixels
/// * `S` - Maximum number of named segments
pub struct ControlLoop<Se, L, D, R, const W: usize, const P: usize, const S: usize>
where
    Se: ProximitySensor,
    L: LedStrip,
    D: DelayNs,
    R: RandomIndex,
{
    sensor: Se,
    delay: D,
    rng: R,
    canvas: Canvas<L, P, S>,
    buffer: BoundedMeanBuffer<u16, W>,
    detector: TriggerDetector,
    engine: AnimationEngine,
    animation: Animation,
    raw_divisor: u16,
    sample_interval_ms: u32,
}

/// Control loop sized for the default 32-pixel strip with headroom.
pub type StandardControlLoop<Se, L, D, R> = ControlLoop<Se, L, D, R, 32, 64, 8>;

impl<Se, L, D, R, const W: usize, const P: usize, const S: usize> ControlLoop<Se, L, D, R, W, P, S>
where
    Se: ProximitySensor,
    L: LedStrip,
    D: DelayNs,
    R: RandomIndex,
{
    /// Validates `config`, builds all components and blanks the strip.
    ///
    /// Startup sets the global brightness, fills the strip with off and
    /// flushes, then registers the configured segments.
    ///
    /// # Errors
    /// Any [`ConfigError`] from validation or from sizing the buffer and
    /// pixel storage against `W` and `P`.
    pub fn new(config: &Config, sensor: Se, strip: L, delay: D, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let buffer = BoundedMeanBuffer::new(config.window_size)?;
        let mut canvas = Canvas::new(strip, config.num_pixels)?;

        canvas.set_global_brightness(config.global_brightness);
        canvas.fill(OFF);
        canvas.show();

        for spec in config.segments {
            canvas.define_segment(spec.name, spec.start, spec.end);
        }

        info!(
            "control loop ready: {} pixels, window {}, threshold {}",
            config.num_pixels, config.window_size, config.threshold
        );

        Ok(Self {
            sensor,
            delay,
            rng,
            canvas,
            buffer,
            detector: TriggerDetector::with_cooldown(config.threshold, config.cooldown_ticks),
            engine: AnimationEngine::new(config.step_delay_ms),
            animation: config.animation,
            raw_divisor: config.raw_divisor,
            sample_interval_ms: config.sample_interval_ms,
        })
    }

    /// Runs one iteration: sample, smooth, detect, maybe animate, sleep.
    pub fn tick(&mut self) -> Tick {
        let sample = self.sensor.read_raw() / self.raw_divisor;
        self.buffer.push(sample);
        let mean = self.buffer.mean();
        trace!("sample {} mean {}", sample, mean);

        let outcome = if self.detector.update(mean) {
            info!("triggered at mean {}", mean);
            self.engine
                .play(&self.animation, &mut self.canvas, &mut self.delay, &mut self.rng);
            self.reset();
            Tick::Fired { mean }
        } else {
            Tick::Sampled { mean }
        };

        self.delay.delay_ms(self.sample_interval_ms);
        outcome
    }

    /// Loops forever.
    pub fn run(&mut self) -> ! {
        loop {
            self.tick();
        }
    }

    /// Clears the smoothing history, re-arms the detector and blanks the strip.
    fn reset(&mut self) {
        self.detector.reset(&mut self.buffer);
        self.canvas.fill(OFF);
        self.canvas.show();
    }

    pub fn buffer(&self) -> &BoundedMeanBuffer<u16, W> {
        &self.buffer
    }

    pub fn detector(&self) -> &TriggerDetector {
        &self.detector
    }

    pub fn canvas(&self) -> &Canvas<L, P, S> {
        &self.canvas
    }

    /// Mutable canvas access, e.g. for coloring segments between ticks.
    pub fn canvas_mut(&mut self) -> &mut Canvas<L, P, S> {
        &mut self.canvas
    }

    pub fn animation(&self) -> &Animation {
        &self.animation
    }
}
