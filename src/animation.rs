//! Blocking LED animations played when the detector fires.
//!
//! Every frame is written to the [`Canvas`], flushed with a single `show`,
//! then followed by a fixed delay. Animations always run to completion.

use crate::canvas::Canvas;
use crate::colors::{Color, OFF};
use crate::driver::{LedStrip, RandomIndex};
use crate::segment::Segment;
use embedded_hal::delay::DelayNs;

/// Which animation to play on trigger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Animation {
    /// Knock out one random pixel per step, then restore the whole strip.
    ///
    /// Indices are drawn independently, so the same pixel may be picked more
    /// than once in a run.
    Dropout {
        /// Number of dropout frames.
        steps: u32,
        /// Color the strip is filled with after each dropout.
        reveal: Color,
    },

    /// Ramp brightness up over `steps` frames, then back down over `steps`.
    Pulse {
        /// Full-brightness color.
        color: Color,
        /// Frames per ramp.
        steps: u32,
        /// Named segment to pulse, or the whole strip when `None`.
        segment: Option<&'static str>,
    },
}

impl Animation {
    /// Number of frames per ramp or dropout run.
    pub fn steps(&self) -> u32 {
        match self {
            Animation::Dropout { steps, .. } | Animation::Pulse { steps, .. } => *steps,
        }
    }
}

/// Renders animations onto a canvas with a fixed per-frame delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationEngine {
    step_delay_ms: u32,
}

impl AnimationEngine {
    pub fn new(step_delay_ms: u32) -> Self {
        Self { step_delay_ms }
    }

    pub fn step_delay_ms(&self) -> u32 {
        self.step_delay_ms
    }

    /// Plays `animation` to completion.
    ///
    /// A pulse targeting an undefined segment is skipped.
    pub fn play<L, D, R, const P: usize, const S: usize>(
        &self,
        animation: &Animation,
        canvas: &mut Canvas<L, P, S>,
        delay: &mut D,
        rng: &mut R,
    ) where
        L: LedStrip,
        D: DelayNs,
        R: RandomIndex,
    {
        match *animation {
            Animation::Dropout { steps, reveal } => {
                self.dropout_reveal(canvas, delay, rng, steps, reveal);
            }
            Animation::Pulse {
                color,
                steps,
                segment,
            } => {
                let range = match segment {
                    None => canvas.full_range(),
                    Some(name) => match canvas.segment(name) {
                        Some(range) => range,
                        None => {
                            warn!("pulse skipped: segment {} not defined", name);
                            return;
                        }
                    },
                };
                self.gradient_pulse(canvas, delay, color, steps, range);
            }
        }
    }

    /// Randomized dropout reveal.
    ///
    /// Each step turns one random pixel off, flushes, waits, then fills the
    /// strip with `reveal` and flushes again.
    pub fn dropout_reveal<L, D, R, const P: usize, const S: usize>(
        &self,
        canvas: &mut Canvas<L, P, S>,
        delay: &mut D,
        rng: &mut R,
        steps: u32,
        reveal: Color,
    ) where
        L: LedStrip,
        D: DelayNs,
        R: RandomIndex,
    {
        debug!("dropout reveal: {} steps", steps);
        let num_pixels = canvas.num_pixels();

        for _ in 0..steps {
            let index = rng.next_index(num_pixels);
            canvas.set_pixel(index, OFF, 1.0);
            canvas.show();
            delay.delay_ms(self.step_delay_ms);
            canvas.fill(reveal);
            canvas.show();
        }
        debug!("dropout reveal finished");
    }

    /// Brightness gradient pulse over `range`.
    ///
    /// Ramp-up frame `i` uses scale `i / steps`, ramp-down frame `i` uses
    /// `(steps - i) / steps`, for `i` in `0..steps`. Channels are scaled in
    /// integers and truncated.
    pub fn gradient_pulse<L, D, const P: usize, const S: usize>(
        &self,
        canvas: &mut Canvas<L, P, S>,
        delay: &mut D,
        color: Color,
        steps: u32,
        range: Segment,
    ) where
        L: LedStrip,
        D: DelayNs,
    {
        debug!("gradient pulse: {} steps over {}..={}", steps, range.start, range.end);

        let ramp_up = 0..steps;
        let ramp_down = (0..steps).map(|i| steps - i);

        for numerator in ramp_up.chain(ramp_down) {
            for index in range.indices() {
                canvas.set_pixel_fraction(index, color, numerator, steps);
            }
            canvas.show();
            delay.delay_ms(self.step_delay_ms);
        }
        debug!("gradient pulse finished");
    }
}
