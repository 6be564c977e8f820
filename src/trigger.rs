//! Threshold detection over the smoothed signal.
//!
//! Provides [`TriggerDetector`], which turns a continuous moving average into
//! a single "fire" event per approach. A fired detector stays latched until
//! [`TriggerDetector::reset`] clears the smoothing buffer it was fed from.

use crate::buffer::BoundedMeanBuffer;

/// The current state of a trigger detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DetectorState {
    /// Waiting for the smoothed value to exceed the threshold.
    Idle,
    /// Fired. No further events until reset.
    Firing,
    /// Reset, but ignoring input for the given number of remaining updates.
    Cooldown(u32),
}

/// Emits a fire event when a smoothed value goes strictly above a threshold.
#[derive(Debug, Clone)]
pub struct TriggerDetector {
    threshold: f64,
    cooldown_ticks: u32,
    state: DetectorState,
    last_value: Option<f64>,
}

impl TriggerDetector {
    /// Creates an idle detector with no cooldown.
    pub fn new(threshold: f64) -> Self {
        Self::with_cooldown(threshold, 0)
    }

    /// Creates an idle detector that ignores `cooldown_ticks` updates after
    /// each reset.
    pub fn with_cooldown(threshold: f64, cooldown_ticks: u32) -> Self {
        Self {
            threshold,
            cooldown_ticks,
            state: DetectorState::Idle,
            last_value: None,
        }
    }

    /// Feeds one smoothed value. Returns true exactly when the detector fires.
    ///
    /// A value equal to the threshold does not fire.
    pub fn update(&mut self, smoothed: f64) -> bool {
        self.last_value = Some(smoothed);

        match self.state {
            DetectorState::Idle => {
                if smoothed > self.threshold {
                    self.state = DetectorState::Firing;
                    return true;
                }
                false
            }
            DetectorState::Firing => false,
            DetectorState::Cooldown(remaining) => {
                self.state = if remaining <= 1 {
                    DetectorState::Idle
                } else {
                    DetectorState::Cooldown(remaining - 1)
                };
                false
            }
        }
    }

    /// Re-arms the detector and clears the smoothing history.
    ///
    /// The buffer must be cleared together with the state change, otherwise
    /// the still-elevated mean would fire again on the next sample.
    pub fn reset<T: Copy + Into<f64>, const MAX: usize>(
        &mut self,
        buffer: &mut BoundedMeanBuffer<T, MAX>,
    ) {
        buffer.clear();
        self.last_value = None;
        self.state = if self.cooldown_ticks == 0 {
            DetectorState::Idle
        } else {
            DetectorState::Cooldown(self.cooldown_ticks)
        };
        debug!("detector reset, cooldown {} ticks", self.cooldown_ticks);
    }

    pub fn state(&self) -> DetectorState {
        self.state
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// The most recent value passed to [`update`](Self::update) since the
    /// last reset.
    pub fn last_value(&self) -> Option<f64> {
        self.last_value
    }
}
