//! Fixed-capacity FIFO of sensor samples with a windowed mean.

use crate::types::ConfigError;
use heapless::Deque;

/// A bounded FIFO of numeric samples.
///
/// Holds at most `capacity` samples. Pushing onto a full buffer evicts the
/// single oldest sample first, so the mean always covers the most recent
/// `capacity` readings.
///
/// # Type Parameters
/// * `T` - Sample type (anything losslessly convertible to `f64`)
/// * `MAX` - Storage size; the runtime capacity may be smaller
#[derive(Debug, Clone)]
pub struct BoundedMeanBuffer<T, const MAX: usize> {
    samples: Deque<T, MAX>,
    capacity: usize,
}

impl<T: Copy + Into<f64>, const MAX: usize> BoundedMeanBuffer<T, MAX> {
    /// Creates an empty buffer holding at most `capacity` samples.
    ///
    /// # Errors
    /// * `ZeroCapacity` - `capacity` is 0
    /// * `CapacityExceeded` - `capacity` is larger than `MAX`
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if capacity > MAX {
            return Err(ConfigError::CapacityExceeded {
                requested: capacity,
                max: MAX,
            });
        }

        Ok(Self {
            samples: Deque::new(),
            capacity,
        })
    }

    /// Appends a sample, evicting the oldest one if the buffer is full.
    pub fn push(&mut self, sample: T) {
        if self.samples.len() >= self.capacity {
            self.samples.pop_front();
        }
        // Cannot fail: capacity <= MAX and we just made room.
        let _ = self.samples.push_back(sample);
    }

    /// Removes and returns the oldest sample.
    pub fn pop_oldest(&mut self) -> Option<T> {
        self.samples.pop_front()
    }

    /// Arithmetic mean of the current contents.
    ///
    /// Returns 0.0 when the buffer is empty.
    pub fn mean(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.samples.iter().map(|&s| s.into()).sum();
        sum / self.samples.len() as f64
    }

    /// Removes all samples. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns true once `capacity` samples are held.
    pub fn is_full(&self) -> bool {
        self.samples.len() == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates over samples oldest-first.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.samples.iter()
    }
}

impl<T: Copy + Into<f64> + core::fmt::Display, const MAX: usize> core::fmt::Display
    for BoundedMeanBuffer<T, MAX>
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, sample) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", sample)?;
        }
        Ok(())
    }
}
