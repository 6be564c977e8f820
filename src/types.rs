//! Shared error type for construction-time validation.

/// Configuration errors, raised only while constructing components.
///
/// Once a [`ControlLoop`](crate::ControlLoop) is built nothing in the steady
/// state returns an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Smoothing buffer capacity of zero.
    ZeroCapacity,

    /// Smoothing buffer capacity above the compile-time maximum.
    CapacityExceeded {
        /// Requested capacity.
        requested: usize,
        /// Maximum supported by the buffer's storage.
        max: usize,
    },

    /// Pixel array of length zero.
    NoPixels,

    /// Pixel count above the compile-time maximum.
    TooManyPixels {
        /// Requested pixel count.
        requested: usize,
        /// Maximum supported by the pixel storage.
        max: usize,
    },

    /// Raw sensor divisor of zero.
    ZeroRawDivisor,

    /// Animation configured with zero steps.
    ZeroAnimationSteps,

    /// Threshold is NaN or infinite.
    InvalidThreshold,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroCapacity => {
                write!(f, "smoothing buffer capacity must be at least 1")
            }
            ConfigError::CapacityExceeded { requested, max } => {
                write!(
                    f,
                    "smoothing buffer capacity {} exceeds maximum of {}",
                    requested, max
                )
            }
            ConfigError::NoPixels => {
                write!(f, "pixel array must have at least one pixel")
            }
            ConfigError::TooManyPixels { requested, max } => {
                write!(f, "pixel count {} exceeds maximum of {}", requested, max)
            }
            ConfigError::ZeroRawDivisor => {
                write!(f, "raw sensor divisor must be non-zero")
            }
            ConfigError::ZeroAnimationSteps => {
                write!(f, "animation must have at least one step")
            }
            ConfigError::InvalidThreshold => {
                write!(f, "activation threshold must be a finite number")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
