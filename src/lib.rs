#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`BoundedMeanBuffer`**: Fixed-capacity FIFO of sensor samples with a windowed mean
//! - **`TriggerDetector`**: Fires once when the smoothed value goes above a threshold, latched until reset
//! - **`PixelArray`**: Per-pixel color and brightness model of the strip
//! - **`SegmentTable`**: Named contiguous index ranges over the strip
//! - **`Canvas`**: Pixel model, segment table and strip driver kept in lockstep
//! - **`AnimationEngine`**: Blocking dropout-reveal and gradient-pulse animations
//! - **`ControlLoop`**: Ties everything together, one tick at a time
//! - **`ProximitySensor`**, **`LedStrip`**, **`RandomIndex`**: Traits to implement for your hardware
//!
//! Delays go through `embedded_hal::delay::DelayNs`. Colors are `Srgb<u8>`
//! from palette, the native format of addressable strips.

// Must come first so the logging macros are visible to every module.
mod fmt;

pub mod animation;
pub mod buffer;
pub mod canvas;
pub mod colors;
pub mod config;
pub mod control;
pub mod driver;
pub mod pixel;
pub mod segment;
pub mod trigger;
pub mod types;

pub use animation::{Animation, AnimationEngine};
pub use buffer::BoundedMeanBuffer;
pub use canvas::Canvas;
pub use colors::{BLUE, Color, GREEN, OFF, RED, WHITE};
pub use config::Config;
pub use control::{ControlLoop, StandardControlLoop, Tick};
pub use driver::{LedStrip, ProximitySensor, RandomIndex, RngIndex, SmartLedStrip};
pub use pixel::{Pixel, PixelArray};
pub use segment::{Segment, SegmentSpec, SegmentTable};
pub use trigger::{DetectorState, TriggerDetector};
pub use types::ConfigError;
