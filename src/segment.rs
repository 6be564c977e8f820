//! Named contiguous index ranges over a pixel array.

use heapless::{String, Vec};

/// Maximum length of a segment name in bytes.
pub const MAX_SEGMENT_NAME: usize = 16;

/// Inclusive pixel index range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Segment {
    pub start: usize,
    pub end: usize,
}

impl Segment {
    /// Number of pixels covered. 0 if `start > end`.
    pub fn len(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        self.end - self.start + 1
    }

    /// True only for an inverted range built by hand; tables never store one.
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.start..=self.end).contains(&index)
    }

    /// Iterates over the covered indices in ascending order.
    pub fn indices(&self) -> core::ops::RangeInclusive<usize> {
        self.start..=self.end
    }
}

/// A segment declared in static configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentSpec {
    pub name: &'static str,
    pub start: usize,
    pub end: usize,
}

/// Lookup table from segment name to range.
///
/// Segments are views; the table stores only ranges, never pixel data.
///
/// # Type Parameters
/// * `N` - Maximum number of segments
#[derive(Debug, Clone, Default)]
pub struct SegmentTable<const N: usize> {
    entries: Vec<(String<MAX_SEGMENT_NAME>, Segment), N>,
}

impl<const N: usize> SegmentTable<N> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Registers `name` as `start..=end` for an array of `num_pixels`.
    ///
    /// Ignored if `start > end`, either index is out of range, the name is
    /// longer than [`MAX_SEGMENT_NAME`], or the table is full. Re-defining a
    /// name overwrites its range. Returns whether the segment was stored.
    pub fn define(&mut self, name: &str, start: usize, end: usize, num_pixels: usize) -> bool {
        if start > end || end >= num_pixels {
            warn!("ignoring segment {}: {}..={} invalid", name, start, end);
            return false;
        }

        let segment = Segment { start, end };

        if let Some((_, existing)) = self.entries.iter_mut().find(|(n, _)| n.as_str() == name) {
            *existing = segment;
            return true;
        }

        let mut key = String::new();
        if key.push_str(name).is_err() {
            warn!("ignoring segment {}: name too long", name);
            return false;
        }

        if self.entries.push((key, segment)).is_err() {
            warn!("ignoring segment {}: table full", name);
            return false;
        }
        true
    }

    pub fn get(&self, name: &str) -> Option<Segment> {
        self.entries
            .iter()
            .find(|(n, _)| n.as_str() == name)
            .map(|(_, segment)| *segment)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, segment)` pairs in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Segment)> + '_ {
        self.entries.iter().map(|(n, s)| (n.as_str(), *s))
    }
}
