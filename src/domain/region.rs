//! Regions and sample ranges
//!
//! A region is an immutable, named interval of a document measured in sample frames.
//! Zero-length entries are plain markers and are never exported.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Half-open interval of sample frames `[start, start + length)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleRange {
    /// First sample frame
    pub start: u64,

    /// Number of sample frames
    pub length: u64,
}

impl SampleRange {
    /// Creates a new range
    pub fn new(start: u64, length: u64) -> Self {
        Self { start, length }
    }

    /// One past the last sample frame
    pub fn end(&self) -> u64 {
        self.start.saturating_add(self.length)
    }

    /// Returns true when the range covers no samples
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

impl fmt::Display for SampleRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end())
    }
}

/// A named region or marker of a document
///
/// # Examples
///
/// ```
/// use regionsplit::domain::Region;
///
/// let region = Region::new("Intro", 0, 44_100);
/// assert!(region.is_exportable());
///
/// let marker = Region::new("Cue", 88_200, 0);
/// assert!(!marker.is_exportable());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Display name, possibly empty
    #[serde(default)]
    pub name: String,

    /// Start offset in sample frames
    pub start: u64,

    /// Duration in sample frames (0 for a marker)
    #[serde(default)]
    pub length: u64,
}

impl Region {
    /// Creates a new region
    pub fn new(name: impl Into<String>, start: u64, length: u64) -> Self {
        Self {
            name: name.into(),
            start,
            length,
        }
    }

    /// Only regions with a positive length produce an output file
    pub fn is_exportable(&self) -> bool {
        self.length > 0
    }

    /// The sample range covered by this region
    pub fn range(&self) -> SampleRange {
        SampleRange::new(self.start, self.length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_is_not_exportable() {
        assert!(!Region::new("", 10, 0).is_exportable());
        assert!(Region::new("", 10, 1).is_exportable());
    }

    #[test]
    fn test_range_end() {
        let range = Region::new("A", 100, 50).range();
        assert_eq!(range.end(), 150);
        assert_eq!(range.to_string(), "100..150");
        assert!(!range.is_empty());
    }

    #[test]
    fn test_range_end_saturates() {
        let range = SampleRange::new(u64::MAX - 1, 10);
        assert_eq!(range.end(), u64::MAX);
    }

    #[test]
    fn test_region_deserialize_defaults() {
        let region: Region = toml::from_str("start = 5").unwrap();
        assert_eq!(region.name, "");
        assert_eq!(region.length, 0);
    }
}
