//! Per-track metadata handed to the renderer

use serde::{Deserialize, Serialize};

/// Title and track number embedded into one rendered file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackMetadata {
    /// Track title, taken from the region name
    pub title: String,

    /// 1-based ordinal among exportable regions
    pub track_number: usize,

    /// Number of exportable regions in the document
    pub track_total: usize,
}

impl TrackMetadata {
    /// Creates track metadata
    pub fn new(title: impl Into<String>, track_number: usize, track_total: usize) -> Self {
        Self {
            title: title.into(),
            track_number,
            track_total,
        }
    }

    /// Track number in `N/M` form
    ///
    /// ```
    /// use regionsplit::domain::TrackMetadata;
    ///
    /// assert_eq!(TrackMetadata::new("B", 2, 2).track_no(), "2/2");
    /// ```
    pub fn track_no(&self) -> String {
        format!("{}/{}", self.track_number, self.track_total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_no_is_not_padded() {
        assert_eq!(TrackMetadata::new("Intro", 3, 12).track_no(), "3/12");
    }
}
