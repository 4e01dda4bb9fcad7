//! Region enumeration

use crate::adapters::host::Document;
use crate::domain::{Region, RegionSplitError, Result};

/// Exportable regions of a document in stored order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportableRegions<'a> {
    regions: Vec<&'a Region>,
    markers_skipped: usize,
}

impl<'a> ExportableRegions<'a> {
    /// Regions with a positive length; markers are dropped without consuming an index
    ///
    /// # Errors
    ///
    /// Returns [`RegionSplitError::NoRegions`] when the document has no markers or
    /// regions at all. A document holding only markers passes and yields nothing.
    pub fn from_document(document: &'a dyn Document) -> Result<Self> {
        Self::from_slice(document.regions())
    }

    /// Same as [`ExportableRegions::from_document`] over a plain slice
    pub fn from_slice(all: &'a [Region]) -> Result<Self> {
        if all.is_empty() {
            return Err(RegionSplitError::NoRegions);
        }

        let regions: Vec<&Region> = all.iter().filter(|r| r.is_exportable()).collect();
        let markers_skipped = all.len() - regions.len();

        Ok(Self {
            regions,
            markers_skipped,
        })
    }

    /// Number of files the run will produce; the `M` in `N/M` track numbers
    pub fn total(&self) -> usize {
        self.regions.len()
    }

    /// Zero-length entries that were dropped
    pub fn markers_skipped(&self) -> usize {
        self.markers_skipped
    }

    /// Regions with their 1-based track ordinal
    pub fn iter(&self) -> impl Iterator<Item = (usize, &'a Region)> + '_ {
        self.regions.iter().enumerate().map(|(i, r)| (i + 1, *r))
    }

    /// Returns true when nothing will be exported
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers_do_not_consume_ordinals() {
        let all = vec![
            Region::new("A", 0, 10),
            Region::new("", 10, 0),
            Region::new("B", 20, 5),
        ];
        let regions = ExportableRegions::from_slice(&all).unwrap();

        assert_eq!(regions.total(), 2);
        assert_eq!(regions.markers_skipped(), 1);
        let numbered: Vec<(usize, &str)> =
            regions.iter().map(|(i, r)| (i, r.name.as_str())).collect();
        assert_eq!(numbered, vec![(1, "A"), (2, "B")]);
    }

    #[test]
    fn test_stored_order_is_kept() {
        let all = vec![Region::new("Late", 900, 10), Region::new("Early", 0, 10)];
        let regions = ExportableRegions::from_slice(&all).unwrap();
        let names: Vec<&str> = regions.iter().map(|(_, r)| r.name.as_str()).collect();
        assert_eq!(names, vec!["Late", "Early"]);
    }

    #[test]
    fn test_empty_document_has_no_markers() {
        let err = ExportableRegions::from_slice(&[]).unwrap_err();
        assert!(matches!(err, RegionSplitError::NoRegions));
    }

    #[test]
    fn test_markers_only_exports_nothing() {
        let all = vec![Region::new("cue", 5, 0)];
        let regions = ExportableRegions::from_slice(&all).unwrap();
        assert!(regions.is_empty());
        assert_eq!(regions.markers_skipped(), 1);
    }
}
