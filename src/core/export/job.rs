//! Planned export jobs

use super::resolver::{EncoderBinding, OutputDirectory};
use crate::domain::{ExportMode, Region, TrackMetadata};
use std::path::PathBuf;

/// One region to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportJob {
    /// 1-based ordinal among exportable regions
    pub track: usize,

    /// Region to render
    pub region: Region,

    /// Sanitized file name
    pub file_name: String,

    /// Output directory joined with the file name
    pub path: PathBuf,

    /// Metadata embedded into this file (titled mode only)
    pub metadata: Option<TrackMetadata>,
}

/// Everything resolved before the first render
#[derive(Debug, Clone)]
pub struct ExportPlan {
    /// Document title
    pub document: String,

    /// Mode the names were composed with
    pub mode: ExportMode,

    /// Renderer and template
    pub binding: EncoderBinding,

    /// Output directory
    pub directory: OutputDirectory,

    /// Jobs in render order
    pub jobs: Vec<ExportJob>,

    /// Zero-length entries left out
    pub markers_skipped: usize,
}
