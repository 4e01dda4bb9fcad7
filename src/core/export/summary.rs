//! Export summary and reporting
//!
//! This module defines structures for tracking and reporting export results.

use super::job::{ExportJob, ExportPlan};
use crate::domain::{ExportMode, Result};
use std::path::PathBuf;
use std::time::Duration;

/// A file written by the run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    /// 1-based track ordinal
    pub track: usize,

    /// Region name
    pub region: String,

    /// Written file
    pub path: PathBuf,
}

/// Summary of an export run
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Document title
    pub document: String,

    /// Naming and metadata policy
    pub mode: ExportMode,

    /// Renderer display name
    pub renderer: String,

    /// Template name
    pub preset: String,

    /// Output directory
    pub output_dir: PathBuf,

    /// Number of files the plan called for
    pub planned: usize,

    /// Files written, in render order
    pub files: Vec<ExportedFile>,

    /// Pre-existing files deleted before rendering
    pub replaced: usize,

    /// Zero-length markers left out
    pub markers_skipped: usize,

    /// Nothing was written
    pub dry_run: bool,

    /// The output directory came from the chooser
    pub chosen_interactively: bool,

    /// Checksum manifest written after the run
    pub manifest: Option<PathBuf>,

    /// Why the manifest could not be written; the exported files are unaffected
    pub manifest_error: Option<String>,

    /// Duration of the run
    pub duration: Duration,
}

impl ExportSummary {
    /// Empty summary for a resolved plan
    pub fn from_plan(plan: &ExportPlan, dry_run: bool) -> Self {
        Self {
            document: plan.document.clone(),
            mode: plan.mode,
            renderer: plan.binding.renderer().name().to_string(),
            preset: plan.binding.preset().name.clone(),
            output_dir: plan.directory.path.clone(),
            planned: plan.jobs.len(),
            files: Vec::new(),
            replaced: 0,
            markers_skipped: plan.markers_skipped,
            dry_run,
            chosen_interactively: plan.directory.chosen_interactively,
            manifest: None,
            manifest_error: None,
            duration: Duration::from_secs(0),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Record a rendered job
    pub fn record(&mut self, job: &ExportJob) {
        self.files.push(ExportedFile {
            track: job.track,
            region: job.region.name.clone(),
            path: job.path.clone(),
        });
    }

    /// Every planned file was written
    pub fn is_complete(&self) -> bool {
        !self.dry_run && self.files.len() == self.planned
    }

    /// The "files are saving to" notification is due
    ///
    /// Skipped for dry runs and when the user just picked the folder.
    pub fn should_notify(&self) -> bool {
        !self.dry_run && !self.chosen_interactively
    }

    /// Text of the completion notification
    pub fn notification_message(&self) -> String {
        format!("Files are saving to: {}", self.output_dir.display())
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            document = %self.document,
            mode = %self.mode,
            renderer = %self.renderer,
            preset = %self.preset,
            output_dir = %self.output_dir.display(),
            planned = self.planned,
            written = self.files.len(),
            replaced = self.replaced,
            markers_skipped = self.markers_skipped,
            dry_run = self.dry_run,
            duration_ms = self.duration.as_millis() as u64,
            "Region export completed"
        );

        if let Some(manifest) = &self.manifest {
            tracing::info!(manifest = %manifest.display(), "Manifest written");
        }
        if let Some(error) = &self.manifest_error {
            tracing::warn!(error = %error, "Export finished without a manifest");
        }
    }
}

/// Short outcome string of a run: `None` on success, the diagnostic otherwise
pub fn outcome(result: &Result<ExportSummary>) -> Option<String> {
    result.as_ref().err().map(|e| e.to_string())
}
