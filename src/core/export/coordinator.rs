//! Export coordinator - main orchestrator for the export process
//!
//! This module runs one export: it resolves the directory and encoder, composes the
//! job list, renders every region in order and reports the outcome to the status sink.

use crate::adapters::console::{ConsoleStatus, NoPrompter};
use crate::adapters::ffmpeg::registry_from_config;
use crate::adapters::fs::StdFileSystem;
use crate::adapters::host::{
    Document, DocumentProvider, FileSystem, FilenameSanitizer, Prompter, RenderRequest,
    RendererRegistry, StatusSink,
};
use crate::adapters::sanitize::DefaultSanitizer;
use crate::config::RegionSplitConfig;
use crate::core::export::enumerator::ExportableRegions;
use crate::core::export::job::{ExportJob, ExportPlan};
use crate::core::export::naming::policy_for;
use crate::core::export::resolver::{resolve_directory, resolve_encoder, RunConfiguration};
use crate::core::export::summary::ExportSummary;
use crate::core::verification::ExportManifest;
use crate::domain::{RegionSplitError, Result, TrackMetadata};
use std::path::Path;
use std::time::Instant;

/// Status text while a run is in progress
pub const STATUS_RUNNING: &str = "Region export is running.";

/// Status text after a successful run
pub const STATUS_DONE: &str = "Region export is done.";

/// Title of the completion notification
pub const NOTIFY_TITLE: &str = "Status";

/// Export coordinator
pub struct ExportCoordinator {
    registry: Box<dyn RendererRegistry>,
    prompter: Box<dyn Prompter>,
    fs: Box<dyn FileSystem>,
    sanitizer: Box<dyn FilenameSanitizer>,
    status: Box<dyn StatusSink>,
    manifest_name: Option<String>,
}

impl ExportCoordinator {
    /// Coordinator over a registry, with the std filesystem, default sanitizer,
    /// console status and no interactive choosers
    pub fn new(registry: impl RendererRegistry + 'static) -> Self {
        Self {
            registry: Box::new(registry),
            prompter: Box::new(NoPrompter),
            fs: Box::new(StdFileSystem),
            sanitizer: Box::new(DefaultSanitizer),
            status: Box::new(ConsoleStatus),
            manifest_name: None,
        }
    }

    /// Coordinator with the configured renderers and manifest settings
    pub fn from_config(config: &RegionSplitConfig) -> Self {
        let manifest = config
            .export
            .write_manifest
            .then(|| config.export.manifest_name.clone());
        Self::new(registry_from_config(config)).with_manifest(manifest)
    }

    /// Replace the interactive choosers
    pub fn with_prompter(mut self, prompter: impl Prompter + 'static) -> Self {
        self.prompter = Box::new(prompter);
        self
    }

    /// Replace the filesystem
    pub fn with_file_system(mut self, fs: impl FileSystem + 'static) -> Self {
        self.fs = Box::new(fs);
        self
    }

    /// Replace the filename sanitizer
    pub fn with_sanitizer(mut self, sanitizer: impl FilenameSanitizer + 'static) -> Self {
        self.sanitizer = Box::new(sanitizer);
        self
    }

    /// Replace the status sink
    pub fn with_status(mut self, status: impl StatusSink + 'static) -> Self {
        self.status = Box::new(status);
        self
    }

    /// Write a checksum manifest with this file name after each run
    pub fn with_manifest(mut self, manifest_name: Option<String>) -> Self {
        self.manifest_name = manifest_name;
        self
    }

    /// Resolve everything and compose the job list without touching the filesystem
    ///
    /// Checks run in a fixed order: document, regions, output directory, encoder.
    /// The directory chooser and template chooser may be shown.
    pub fn plan(
        &self,
        provider: &dyn DocumentProvider,
        run: &RunConfiguration,
    ) -> Result<ExportPlan> {
        let document = provider
            .current_document()
            .ok_or(RegionSplitError::NoDocument)?;
        self.prepare(document, run)
    }

    fn prepare(&self, document: &dyn Document, run: &RunConfiguration) -> Result<ExportPlan> {
        let regions = ExportableRegions::from_document(document)?;

        let directory = resolve_directory(
            &run.dir,
            document.source_path(),
            self.prompter.as_ref(),
            self.fs.as_ref(),
        )?;

        let binding = resolve_encoder(
            self.registry.as_ref(),
            self.prompter.as_ref(),
            &run.format,
            &run.preset,
        )?;

        let policy = policy_for(run.mode);
        let total = regions.total();
        let jobs = regions
            .iter()
            .map(|(track, region)| {
                let raw = policy.compose(document.title(), region, track, binding.extension());
                let file_name = self.sanitizer.sanitize(&raw);
                let path = self.fs.join(&directory.path, Path::new(&file_name));
                let metadata = run
                    .mode
                    .embeds_metadata()
                    .then(|| TrackMetadata::new(region.name.as_str(), track, total));

                ExportJob {
                    track,
                    region: region.clone(),
                    file_name,
                    path,
                    metadata,
                }
            })
            .collect();

        tracing::info!(
            document = %document.title(),
            mode = %run.mode,
            renderer = %binding.renderer().name(),
            preset = %binding.preset().name,
            output_dir = %directory.path.display(),
            tracks = total,
            markers_skipped = regions.markers_skipped(),
            "Export planned"
        );

        Ok(ExportPlan {
            document: document.title().to_string(),
            mode: run.mode,
            binding,
            directory,
            jobs,
            markers_skipped: regions.markers_skipped(),
        })
    }

    /// Execute the export
    ///
    /// Creates the output directory, then for each job deletes any existing target and
    /// renders the region. A render failure stops the run; files already written stay.
    /// With `dry_run` the jobs are listed and nothing is created, deleted or rendered.
    pub fn execute(
        &self,
        provider: &dyn DocumentProvider,
        run: &RunConfiguration,
        dry_run: bool,
    ) -> Result<ExportSummary> {
        let start_time = Instant::now();
        let document = provider
            .current_document()
            .ok_or(RegionSplitError::NoDocument)?;
        let plan = self.prepare(document, run)?;
        let mut summary = ExportSummary::from_plan(&plan, dry_run);

        if dry_run {
            for job in &plan.jobs {
                self.status
                    .output_text(&format!("Would write: '{}'", job.path.display()));
            }
            return Ok(summary.with_duration(start_time.elapsed()));
        }

        self.fs.create_dir_all(&plan.directory.path)?;

        for job in &plan.jobs {
            self.status
                .output_text(&format!("Queueing: '{}'", job.file_name));

            if self.fs.exists(&job.path) {
                tracing::debug!(path = %job.path.display(), "Replacing existing file");
                self.fs.remove_file(&job.path)?;
                summary.replaced += 1;
            }

            document.render(&RenderRequest {
                path: &job.path,
                binding: &plan.binding,
                range: job.region.range(),
                metadata: job.metadata.as_ref(),
            })?;

            self.status
                .output_text(&format!("Path: '{}'", job.path.display()));
            crate::log_region_rendered!(job.track, job.region.name, job.path);
            summary.record(job);
        }

        // Every track is on disk at this point, so a manifest failure only warns
        if let Some(name) = &self.manifest_name {
            let path = plan.directory.path.join(name);
            match ExportManifest::from_summary(&summary).and_then(|m| m.write(&path)) {
                Ok(()) => summary.manifest = Some(path),
                Err(e) => {
                    tracing::warn!(
                        manifest = %path.display(),
                        error = %e,
                        "Failed to write manifest"
                    );
                    self.status
                        .output_text(&format!("Manifest not written: {e}"));
                    summary.manifest_error = Some(e.to_string());
                }
            }
        }

        Ok(summary.with_duration(start_time.elapsed()))
    }

    /// Execute the export and report progress and the outcome to the status sink
    ///
    /// The completion notification is shown only after a real run whose directory was
    /// not picked in the chooser.
    pub fn run(
        &self,
        provider: &dyn DocumentProvider,
        run: &RunConfiguration,
        dry_run: bool,
    ) -> Result<ExportSummary> {
        self.status.set_status_text(STATUS_RUNNING);

        match self.execute(provider, run, dry_run) {
            Ok(summary) => {
                summary.log_summary();
                self.status.set_status_text(STATUS_DONE);
                if summary.should_notify() {
                    self.status
                        .notify(&summary.notification_message(), NOTIFY_TITLE);
                }
                Ok(summary)
            }
            Err(e) => {
                crate::log_error_with_context!(&e, "Region export failed");
                self.status.set_status_text(&e.to_string());
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::host::{EncodeJob, Renderer, RendererSet};
    use crate::adapters::project::ProjectDocument;
    use crate::domain::{ExportMode, Preset, PresetId, Region};
    use std::cell::RefCell;
    use std::path::PathBuf;
    use std::rc::Rc;
    use std::sync::Arc;
    use tempfile::TempDir;

    struct Touch;

    impl Renderer for Touch {
        fn name(&self) -> &str {
            "Touch"
        }
        fn id(&self) -> &str {
            "touch"
        }
        fn extension(&self) -> &str {
            "flac"
        }
        fn templates(&self) -> &[Preset] {
            &[]
        }
        fn template_by_index(&self, _index: i32) -> Option<Preset> {
            Some(Preset::new(0, "Any", &[]))
        }
        fn encode(&self, job: &EncodeJob<'_>) -> Result<()> {
            std::fs::write(job.output, job.range.to_string())?;
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<String>>>);

    impl StatusSink for Recorder {
        fn set_status_text(&self, text: &str) {
            self.0.borrow_mut().push(format!("status:{text}"));
        }
        fn output_text(&self, text: &str) {
            self.0.borrow_mut().push(format!("output:{text}"));
        }
        fn notify(&self, message: &str, title: &str) {
            self.0.borrow_mut().push(format!("notify:{title}:{message}"));
        }
    }

    fn document(dir: &Path) -> Option<ProjectDocument> {
        Some(ProjectDocument::new(
            "Demo",
            dir.join("demo.wav"),
            vec![Region::new("A", 0, 10), Region::new("B", 10, 10)],
        ))
    }

    fn run(dir: &str) -> RunConfiguration {
        RunConfiguration {
            mode: ExportMode::Positional,
            format: ".flac".to_string(),
            preset: PresetId::ByIndex(0),
            dir: dir.to_string(),
        }
    }

    fn coordinator(status: &Recorder) -> ExportCoordinator {
        ExportCoordinator::new(RendererSet::new().with(Arc::new(Touch))).with_status(status.clone())
    }

    #[test]
    fn test_no_document() {
        let status = Recorder::default();
        let none: Option<ProjectDocument> = None;
        let err = coordinator(&status)
            .run(&none, &run("/out"), false)
            .unwrap_err();
        assert!(matches!(err, RegionSplitError::NoDocument));
        assert_eq!(
            status.0.borrow().last().unwrap(),
            "status:Open a file containing regions before exporting"
        );
    }

    #[test]
    fn test_run_reports_progress_and_notifies() {
        let temp = TempDir::new().unwrap();
        let status = Recorder::default();

        let summary = coordinator(&status)
            .run(&document(temp.path()), &run("tracks"), false)
            .unwrap();

        assert!(summary.is_complete());
        let out = temp.path().join("tracks");
        assert!(out.join("Demod1t01.flac").exists());

        let lines = status.0.borrow();
        assert_eq!(lines[0], format!("status:{STATUS_RUNNING}"));
        assert_eq!(lines[1], "output:Queueing: 'Demod1t01.flac'");
        assert_eq!(
            lines[2],
            format!("output:Path: '{}'", out.join("Demod1t01.flac").display())
        );
        assert_eq!(lines[5], format!("status:{STATUS_DONE}"));
        assert_eq!(
            lines[6],
            format!("notify:Status:Files are saving to: {}", out.display())
        );
    }

    #[test]
    fn test_dry_run_touches_nothing() {
        let temp = TempDir::new().unwrap();
        let status = Recorder::default();

        let summary = coordinator(&status)
            .run(&document(temp.path()), &run("tracks"), true)
            .unwrap();

        assert!(summary.dry_run);
        assert_eq!(summary.planned, 2);
        assert!(summary.files.is_empty());
        assert!(!temp.path().join("tracks").exists());
        assert!(!status.0.borrow().iter().any(|l| l.starts_with("notify:")));
    }

    #[test]
    fn test_plan_composes_paths() {
        let temp = TempDir::new().unwrap();
        let status = Recorder::default();
        let mut config = run("/out");
        config.mode = ExportMode::Titled;

        let plan = coordinator(&status)
            .plan(&document(temp.path()), &config)
            .unwrap();

        let paths: Vec<PathBuf> = plan.jobs.iter().map(|j| j.path.clone()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/out/01-Demo-A.flac"),
                PathBuf::from("/out/02-Demo-B.flac")
            ]
        );
        assert_eq!(plan.jobs[1].metadata.as_ref().unwrap().track_no(), "2/2");
    }

    #[test]
    fn test_manifest_written_when_enabled() {
        let temp = TempDir::new().unwrap();
        let status = Recorder::default();

        let summary = coordinator(&status)
            .with_manifest(Some("manifest.json".to_string()))
            .run(&document(temp.path()), &run("tracks"), false)
            .unwrap();

        let manifest_path = summary.manifest.unwrap();
        let manifest = ExportManifest::load(&manifest_path).unwrap();
        assert_eq!(manifest.files.len(), 2);
        assert_eq!(manifest.files[1].file, "Demod1t02.flac");
    }

    #[test]
    fn test_manifest_failure_keeps_successful_run() {
        let temp = TempDir::new().unwrap();
        let status = Recorder::default();
        // A directory in the manifest's place makes the write fail
        std::fs::create_dir_all(temp.path().join("tracks").join("manifest.json")).unwrap();

        let summary = coordinator(&status)
            .with_manifest(Some("manifest.json".to_string()))
            .run(&document(temp.path()), &run("tracks"), false)
            .unwrap();

        assert!(summary.is_complete());
        assert!(summary.manifest.is_none());
        assert!(summary.manifest_error.is_some());
        assert!(temp.path().join("tracks").join("Demod1t02.flac").exists());

        let lines = status.0.borrow();
        assert!(lines.iter().any(|l| l.starts_with("output:Manifest not written")));
        assert!(lines.contains(&format!("status:{STATUS_DONE}")));
        assert!(lines.iter().any(|l| l.starts_with("notify:")));
    }
}
