//! Export command implementation
//!
//! This module implements the `export` command, which renders every region of a
//! project to its own file.

use super::RunArgs;
use crate::cli::load_configuration;
use crate::core::export::ExportSummary;
use clap::Args;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Project and run overrides
    #[command(flatten)]
    pub run: RunArgs,

    /// Dry run mode - list the files without rendering
    #[arg(long)]
    pub dry_run: bool,

    /// Write a checksum manifest next to the exported files
    #[arg(long)]
    pub manifest: bool,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        tracing::info!(project = %self.run.project.display(), "Starting export command");

        let mut config = match load_configuration(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        config.export.write_manifest = match self.run.write_manifest(&config) {
            Ok(enabled) => enabled,
            Err(e) => {
                eprintln!("Invalid run configuration: {e}");
                return Ok(2);
            }
        };
        if self.manifest {
            tracing::info!("Enabling manifest from CLI");
            config.export.write_manifest = true;
        }

        let dry_run = self.dry_run || config.export.dry_run;
        if dry_run {
            tracing::info!("Dry run mode enabled - no files will be written");
            println!("🔍 DRY RUN MODE - No files will be written");
            println!();
        }

        let run = match self.run.run_configuration(&config) {
            Ok(run) => run,
            Err(e) => {
                eprintln!("Invalid run configuration: {e}");
                return Ok(2);
            }
        };

        let document = match self.run.open_project() {
            Ok(document) => Some(document),
            Err(e) => {
                eprintln!("{e}");
                return Ok(2);
            }
        };

        let coordinator = self.run.coordinator(&config);
        let summary = match coordinator.run(&document, &run, dry_run) {
            Ok(summary) => summary,
            Err(e) if e.is_preflight() => {
                eprintln!("❌ {e}");
                return Ok(2); // Nothing was written
            }
            Err(e) => {
                eprintln!("Export failed: {e}");
                return Ok(5); // Fatal error exit code
            }
        };

        print_summary(&summary);
        Ok(0)
    }
}

fn print_summary(summary: &ExportSummary) {
    println!();
    println!("📊 Export Summary:");
    println!("  Document: {}", summary.document);
    println!("  Mode: {}", summary.mode);
    println!("  Renderer: {} ({})", summary.renderer, summary.preset);
    println!("  Output: {}", summary.output_dir.display());
    if summary.dry_run {
        println!("  Planned: {}", summary.planned);
    } else {
        println!("  Written: {}", summary.files.len());
        println!("  Replaced: {}", summary.replaced);
    }
    println!("  Markers skipped: {}", summary.markers_skipped);
    println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
    if let Some(manifest) = &summary.manifest {
        println!("  Manifest: {}", manifest.display());
    }
    if let Some(error) = &summary.manifest_error {
        println!("  ⚠️  Manifest not written: {error}");
    }
    println!();
}
