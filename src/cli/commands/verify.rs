//! Verify command implementation
//!
//! Re-hashes the files of a finished export and compares them with the manifest
//! written by `export --manifest`.

use crate::cli::load_configuration;
use crate::core::verification::verify_directory;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the verify command
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Directory holding the exported files and their manifest
    pub dir: PathBuf,

    /// Manifest file name (defaults to export.manifest_name)
    #[arg(long)]
    pub manifest: Option<String>,
}

impl VerifyArgs {
    /// Execute the verify command
    pub fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        let manifest_name = match &self.manifest {
            Some(name) => name.clone(),
            None => match load_configuration(config_path) {
                Ok(config) => config.export.manifest_name,
                Err(e) => {
                    eprintln!("Failed to load configuration: {e}");
                    return Ok(2);
                }
            },
        };

        tracing::info!(
            dir = %self.dir.display(),
            manifest = %manifest_name,
            "Starting verify command"
        );

        println!("🔍 Verifying {}", self.dir.join(&manifest_name).display());
        println!();

        let report = match verify_directory(&self.dir, &manifest_name) {
            Ok(report) => report,
            Err(e) => {
                println!("❌ Could not read manifest");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        println!("{}", report.format_summary());

        if report.is_success() {
            println!("✅ All files match the manifest");
            Ok(0)
        } else {
            println!("❌ {} file(s) failed verification", report.failed);
            Ok(1)
        }
    }
}
