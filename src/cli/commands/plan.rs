//! Plan command implementation
//!
//! Lists the files an export would write, with their sample ranges and metadata.

use super::RunArgs;
use crate::cli::load_configuration;
use clap::Args;

/// Arguments for the plan command
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Project and run overrides
    #[command(flatten)]
    pub run: RunArgs,
}

impl PlanArgs {
    /// Execute the plan command
    pub fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        let config = match load_configuration(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        let plan = self
            .run
            .run_configuration(&config)
            .and_then(|run| {
                let document = Some(self.run.open_project()?);
                self.run.coordinator(&config).plan(&document, &run)
            });

        let plan = match plan {
            Ok(plan) => plan,
            Err(e) => {
                eprintln!("❌ {e}");
                return Ok(2);
            }
        };

        println!("📋 Export plan for {}", plan.document);
        println!(
            "  Renderer: {} ({})",
            plan.binding.renderer().name(),
            plan.binding.preset().name
        );
        println!("  Output: {}", plan.directory.path.display());
        println!();
        for job in &plan.jobs {
            let track = job
                .metadata
                .as_ref()
                .map(|m| format!("  [track {}]", m.track_no()))
                .unwrap_or_default();
            println!(
                "  {:>3}  {:<20}  {}{}",
                job.track,
                job.region.range().to_string(),
                job.path.display(),
                track
            );
        }
        println!();
        println!(
            "  {} file(s), {} marker(s) skipped",
            plan.jobs.len(),
            plan.markers_skipped
        );

        Ok(0)
    }
}
