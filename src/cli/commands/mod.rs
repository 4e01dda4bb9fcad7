//! CLI command implementations
//!
//! This module contains all CLI command implementations.

pub mod export;
pub mod init;
pub mod plan;
pub mod validate;
pub mod verify;

use crate::adapters::console::ConsolePrompter;
use crate::adapters::project::ProjectDocument;
use crate::config::args::{ARG_DIR, ARG_FORMAT, ARG_MANIFEST, ARG_MODE, ARG_PRESET};
use crate::config::{RegionSplitConfig, ScriptArgs};
use crate::core::export::{ExportCoordinator, RunConfiguration};
use crate::domain::Result;
use clap::Args;
use std::path::PathBuf;

/// Project and run overrides shared by `export` and `plan`
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Project file (TOML, or JSON with a .json extension)
    pub project: PathBuf,

    /// Export mode (positional or titled)
    #[arg(long)]
    pub mode: Option<String>,

    /// Output format: an extension such as ".mp3", or a renderer name
    #[arg(long)]
    pub format: Option<String>,

    /// Template name or zero-based index
    #[arg(long)]
    pub preset: Option<String>,

    /// Output directory, relative to the project's source file
    #[arg(long)]
    pub dir: Option<String>,

    /// Script arguments, e.g. "type=.wav&preset=0&dir=out"
    #[arg(long, value_name = "KEY=VALUE&...")]
    pub args: Option<String>,

    /// Never open the directory or template chooser
    #[arg(long)]
    pub non_interactive: bool,
}

impl RunArgs {
    /// Script arguments with the explicit flags laid over `--args`
    pub fn script_args(&self) -> Result<ScriptArgs> {
        let mut args = match &self.args {
            Some(raw) => raw.parse()?,
            None => ScriptArgs::new(),
        };

        for (key, value) in [
            (ARG_MODE, &self.mode),
            (ARG_FORMAT, &self.format),
            (ARG_PRESET, &self.preset),
            (ARG_DIR, &self.dir),
        ] {
            if let Some(value) = value {
                args.insert(key, value.clone());
            }
        }

        Ok(args)
    }

    /// Run configuration on top of the configured export defaults
    pub fn run_configuration(&self, config: &RegionSplitConfig) -> Result<RunConfiguration> {
        RunConfiguration::resolve(&self.script_args()?, &config.export)
    }

    /// Whether to write a checksum manifest; `manifest=` in `--args` wins over config
    pub fn write_manifest(&self, config: &RegionSplitConfig) -> Result<bool> {
        self.script_args()?
            .bool(ARG_MANIFEST, config.export.write_manifest)
    }

    /// Open the project file
    pub fn open_project(&self) -> Result<ProjectDocument> {
        ProjectDocument::load(&self.project)
    }

    /// Coordinator for this run, with console choosers unless disabled
    pub fn coordinator(&self, config: &RegionSplitConfig) -> ExportCoordinator {
        let coordinator = ExportCoordinator::from_config(config);
        if self.non_interactive || config.application.non_interactive {
            coordinator
        } else {
            coordinator.with_prompter(ConsolePrompter::stdio())
        }
    }
}
