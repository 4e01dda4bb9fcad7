//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for regionsplit using clap.

pub mod commands;

use crate::config::{load_config, load_config_or_default, RegionSplitConfig};
use crate::domain::Result;
use clap::{Parser, Subcommand};

/// Configuration file used when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "regionsplit.toml";

/// Regionsplit - export the regions of an audio file as separate tracks
#[derive(Parser, Debug)]
#[command(name = "regionsplit")]
#[command(version, about, long_about = None)]
#[command(author = "Regionsplit Contributors")]
pub struct Cli {
    /// Path to configuration file [default: regionsplit.toml]
    #[arg(short, long, env = "REGIONSPLIT_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "REGIONSPLIT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export every region of a project to its own file
    Export(commands::export::ExportArgs),

    /// Show the files an export would write
    Plan(commands::plan::PlanArgs),

    /// Check exported files against their manifest
    Verify(commands::verify::VerifyArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

/// Load the configuration named on the command line
///
/// An explicit path must exist. Without one, `regionsplit.toml` is used when present
/// and built-in defaults otherwise.
pub fn load_configuration(path: Option<&str>) -> Result<RegionSplitConfig> {
    match path {
        Some(path) => load_config(path),
        None => load_config_or_default(DEFAULT_CONFIG_PATH),
    }
}
