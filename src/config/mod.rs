//! Configuration management for regionsplit.
//!
//! # Overview
//!
//! regionsplit uses an optional TOML configuration file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `REGIONSPLIT_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting
//! - Validation on load
//!
//! Per-run overrides arrive as a [`ScriptArgs`] map and are layered on top by the
//! export resolver.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use regionsplit::config::load_config_or_default;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config_or_default("regionsplit.toml")?;
//! println!("Export mode: {}", config.export.mode);
//! println!("ffmpeg: {}", config.encoder.ffmpeg_path);
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [export]
//! mode = "titled"
//! format = ".mp3"
//! preset = "320 Kbps, CD Quality"
//! dir = "${HOME}/Music/rips"
//! write_manifest = true
//!
//! [encoder]
//! ffmpeg_path = "ffmpeg"
//! ```

pub mod args;
pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use args::ScriptArgs;
pub use loader::{load_config, load_config_or_default};
pub use schema::{
    ApplicationConfig, EncoderConfig, ExportConfig, LoggingConfig, PresetConfig, RegionSplitConfig,
    RendererConfig,
};
