//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the regionsplit configuration file.

use crate::adapters::ffmpeg::registry_from_config;
use crate::adapters::host::RendererRegistry;
use crate::cli::load_configuration;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        let shown = config_path.unwrap_or(crate::cli::DEFAULT_CONFIG_PATH);
        tracing::info!(config_path = %shown, "Validating configuration");

        println!("🔍 Validating configuration file: {shown}");
        println!();

        // Loading validates every section
        let config = match load_configuration(config_path) {
            Ok(c) => {
                println!("✅ Configuration is valid");
                c
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                return Ok(2); // Configuration error exit code
            }
        };

        let export = &config.export;
        let or_default = |value: &str, default: &str| {
            if value.is_empty() {
                format!("{default} (mode default)")
            } else {
                value.to_string()
            }
        };

        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Export Mode: {}", export.mode);
        println!(
            "  Format: {}",
            or_default(&export.format, export.mode.default_format())
        );
        println!(
            "  Preset: {}",
            if export.preset.is_empty() && export.mode.default_preset().is_empty() {
                "(prompt)".to_string()
            } else {
                or_default(&export.preset, export.mode.default_preset())
            }
        );
        println!(
            "  Output Directory: {}",
            if export.dir.is_empty() {
                "(prompt)"
            } else {
                export.dir.as_str()
            }
        );
        println!("  Manifest: {}", export.write_manifest);
        println!("  ffmpeg: {}", config.encoder.ffmpeg_path);

        let registry = registry_from_config(&config);
        println!("  Renderers:");
        for renderer in registry.renderers() {
            println!(
                "    .{:<5} {} ({} presets)",
                renderer.extension(),
                renderer.name(),
                renderer.templates().len()
            );
        }
        println!();
        Ok(0)
    }
}
