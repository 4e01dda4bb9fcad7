//! Configuration schema types
//!
//! This module defines the configuration structure for regionsplit.

use crate::domain::ExportMode;
use serde::{Deserialize, Serialize};

/// Main regionsplit configuration
///
/// This is the root configuration structure that maps to the TOML file.
/// Every section is optional; missing sections take their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegionSplitConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Export defaults
    #[serde(default)]
    pub export: ExportConfig,

    /// Encoder settings
    #[serde(default)]
    pub encoder: EncoderConfig,

    /// Additional renderers
    #[serde(default)]
    pub renderers: Vec<RendererConfig>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl RegionSplitConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.export.validate()?;
        self.encoder.validate()?;
        for renderer in &self.renderers {
            renderer.validate()?;
        }
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Never open interactive choosers; a missing directory or preset fails the run
    #[serde(default)]
    pub non_interactive: bool,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            non_interactive: false,
        }
    }
}

/// Export configuration
///
/// Empty `format` and `preset` fall back to the defaults of the selected mode; an empty
/// `dir` opens the directory chooser.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Naming and metadata policy
    #[serde(default)]
    pub mode: ExportMode,

    /// Output format: an extension with a leading dot (".flac") or a renderer name
    #[serde(default)]
    pub format: String,

    /// Template name or zero-based index; empty prompts
    #[serde(default)]
    pub preset: String,

    /// Output directory; relative paths resolve against the source file's folder
    #[serde(default)]
    pub dir: String,

    /// Plan the export without touching the filesystem
    #[serde(default)]
    pub dry_run: bool,

    /// Write a checksum manifest next to the exported files
    #[serde(default)]
    pub write_manifest: bool,

    /// File name of the manifest
    #[serde(default = "default_manifest_name")]
    pub manifest_name: String,
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        if self.write_manifest && self.manifest_name.trim().is_empty() {
            return Err("export.manifest_name cannot be empty when write_manifest = true".to_string());
        }
        if self.manifest_name.contains(['/', '\\']) {
            return Err(format!(
                "export.manifest_name must be a file name, got '{}'",
                self.manifest_name
            ));
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            mode: ExportMode::default(),
            format: String::new(),
            preset: String::new(),
            dir: String::new(),
            dry_run: false,
            write_manifest: false,
            manifest_name: default_manifest_name(),
        }
    }
}

/// Encoder configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncoderConfig {
    /// Path or name of the ffmpeg binary
    #[serde(default = "default_ffmpeg_path")]
    pub ffmpeg_path: String,

    /// Register the built-in FLAC, MP3, WAV and Ogg Vorbis renderers
    #[serde(default = "default_true")]
    pub builtin_renderers: bool,
}

impl EncoderConfig {
    fn validate(&self) -> Result<(), String> {
        if self.ffmpeg_path.trim().is_empty() {
            return Err("encoder.ffmpeg_path cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            ffmpeg_path: default_ffmpeg_path(),
            builtin_renderers: true,
        }
    }
}

/// A renderer declared in configuration
///
/// ```toml
/// [[renderers]]
/// name = "Opus"
/// extension = ".opus"
///
/// [[renderers.presets]]
/// name = "128 Kbps"
/// args = ["-c:a", "libopus", "-b:a", "128k"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RendererConfig {
    /// Display name
    pub name: String,

    /// Output extension, with or without the leading dot
    pub extension: String,

    /// Templates in index order
    #[serde(default)]
    pub presets: Vec<PresetConfig>,
}

impl RendererConfig {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("renderers.name cannot be empty".to_string());
        }
        if self.extension.trim_start_matches('.').trim().is_empty() {
            return Err(format!(
                "renderer '{}' must declare a file extension",
                self.name
            ));
        }
        if self.presets.is_empty() {
            return Err(format!(
                "renderer '{}' must declare at least one preset",
                self.name
            ));
        }
        Ok(())
    }
}

/// A template of a configured renderer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetConfig {
    /// Display name
    pub name: String,

    /// ffmpeg output arguments
    #[serde(default)]
    pub args: Vec<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log file directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled = true".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_manifest_name() -> String {
    "manifest.json".to_string()
}

fn default_ffmpeg_path() -> String {
    "ffmpeg".to_string()
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_config_validation() {
        let mut config = ApplicationConfig::default();
        assert!(config.validate().is_ok());

        config.log_level = "invalid".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_export_config_defaults() {
        let config = ExportConfig::default();
        assert_eq!(config.mode, ExportMode::Positional);
        assert!(config.format.is_empty());
        assert!(config.dir.is_empty());
        assert_eq!(config.manifest_name, "manifest.json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_export_config_manifest_validation() {
        let mut config = ExportConfig {
            write_manifest: true,
            manifest_name: " ".to_string(),
            ..ExportConfig::default()
        };
        assert!(config.validate().is_err());

        config.manifest_name = "sub/manifest.json".to_string();
        assert!(config.validate().is_err());

        config.manifest_name = "checksums.json".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_renderer_config_validation() {
        let mut renderer = RendererConfig {
            name: "Opus".to_string(),
            extension: ".opus".to_string(),
            presets: vec![PresetConfig {
                name: "128 Kbps".to_string(),
                args: vec!["-c:a".to_string(), "libopus".to_string()],
            }],
        };
        assert!(renderer.validate().is_ok());

        renderer.extension = ".".to_string();
        assert!(renderer.validate().is_err());

        renderer.extension = "opus".to_string();
        renderer.presets.clear();
        assert!(renderer.validate().is_err());
    }

    #[test]
    fn test_logging_config_validation() {
        let mut config = LoggingConfig::default();
        assert!(config.validate().is_ok());

        config.local_rotation = "weekly".to_string();
        assert!(config.validate().is_err());

        config.local_rotation = "hourly".to_string();
        config.local_enabled = true;
        config.local_path = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_document_parses_to_defaults() {
        let config: RegionSplitConfig = toml::from_str("").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.encoder.ffmpeg_path, "ffmpeg");
        assert!(config.encoder.builtin_renderers);
        assert!(config.renderers.is_empty());
    }

    #[test]
    fn test_full_document_parses() {
        let config: RegionSplitConfig = toml::from_str(
            r#"
[application]
log_level = "debug"
non_interactive = true

[export]
mode = "titled"
format = ".mp3"
preset = "1"
dir = "tracks"
write_manifest = true

[encoder]
ffmpeg_path = "/usr/local/bin/ffmpeg"
builtin_renderers = false

[[renderers]]
name = "Opus"
extension = "opus"

[[renderers.presets]]
name = "96 Kbps"
args = ["-c:a", "libopus", "-b:a", "96k"]
"#,
        )
        .unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.export.mode, ExportMode::Titled);
        assert_eq!(config.export.preset, "1");
        assert!(config.application.non_interactive);
        assert!(!config.encoder.builtin_renderers);
        assert_eq!(config.renderers[0].presets[0].args.len(), 4);
    }
}
