//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "regionsplit.toml")]
    pub output: String,

    /// Include example values and comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing regionsplit configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Make sure ffmpeg is on PATH or set encoder.ffmpeg_path");
                println!("  3. Validate configuration: regionsplit validate-config");
                println!("  4. Preview the files: regionsplit plan <project>");
                println!("  5. Run export: regionsplit export <project>");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# regionsplit configuration

[application]
log_level = "info"
non_interactive = false

[export]
mode = "positional"   # positional | titled
format = ""           # empty = mode default (.flac / .mp3)
preset = ""           # empty = mode default, or prompt in titled mode
dir = ""              # empty = choose interactively
dry_run = false
write_manifest = false
manifest_name = "manifest.json"

[encoder]
ffmpeg_path = "ffmpeg"
builtin_renderers = true

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"
"#
        .to_string()
    }

    /// Generate configuration with examples and comments
    fn generate_config_with_examples() -> String {
        r#"# regionsplit configuration file
#
# Every region of a project is rendered to its own file. Run options given on
# the command line (--mode, --format, --preset, --dir, --args) take precedence
# over the values below.
#
# Every key can also be overridden with an environment variable, for example
# REGIONSPLIT_EXPORT_DIR or REGIONSPLIT_ENCODER_FFMPEG_PATH. Values may refer
# to environment variables with ${VAR} syntax.

# ============================================================================
# Application Settings
# ============================================================================
[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# Never open the directory or preset chooser; missing values fail the run
non_interactive = false

# ============================================================================
# Export Configuration
# ============================================================================
[export]
# Export mode: "positional" or "titled"
# - positional: {title}d1t{NN}.{ext}, no per-file metadata
# - titled: {NN}-{title}-{region}.{ext}, with title and track number tags
mode = "positional"

# Output format: an extension with a leading dot (".flac") or a renderer name
# Empty uses the mode default (.flac for positional, .mp3 for titled)
format = ""

# Template name or zero-based index
# Empty uses the FLAC archive template in positional mode and prompts in titled mode
preset = ""

# Output directory; relative paths resolve against the project's audio folder
# Empty opens the directory chooser
dir = "exports"

# List the files without rendering
dry_run = false

# Write a SHA-256 manifest next to the exported files
write_manifest = false
manifest_name = "manifest.json"

# ============================================================================
# Encoder Configuration
# ============================================================================
[encoder]
# Path or name of the ffmpeg binary
ffmpeg_path = "ffmpeg"

# Register the built-in FLAC, MP3, WAV and Ogg Vorbis renderers
builtin_renderers = true

# Additional renderers are looked up before the built-in ones
# [[renderers]]
# name = "Opus Audio"
# extension = ".opus"
#
# [[renderers.presets]]
# name = "128 Kbps"
# args = ["-c:a", "libopus", "-b:a", "128k"]

# ============================================================================
# Logging Configuration
# ============================================================================
[logging]
# Enable JSON file logging
local_enabled = false

# Log file directory
local_path = "logs"

# Log rotation (daily or hourly)
local_rotation = "daily"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RegionSplitConfig;
    use tempfile::TempDir;

    fn args(output: &Path) -> InitArgs {
        InitArgs {
            output: output.to_string_lossy().into_owned(),
            with_examples: false,
            force: false,
        }
    }

    #[test]
    fn test_generated_configs_parse() {
        for content in [
            InitArgs::generate_minimal_config(),
            InitArgs::generate_config_with_examples(),
        ] {
            let config: RegionSplitConfig = toml::from_str(&content).unwrap();
            assert!(config.validate().is_ok());
            assert!(config.renderers.is_empty());
        }
    }

    #[test]
    fn test_init_writes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("regionsplit.toml");

        assert_eq!(args(&path).execute().unwrap(), 0);
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("[export]"));
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("regionsplit.toml");
        fs::write(&path, "# mine").unwrap();

        assert_eq!(args(&path).execute().unwrap(), 2);
        assert_eq!(fs::read_to_string(&path).unwrap(), "# mine");

        let mut forced = args(&path);
        forced.force = true;
        forced.with_examples = true;
        assert_eq!(forced.execute().unwrap(), 0);
        assert!(fs::read_to_string(&path)
            .unwrap()
            .contains("# regionsplit configuration file"));
    }

    #[test]
    fn test_init_write_failure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("regionsplit.toml");
        assert_eq!(args(&path).execute().unwrap(), 5);
    }
}
