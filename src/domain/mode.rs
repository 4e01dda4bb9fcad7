//! Export modes
//!
//! Both modes share one pipeline; they differ in naming policy, per-file metadata and
//! the defaults applied when the run configuration leaves a field empty.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default FLAC template of the positional (archive) mode
pub const POSITIONAL_DEFAULT_PRESET: &str = "44,100 Hz, 16 Bit, Stereo Highest Compression";

/// Naming and metadata policy of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportMode {
    /// `{title}d1t{NN}.{ext}` without per-file metadata
    #[default]
    Positional,
    /// `{NN}-{title}-{region}.{ext}` with title and track-number metadata
    Titled,
}

impl ExportMode {
    /// Format used when no format is configured
    pub fn default_format(&self) -> &'static str {
        match self {
            ExportMode::Positional => ".flac",
            ExportMode::Titled => ".mp3",
        }
    }

    /// Preset used when no preset is configured (empty prompts the user)
    pub fn default_preset(&self) -> &'static str {
        match self {
            ExportMode::Positional => POSITIONAL_DEFAULT_PRESET,
            ExportMode::Titled => "",
        }
    }

    /// Whether each render receives title and track-number metadata
    pub fn embeds_metadata(&self) -> bool {
        matches!(self, ExportMode::Titled)
    }

    /// Lowercase configuration name
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportMode::Positional => "positional",
            ExportMode::Titled => "titled",
        }
    }
}

impl fmt::Display for ExportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "positional" | "archive" => Ok(ExportMode::Positional),
            "titled" | "title" | "tracks" => Ok(ExportMode::Titled),
            other => Err(format!(
                "Invalid export mode '{other}'. Must be one of: positional, titled"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_per_mode() {
        assert_eq!(ExportMode::Positional.default_format(), ".flac");
        assert_eq!(ExportMode::Titled.default_format(), ".mp3");
        assert_eq!(ExportMode::Titled.default_preset(), "");
        assert!(!ExportMode::Positional.embeds_metadata());
        assert!(ExportMode::Titled.embeds_metadata());
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "Titled".parse::<ExportMode>().unwrap(),
            ExportMode::Titled
        );
        assert_eq!(
            "archive".parse::<ExportMode>().unwrap(),
            ExportMode::Positional
        );
        assert!("mp3".parse::<ExportMode>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            mode: ExportMode,
        }
        let w: Wrapper = toml::from_str("mode = \"titled\"").unwrap();
        assert_eq!(w.mode, ExportMode::Titled);
    }
}
