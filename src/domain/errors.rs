//! Domain error types
//!
//! This module defines the error hierarchy for regionsplit.
//! Errors never expose third-party types; conversions flatten them into strings.

use std::path::PathBuf;
use thiserror::Error;

/// Main regionsplit error type
///
/// The first five variants are pre-flight failures: they are detected before any
/// file is created, deleted or rendered. Everything else can occur mid-run.
#[derive(Debug, Error)]
pub enum RegionSplitError {
    /// No document is open
    #[error("Open a file containing regions before exporting")]
    NoDocument,

    /// The document carries no markers or regions at all
    #[error("The file does not have any markers")]
    NoRegions,

    /// Neither configuration nor the directory chooser produced a target folder
    #[error("no output directory")]
    NoOutputDirectory,

    /// No renderer is registered for the requested format
    #[error("renderer for {format} not found")]
    EncoderNotFound {
        /// Format identifier as given (extension with leading dot, or renderer name)
        format: String,
    },

    /// The renderer has no template matching the requested preset
    #[error("Template not found")]
    TemplateNotFound {
        /// Preset identifier as given (empty for the interactive chooser)
        preset: String,
    },

    /// The encoder failed to produce an output file
    #[error("Render failed for {}: {reason}", path.display())]
    Render {
        /// Target file of the failed render
        path: PathBuf,
        /// Encoder diagnostic
        reason: String,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Project file errors
    #[error("Project error: {0}")]
    Project(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RegionSplitError {
    /// Returns true for validation failures raised before any side effect
    pub fn is_preflight(&self) -> bool {
        matches!(
            self,
            RegionSplitError::NoDocument
                | RegionSplitError::NoRegions
                | RegionSplitError::NoOutputDirectory
                | RegionSplitError::EncoderNotFound { .. }
                | RegionSplitError::TemplateNotFound { .. }
        )
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for RegionSplitError {
    fn from(err: std::io::Error) -> Self {
        RegionSplitError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for RegionSplitError {
    fn from(err: serde_json::Error) -> Self {
        RegionSplitError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for RegionSplitError {
    fn from(err: toml::de::Error) -> Self {
        RegionSplitError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preflight_messages() {
        assert_eq!(
            RegionSplitError::NoRegions.to_string(),
            "The file does not have any markers"
        );
        assert_eq!(
            RegionSplitError::NoOutputDirectory.to_string(),
            "no output directory"
        );
        assert_eq!(
            RegionSplitError::EncoderNotFound {
                format: "xyz".to_string()
            }
            .to_string(),
            "renderer for xyz not found"
        );
        assert_eq!(
            RegionSplitError::TemplateNotFound {
                preset: "7".to_string()
            }
            .to_string(),
            "Template not found"
        );
    }

    #[test]
    fn test_render_error_display() {
        let err = RegionSplitError::Render {
            path: PathBuf::from("/out/01-A.mp3"),
            reason: "exit status 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Render failed for /out/01-A.mp3: exit status 1"
        );
    }

    #[test]
    fn test_is_preflight() {
        assert!(RegionSplitError::NoDocument.is_preflight());
        assert!(RegionSplitError::NoOutputDirectory.is_preflight());
        assert!(!RegionSplitError::Io("disk full".to_string()).is_preflight());
        assert!(!RegionSplitError::Render {
            path: PathBuf::from("a.flac"),
            reason: String::new(),
        }
        .is_preflight());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: RegionSplitError = io_err.into();
        assert!(matches!(err, RegionSplitError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: RegionSplitError = json_err.into();
        assert!(matches!(err, RegionSplitError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: RegionSplitError = toml_err.into();
        assert!(matches!(err, RegionSplitError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let err = RegionSplitError::Project("bad region".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
