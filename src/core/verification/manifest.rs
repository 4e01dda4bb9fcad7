//! Export manifest
//!
//! A JSON record of the files a run produced, written next to them.

use super::checksum::file_checksum;
use crate::core::export::ExportSummary;
use crate::domain::context::ResultExt;
use crate::domain::{ExportMode, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Manifest of one export run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportManifest {
    /// When the manifest was written
    pub generated_at: DateTime<Utc>,

    /// Document title
    pub document: String,

    /// Naming mode
    pub mode: ExportMode,

    /// Renderer display name
    pub renderer: String,

    /// Template name
    pub preset: String,

    /// Files in track order
    pub files: Vec<ManifestEntry>,
}

/// One exported file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// 1-based track ordinal
    pub track: usize,

    /// Region name
    pub region: String,

    /// File name relative to the manifest
    pub file: String,

    /// File size in bytes
    pub bytes: u64,

    /// Hex-encoded SHA-256
    pub sha256: String,
}

impl ExportManifest {
    /// Hash every written file of a summary
    ///
    /// # Errors
    ///
    /// Returns an I/O error when a file cannot be read.
    pub fn from_summary(summary: &ExportSummary) -> Result<Self> {
        let files = summary
            .files
            .iter()
            .map(|exported| -> Result<ManifestEntry> {
                let checksum = file_checksum(&exported.path)?;
                Ok(ManifestEntry {
                    track: exported.track,
                    region: exported.region.clone(),
                    file: exported
                        .path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default(),
                    bytes: checksum.bytes,
                    sha256: checksum.sha256,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            generated_at: Utc::now(),
            document: summary.document.clone(),
            mode: summary.mode,
            renderer: summary.renderer.clone(),
            preset: summary.preset.clone(),
            files,
        })
    }

    /// Write the manifest as pretty JSON, replacing any earlier one
    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// Read a manifest
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&contents).with_context(|| format!("Invalid manifest {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::export::ExportedFile;
    use std::path::PathBuf;
    use std::time::Duration;
    use tempfile::TempDir;

    fn summary_in(dir: &Path) -> ExportSummary {
        fs::write(dir.join("01-MyAlbum-A.mp3"), b"first").unwrap();
        fs::write(dir.join("02-MyAlbum-B.mp3"), b"second!").unwrap();

        ExportSummary {
            document: "MyAlbum".to_string(),
            mode: ExportMode::Titled,
            renderer: "MP3 Audio".to_string(),
            preset: "320 Kbps, CD Quality".to_string(),
            output_dir: dir.to_path_buf(),
            planned: 2,
            files: vec![
                ExportedFile {
                    track: 1,
                    region: "A".to_string(),
                    path: dir.join("01-MyAlbum-A.mp3"),
                },
                ExportedFile {
                    track: 2,
                    region: "B".to_string(),
                    path: dir.join("02-MyAlbum-B.mp3"),
                },
            ],
            replaced: 0,
            markers_skipped: 1,
            dry_run: false,
            chosen_interactively: false,
            manifest: None,
            manifest_error: None,
            duration: Duration::from_millis(5),
        }
    }

    #[test]
    fn test_from_summary_hashes_files() {
        let dir = TempDir::new().unwrap();
        let manifest = ExportManifest::from_summary(&summary_in(dir.path())).unwrap();

        assert_eq!(manifest.files.len(), 2);
        assert_eq!(manifest.files[0].file, "01-MyAlbum-A.mp3");
        assert_eq!(manifest.files[1].bytes, 7);
        assert_eq!(manifest.files[1].sha256.len(), 64);
        assert_eq!(manifest.mode, ExportMode::Titled);
    }

    #[test]
    fn test_write_and_load() {
        let dir = TempDir::new().unwrap();
        let manifest = ExportManifest::from_summary(&summary_in(dir.path())).unwrap();
        let path = dir.path().join("manifest.json");

        manifest.write(&path).unwrap();
        let json = fs::read_to_string(&path).unwrap();
        assert!(json.contains("\"generated_at\""));
        assert!(json.contains("\"mode\": \"titled\""));

        assert_eq!(ExportManifest::load(&path).unwrap(), manifest);
    }

    #[test]
    fn test_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let mut summary = summary_in(dir.path());
        summary.files[0].path = PathBuf::from("/nonexistent/01.mp3");
        assert!(ExportManifest::from_summary(&summary).is_err());
    }
}
