//! Project document: a source audio file plus its region list
//!
//! Project files are TOML (or JSON when the file name ends in `.json`):
//!
//! ```toml
//! source = "MyAlbum.wav"
//! title = "MyAlbum.wav"   # optional, defaults to the source file name
//!
//! [[regions]]
//! name = "Intro"
//! start = 0
//! length = 441000
//! ```

use crate::adapters::host::{Document, EncodeJob, RenderRequest};
use crate::domain::{Region, RegionSplitError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk layout of a project file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectFile {
    /// Source audio file, relative paths resolve against the project file's folder
    pub source: PathBuf,

    /// Display title; defaults to the source file name including its extension
    #[serde(default)]
    pub title: Option<String>,

    /// Markers and regions in stored order
    #[serde(default)]
    pub regions: Vec<Region>,
}

/// A document opened from a project file
#[derive(Debug, Clone)]
pub struct ProjectDocument {
    title: String,
    source: PathBuf,
    regions: Vec<Region>,
}

impl ProjectDocument {
    /// Create a document directly
    pub fn new(title: impl Into<String>, source: impl Into<PathBuf>, regions: Vec<Region>) -> Self {
        Self {
            title: title.into(),
            source: source.into(),
            regions,
        }
    }

    /// Load a project file
    ///
    /// # Errors
    ///
    /// Returns [`RegionSplitError::Project`] if the file cannot be read or parsed, or
    /// if it names no source file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let contents = fs::read_to_string(path).map_err(|e| {
            RegionSplitError::Project(format!(
                "Failed to read project file {}: {}",
                path.display(),
                e
            ))
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let project: ProjectFile = if is_json {
            serde_json::from_str(&contents).map_err(|e| {
                RegionSplitError::Project(format!("Failed to parse {}: {}", path.display(), e))
            })?
        } else {
            toml::from_str(&contents).map_err(|e| {
                RegionSplitError::Project(format!("Failed to parse {}: {}", path.display(), e))
            })?
        };

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        let document = Self::from_project(project, base)?;

        tracing::info!(
            project = %path.display(),
            title = %document.title,
            source = %document.source.display(),
            entries = document.regions.len(),
            "Opened project"
        );

        Ok(document)
    }

    /// Build a document from a parsed project, resolving the source against `base`
    pub fn from_project(project: ProjectFile, base: &Path) -> Result<Self> {
        if project.source.as_os_str().is_empty() {
            return Err(RegionSplitError::Project(
                "project does not name a source file".to_string(),
            ));
        }

        let source = if project.source.is_absolute() {
            project.source
        } else {
            base.join(project.source)
        };

        let title = match project.title {
            Some(title) if !title.is_empty() => title,
            _ => source
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
        };

        Ok(Self::new(title, source, project.regions))
    }
}

impl Document for ProjectDocument {
    fn title(&self) -> &str {
        &self.title
    }

    fn source_path(&self) -> &Path {
        &self.source
    }

    fn regions(&self) -> &[Region] {
        &self.regions
    }

    fn render(&self, request: &RenderRequest<'_>) -> Result<()> {
        let job = EncodeJob {
            source: &self.source,
            range: request.range,
            preset: request.binding.preset(),
            metadata: request.metadata,
            output: request.path,
        };

        tracing::debug!(
            output = %request.path.display(),
            range = %request.range,
            renderer = %request.binding.renderer().name(),
            preset = %request.binding.preset().name,
            "Rendering region"
        );

        request.binding.renderer().encode(&job)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_load_toml_project() {
        let temp_dir = TempDir::new().unwrap();
        let project_path = temp_dir.path().join("album.toml");
        fs::write(
            &project_path,
            r#"
source = "MyAlbum.wav"

[[regions]]
name = "A"
start = 0
length = 10

[[regions]]
start = 10

[[regions]]
name = "B"
start = 20
length = 5
"#,
        )
        .unwrap();

        let document = ProjectDocument::load(&project_path).unwrap();
        assert_eq!(document.title(), "MyAlbum.wav");
        assert_eq!(document.source_path(), temp_dir.path().join("MyAlbum.wav"));
        assert_eq!(document.regions().len(), 3);
        assert_eq!(document.regions()[1], Region::new("", 10, 0));
        assert_eq!(document.regions()[2].name, "B");
    }

    #[test]
    fn test_load_json_project_with_title() {
        let mut temp_file = NamedTempFile::with_suffix(".json").unwrap();
        temp_file
            .write_all(
                br#"{"source": "/audio/live.flac", "title": "Live 1999",
                    "regions": [{"name": "Opener", "start": 0, "length": 100}]}"#,
            )
            .unwrap();
        temp_file.flush().unwrap();

        let document = ProjectDocument::load(temp_file.path()).unwrap();
        assert_eq!(document.title(), "Live 1999");
        assert_eq!(document.source_path(), Path::new("/audio/live.flac"));
        assert_eq!(document.regions()[0].length, 100);
    }

    #[test]
    fn test_missing_source_is_rejected() {
        let project = ProjectFile {
            source: PathBuf::new(),
            title: None,
            regions: vec![],
        };
        let result = ProjectDocument::from_project(project, Path::new("/"));
        assert!(matches!(result, Err(RegionSplitError::Project(_))));
    }

    #[test]
    fn test_unreadable_project() {
        let result = ProjectDocument::load("/nonexistent/project.toml");
        assert!(matches!(result, Err(RegionSplitError::Project(_))));
    }

    #[test]
    fn test_invalid_toml_project() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"source = [").unwrap();
        temp_file.flush().unwrap();

        assert!(ProjectDocument::load(temp_file.path()).is_err());
    }
}
