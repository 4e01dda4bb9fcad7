//! Filesystem adapter backed by `std::fs`

use super::host::FileSystem;
use crate::domain::{RegionSplitError, Result};
use std::fs;
use std::path::Path;

/// The real filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn create_dir_all(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path).map_err(|e| {
            RegionSplitError::Io(format!(
                "Failed to create directory {}: {}",
                path.display(),
                e
            ))
        })
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_file(&self, path: &Path) -> Result<()> {
        fs::remove_file(path).map_err(|e| {
            RegionSplitError::Io(format!("Failed to delete {}: {}", path.display(), e))
        })
    }
}
