//! Checksum calculation for exported files
//!
//! Files are streamed through SHA-256 so large renders never sit in memory.

use crate::domain::context::ResultExt;
use crate::domain::Result;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

/// Size and checksum of one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChecksum {
    /// File size in bytes
    pub bytes: u64,

    /// Hex-encoded SHA-256 (64 characters)
    pub sha256: String,
}

/// Calculate the SHA-256 checksum of a file
///
/// # Errors
///
/// Returns an I/O error when the file cannot be opened or read.
///
/// # Examples
///
/// ```no_run
/// use regionsplit::core::verification::checksum::file_checksum;
///
/// let checksum = file_checksum("out/MyAlbumd1t01.flac").unwrap();
/// assert_eq!(checksum.sha256.len(), 64);
/// ```
pub fn file_checksum(path: impl AsRef<Path>) -> Result<FileChecksum> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;

    let mut hasher = Sha256::new();
    let bytes = io::copy(&mut BufReader::new(file), &mut hasher)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    Ok(FileChecksum {
        bytes,
        sha256: format!("{:x}", hasher.finalize()),
    })
}

/// Calculate SHA-256 checksum of raw bytes
///
/// Returns a hex-encoded SHA-256 checksum string (64 characters).
pub fn calculate_checksum_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_calculate_checksum_known_value() {
        assert_eq!(
            calculate_checksum_bytes(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_file_checksum_matches_bytes() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"Hello, World!").unwrap();
        file.flush().unwrap();

        let checksum = file_checksum(file.path()).unwrap();
        assert_eq!(checksum.bytes, 13);
        assert_eq!(checksum.sha256, calculate_checksum_bytes(b"Hello, World!"));
    }

    #[test]
    fn test_file_checksum_missing_file() {
        let err = file_checksum("/nonexistent/regionsplit/track.flac").unwrap_err();
        assert!(err.to_string().contains("Failed to open"));
    }
}
