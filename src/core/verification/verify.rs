//! Verification of exported files against their manifest

use super::checksum::file_checksum;
use super::manifest::{ExportManifest, ManifestEntry};
use super::report::{VerificationFailure, VerificationReport};
use crate::domain::Result;
use std::path::Path;
use std::time::Instant;

/// Load `{dir}/{manifest_name}` and check every listed file
///
/// # Errors
///
/// Returns an error only when the manifest itself cannot be read. Missing or changed
/// files are reported as failures.
///
/// # Examples
///
/// ```no_run
/// use regionsplit::core::verification::verify_directory;
///
/// let report = verify_directory("out".as_ref(), "manifest.json").unwrap();
/// println!("{}", report.format_summary());
/// ```
pub fn verify_directory(dir: &Path, manifest_name: &str) -> Result<VerificationReport> {
    let manifest = ExportManifest::load(dir.join(manifest_name))?;
    Ok(verify_manifest(dir, &manifest))
}

/// Check the files of a manifest that live in `dir`
pub fn verify_manifest(dir: &Path, manifest: &ExportManifest) -> VerificationReport {
    let start = Instant::now();
    let mut report = VerificationReport::new();

    tracing::info!(
        dir = %dir.display(),
        files = manifest.files.len(),
        "Starting export verification"
    );

    for entry in &manifest.files {
        if entry.sha256.is_empty() {
            report.record_skip();
            continue;
        }
        match check_entry(dir, entry) {
            None => report.record_pass(),
            Some(failure) => {
                tracing::warn!(file = %failure.file, reason = %failure.reason, "Verification failure");
                report.record_failure(failure);
            }
        }
    }

    report.set_duration(start.elapsed().as_millis() as u64);

    tracing::info!(
        passed = report.passed,
        failed = report.failed,
        skipped = report.skipped,
        "Verification completed"
    );

    report
}

fn check_entry(dir: &Path, entry: &ManifestEntry) -> Option<VerificationFailure> {
    let path = dir.join(&entry.file);
    let failure = |actual: Option<String>, reason: String| VerificationFailure {
        file: entry.file.clone(),
        expected_checksum: entry.sha256.clone(),
        actual_checksum: actual,
        reason,
    };

    if !path.exists() {
        return Some(failure(None, "File missing".to_string()));
    }

    match file_checksum(&path) {
        Err(e) => Some(failure(None, e.to_string())),
        Ok(actual) if actual.sha256 != entry.sha256 => {
            Some(failure(Some(actual.sha256), "Checksum mismatch".to_string()))
        }
        Ok(actual) if actual.bytes != entry.bytes => Some(failure(
            Some(actual.sha256),
            format!("Size mismatch: expected {} bytes, found {}", entry.bytes, actual.bytes),
        )),
        Ok(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::verification::checksum::calculate_checksum_bytes;
    use crate::domain::ExportMode;
    use chrono::Utc;
    use std::fs;
    use tempfile::TempDir;

    fn entry(track: usize, file: &str, content: &[u8]) -> ManifestEntry {
        ManifestEntry {
            track,
            region: String::new(),
            file: file.to_string(),
            bytes: content.len() as u64,
            sha256: calculate_checksum_bytes(content),
        }
    }

    fn manifest(files: Vec<ManifestEntry>) -> ExportManifest {
        ExportManifest {
            generated_at: Utc::now(),
            document: "MyAlbum".to_string(),
            mode: ExportMode::Positional,
            renderer: "FLAC Audio".to_string(),
            preset: "Default Template".to_string(),
            files,
        }
    }

    #[test]
    fn test_intact_files_pass() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("MyAlbumd1t01.flac"), b"one").unwrap();

        let report = verify_manifest(
            dir.path(),
            &manifest(vec![entry(1, "MyAlbumd1t01.flac", b"one")]),
        );
        assert!(report.is_success());
        assert_eq!(report.passed, 1);
    }

    #[test]
    fn test_missing_and_changed_files_fail() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("MyAlbumd1t01.flac"), b"tampered").unwrap();

        let report = verify_manifest(
            dir.path(),
            &manifest(vec![
                entry(1, "MyAlbumd1t01.flac", b"one"),
                entry(2, "MyAlbumd1t02.flac", b"two"),
            ]),
        );
        assert_eq!(report.failed, 2);
        assert_eq!(report.failures[0].reason, "Checksum mismatch");
        assert!(report.failures[0].actual_checksum.is_some());
        assert_eq!(report.failures[1].reason, "File missing");
    }

    #[test]
    fn test_entries_without_checksum_are_skipped() {
        let dir = TempDir::new().unwrap();
        let mut unhashed = entry(1, "a.flac", b"");
        unhashed.sha256.clear();

        let report = verify_manifest(dir.path(), &manifest(vec![unhashed]));
        assert_eq!(report.skipped, 1);
        assert!(report.is_success());
    }

    #[test]
    fn test_verify_directory_reads_manifest() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.flac"), b"a").unwrap();
        manifest(vec![entry(1, "a.flac", b"a")])
            .write(dir.path().join("manifest.json"))
            .unwrap();

        let report = verify_directory(dir.path(), "manifest.json").unwrap();
        assert_eq!(report.passed, 1);

        assert!(verify_directory(dir.path(), "absent.json").is_err());
    }
}
