//! Post-export verification
//!
//! This module writes a checksum manifest for exported files and verifies a
//! directory against it later.

pub mod checksum;
pub mod manifest;
pub mod report;
pub mod verify;

pub use manifest::{ExportManifest, ManifestEntry};
pub use report::{VerificationFailure, VerificationReport};
pub use verify::{verify_directory, verify_manifest};
