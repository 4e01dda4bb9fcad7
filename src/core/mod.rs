//! Core business logic for regionsplit.
//!
//! # Modules
//!
//! - [`export`] - Resolution, naming and the per-region export loop
//! - [`verification`] - Checksum manifests and their verification
//!
//! # Export Workflow
//!
//! 1. **Resolve**: layer script arguments over configuration into a run configuration
//! 2. **Check**: the document is open and carries markers or regions
//! 3. **Directory**: resolve the output folder, asking the chooser when none is set
//! 4. **Encoder**: find the renderer and bind its template
//! 5. **Export**: render each positive-length region to its own file
//! 6. **Manifest** (optional): record sizes and checksums of the written files
//! 7. **Report**: update the status text and notify
//!
//! # Example
//!
//! ```rust,no_run
//! use regionsplit::adapters::project::ProjectDocument;
//! use regionsplit::config::{load_config_or_default, ScriptArgs};
//! use regionsplit::core::export::{ExportCoordinator, RunConfiguration};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config_or_default("regionsplit.toml")?;
//! let document = Some(ProjectDocument::load("album.toml")?);
//! let args: ScriptArgs = "type=.flac&dir=tracks".parse()?;
//! let run = RunConfiguration::resolve(&args, &config.export)?;
//!
//! let summary = ExportCoordinator::from_config(&config).run(&document, &run, false)?;
//! println!("Written: {}", summary.files.len());
//! # Ok(())
//! # }
//! ```

pub mod export;
pub mod verification;
