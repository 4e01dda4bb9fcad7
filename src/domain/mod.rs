//! Domain models and types for regionsplit.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Regions** ([`Region`], [`SampleRange`]) read from a document
//! - **Presets** ([`Preset`]) and the tagged preset selector ([`PresetId`])
//! - **Per-track metadata** ([`TrackMetadata`]) passed explicitly to each render
//! - **Export modes** ([`ExportMode`]) selecting naming and metadata policy
//! - **Error types** ([`RegionSplitError`]) and the [`Result`] alias
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, RegionSplitError>`]:
//!
//! ```rust
//! use regionsplit::domain::{RegionSplitError, Result};
//!
//! fn example() -> Result<()> {
//!     let config = regionsplit::config::load_config_or_default("regionsplit.toml")?;
//!     if config.export.dir.is_empty() {
//!         return Err(RegionSplitError::NoOutputDirectory);
//!     }
//!     Ok(())
//! }
//! ```

pub mod context;
pub mod errors;
pub mod metadata;
pub mod mode;
pub mod preset;
pub mod region;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::RegionSplitError;
pub use metadata::TrackMetadata;
pub use mode::{ExportMode, POSITIONAL_DEFAULT_PRESET};
pub use preset::{Preset, PresetId};
pub use region::{Region, SampleRange};
pub use result::Result;
