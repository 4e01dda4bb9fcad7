//! Host integrations for regionsplit.
//!
//! This module provides the collaborators the export pipeline talks to:
//!
//! - [`host`] - Collaborator traits and the in-memory renderer registry
//! - [`project`] - Documents loaded from TOML or JSON project files
//! - [`ffmpeg`] - Renderers that encode through the `ffmpeg` binary
//! - [`console`] - Terminal choosers and status output
//! - [`fs`] - Filesystem primitives over `std::fs`
//! - [`sanitize`] - Filename sanitizing
//!
//! # Design Pattern
//!
//! Adapters follow the **Adapter Pattern** to isolate the outside world and enable
//! testing with fake implementations. The pipeline only sees the traits in [`host`].
//!
//! ```rust,no_run
//! use regionsplit::adapters::ffmpeg::registry_from_config;
//! use regionsplit::adapters::host::RendererRegistry;
//! use regionsplit::config::RegionSplitConfig;
//!
//! let registry = registry_from_config(&RegionSplitConfig::default());
//! let flac = registry.find_by_extension(".flac");
//! assert!(flac.is_some());
//! ```

pub mod console;
pub mod ffmpeg;
pub mod fs;
pub mod host;
pub mod project;
pub mod sanitize;
