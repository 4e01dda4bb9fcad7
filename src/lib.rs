// Regionsplit - Export audio regions as separate tracks
// Copyright (c) 2025 Regionsplit Contributors
// Licensed under the MIT License

//! # Regionsplit - export audio regions as separate tracks
//!
//! Regionsplit renders every region of an audio document into its own encoded
//! file, named either by position (`MyAlbumd1t01.flac`) or by track and region
//! (`01-MyAlbum-Intro.mp3`).
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Resolving** the run configuration from script arguments and configuration
//! - **Choosing** the output directory and encoder template, interactively if needed
//! - **Rendering** each positive-length region through ffmpeg
//! - **Verifying** exported files against a SHA-256 manifest
//!
//! ## Architecture
//!
//! Regionsplit follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (export, verification)
//! - [`adapters`] - Host seams and their implementations (ffmpeg, project files, console)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use regionsplit::adapters::project::ProjectDocument;
//! use regionsplit::config::{load_config_or_default, ScriptArgs};
//! use regionsplit::core::export::{ExportCoordinator, RunConfiguration};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config_or_default("regionsplit.toml")?;
//!     let document = Some(ProjectDocument::load("album.toml")?);
//!
//!     let args: ScriptArgs = "mode=titled&type=.mp3&preset=0&dir=tracks".parse()?;
//!     let run = RunConfiguration::resolve(&args, &config.export)?;
//!
//!     let summary = ExportCoordinator::from_config(&config).run(&document, &run, false)?;
//!     println!("Exported {} regions", summary.files.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Naming
//!
//! ```rust
//! use regionsplit::core::export::{policy_for, NamingPolicy};
//! use regionsplit::domain::{ExportMode, Region};
//!
//! let region = Region::new("Intro", 0, 44_100);
//! let titled = policy_for(ExportMode::Titled);
//! assert_eq!(titled.compose("MyAlbum.wav", &region, 1, "mp3"), "01-MyAlbum-Intro.mp3");
//! ```
//!
//! ## Error Handling
//!
//! Every fallible operation returns [`domain::Result`], whose error type is
//! [`domain::RegionSplitError`]:
//!
//! ```rust,no_run
//! use regionsplit::domain::RegionSplitError;
//!
//! fn example() -> Result<(), RegionSplitError> {
//!     let config = regionsplit::config::load_config("regionsplit.toml")?;
//!     println!("{}", config.export.mode);
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
