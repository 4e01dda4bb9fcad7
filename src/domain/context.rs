//! Error context extension trait
//!
//! Adds `.context()` and `.with_context()` to results whose error converts into
//! [`RegionSplitError`], the way `anyhow::Context` does, while keeping the domain error
//! type in library code.
//!
//! # Examples
//!
//! ```rust
//! use regionsplit::domain::Result;
//! use regionsplit::domain::context::ResultExt;
//!
//! fn read_project(path: &str) -> Result<String> {
//!     std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))
//! }
//! ```

use crate::domain::errors::RegionSplitError;
use crate::domain::result::Result;
use std::fmt::Display;

/// Extension trait for adding context to `Result` types
pub trait ResultExt<T> {
    /// Prefix the error message with `context`
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display;

    /// Prefix the error message with a lazily built context
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<RegionSplitError>,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display,
    {
        self.map_err(|e| wrap(e.into(), context))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| wrap(e.into(), f()))
    }
}

// Keeps the variant so callers can still match on the error kind.
fn wrap(error: RegionSplitError, context: impl Display) -> RegionSplitError {
    match error {
        RegionSplitError::Io(msg) => RegionSplitError::Io(format!("{context}: {msg}")),
        RegionSplitError::Project(msg) => RegionSplitError::Project(format!("{context}: {msg}")),
        RegionSplitError::Configuration(msg) => {
            RegionSplitError::Configuration(format!("{context}: {msg}"))
        }
        RegionSplitError::Serialization(msg) => {
            RegionSplitError::Serialization(format!("{context}: {msg}"))
        }
        RegionSplitError::Render { path, reason } => RegionSplitError::Render {
            path,
            reason: format!("{context}: {reason}"),
        },
        other => other,
    }
}
