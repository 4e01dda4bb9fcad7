//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Console output on stderr, leaving stdout to progress text
//! - Configurable log levels
//! - JSON-formatted local file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use regionsplit::logging::init_logging;
//! use regionsplit::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! // Use tracing macros for logging
//! tracing::info!("Application started");
//! tracing::error!(error = "Something went wrong", "Error occurred");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log one rendered region
///
/// # Example
///
/// ```no_run
/// use regionsplit::log_region_rendered;
/// use std::path::Path;
///
/// log_region_rendered!(2, "Song B", Path::new("/out/02-Album-Song B.mp3"));
/// ```
#[macro_export]
macro_rules! log_region_rendered {
    ($track:expr, $region:expr, $path:expr) => {
        tracing::info!(
            track = $track,
            region = %$region,
            path = %$path.display(),
            "Rendered region"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use regionsplit::log_error_with_context;
/// use regionsplit::domain::RegionSplitError;
///
/// let error = RegionSplitError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
