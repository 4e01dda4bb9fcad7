//! Configuration loader with TOML parsing and environment variable overrides

use super::args::parse_bool;
use super::schema::RegionSplitConfig;
use crate::domain::errors::RegionSplitError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into RegionSplitConfig
/// 4. Applies environment variable overrides (REGIONSPLIT_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use regionsplit::config::loader::load_config;
///
/// let config = load_config("regionsplit.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<RegionSplitConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(RegionSplitError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        RegionSplitError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: RegionSplitConfig = toml::from_str(&contents)
        .map_err(|e| RegionSplitError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        RegionSplitError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Loads configuration, falling back to built-in defaults when the file is absent
///
/// Environment overrides apply in both cases.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be loaded, or if the resulting
/// configuration is invalid.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<RegionSplitConfig> {
    let path = path.as_ref();
    if path.exists() {
        return load_config(path);
    }

    tracing::debug!(
        path = %path.display(),
        "Configuration file not found, using defaults"
    );

    let mut config = RegionSplitConfig::default();
    apply_env_overrides(&mut config)?;
    config.validate().map_err(|e| {
        RegionSplitError::Configuration(format!("Configuration validation failed: {}", e))
    })?;
    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| RegionSplitError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    // Process line by line to skip comments
    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(RegionSplitError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using REGIONSPLIT_* prefix
///
/// Environment variables follow the pattern: REGIONSPLIT_<SECTION>_<KEY>
/// For example: REGIONSPLIT_EXPORT_DIR, REGIONSPLIT_ENCODER_FFMPEG_PATH
fn apply_env_overrides(config: &mut RegionSplitConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("REGIONSPLIT_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Some(val) = env_bool("REGIONSPLIT_APPLICATION_NON_INTERACTIVE")? {
        config.application.non_interactive = val;
    }

    // Export overrides
    if let Ok(val) = std::env::var("REGIONSPLIT_EXPORT_MODE") {
        config.export.mode = val.parse().map_err(RegionSplitError::Configuration)?;
    }
    if let Ok(val) = std::env::var("REGIONSPLIT_EXPORT_FORMAT") {
        config.export.format = val;
    }
    if let Ok(val) = std::env::var("REGIONSPLIT_EXPORT_PRESET") {
        config.export.preset = val;
    }
    if let Ok(val) = std::env::var("REGIONSPLIT_EXPORT_DIR") {
        config.export.dir = val;
    }
    if let Some(val) = env_bool("REGIONSPLIT_EXPORT_DRY_RUN")? {
        config.export.dry_run = val;
    }
    if let Some(val) = env_bool("REGIONSPLIT_EXPORT_WRITE_MANIFEST")? {
        config.export.write_manifest = val;
    }

    // Encoder overrides
    if let Ok(val) = std::env::var("REGIONSPLIT_ENCODER_FFMPEG_PATH") {
        config.encoder.ffmpeg_path = val;
    }

    // Logging overrides
    if let Some(val) = env_bool("REGIONSPLIT_LOGGING_LOCAL_ENABLED")? {
        config.logging.local_enabled = val;
    }
    if let Ok(val) = std::env::var("REGIONSPLIT_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}

/// Boolean environment variable, `None` when unset
///
/// # Errors
///
/// Returns a configuration error when the variable is set to something other than a
/// boolean.
fn env_bool(name: &str) -> Result<Option<bool>> {
    match std::env::var(name) {
        Ok(val) => parse_bool(&val).map(Some).ok_or_else(|| {
            RegionSplitError::Configuration(format!("{name} must be a boolean, got '{val}'"))
        }),
        Err(_) => Ok(None),
    }
}
