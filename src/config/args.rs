//! Script argument maps
//!
//! Run overrides arrive as a flat `key=value` list joined with `&`, for example
//! `type=.wav&dir=f:\RegionFiles`. Keys are case-insensitive. An absent key and a key
//! with an empty value are treated the same: the caller's default applies.

use crate::domain::{RegionSplitError, Result};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Key carrying the output format (extension or renderer name)
pub const ARG_FORMAT: &str = "type";
/// Key carrying the preset name or index
pub const ARG_PRESET: &str = "preset";
/// Key carrying the output directory
pub const ARG_DIR: &str = "dir";
/// Key carrying the export mode
pub const ARG_MODE: &str = "mode";
/// Key toggling the checksum manifest
pub const ARG_MANIFEST: &str = "manifest";

/// Lenient boolean: `true/false`, `yes/no`, `on/off` or `1/0`, case-insensitively
///
/// ```
/// use regionsplit::config::args::parse_bool;
///
/// assert_eq!(parse_bool(" Yes "), Some(true));
/// assert_eq!(parse_bool("0"), Some(false));
/// assert_eq!(parse_bool("maybe"), None);
/// ```
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// Parsed `key=value&key=value` overrides
///
/// # Examples
///
/// ```
/// use regionsplit::config::ScriptArgs;
///
/// let args: ScriptArgs = "type=.wav&dir=f:\\RegionFiles".parse().unwrap();
/// assert_eq!(args.string("type", ".flac"), ".wav");
/// assert_eq!(args.string("preset", "Default Template"), "Default Template");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptArgs {
    values: BTreeMap<String, String>,
}

impl ScriptArgs {
    /// Empty argument map
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value, replacing any earlier one for the same key
    pub fn insert(&mut self, key: impl AsRef<str>, value: impl Into<String>) {
        self.values
            .insert(key.as_ref().trim().to_lowercase(), value.into());
    }

    /// Merge another map over this one
    pub fn extend(&mut self, other: ScriptArgs) {
        self.values.extend(other.values);
    }

    /// Raw value of a key, `None` when absent or empty
    pub fn value_of(&self, key: &str) -> Option<&str> {
        self.values
            .get(&key.to_lowercase())
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// String value or the default
    pub fn string(&self, key: &str, default: &str) -> String {
        self.value_of(key).unwrap_or(default).to_string()
    }

    /// Integer value or the default
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the value is present but not an integer.
    pub fn int(&self, key: &str, default: i64) -> Result<i64> {
        match self.value_of(key) {
            None => Ok(default),
            Some(raw) => raw.trim().parse().map_err(|_| {
                RegionSplitError::Configuration(format!(
                    "Script argument '{key}' must be an integer, got '{raw}'"
                ))
            }),
        }
    }

    /// Boolean value or the default
    ///
    /// Accepts `true/false`, `yes/no`, `on/off` and `1/0`, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the value is present but not a boolean.
    pub fn bool(&self, key: &str, default: bool) -> Result<bool> {
        match self.value_of(key) {
            None => Ok(default),
            Some(raw) => parse_bool(raw).ok_or_else(|| {
                RegionSplitError::Configuration(format!(
                    "Script argument '{key}' must be a boolean, got '{raw}'"
                ))
            }),
        }
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true when no key is set
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromStr for ScriptArgs {
    type Err = RegionSplitError;

    fn from_str(s: &str) -> Result<Self> {
        let mut args = ScriptArgs::new();
        for pair in s.split('&').filter(|p| !p.trim().is_empty()) {
            let (key, value) = pair.split_once('=').ok_or_else(|| {
                RegionSplitError::Configuration(format!(
                    "Script argument '{pair}' is not of the form key=value"
                ))
            })?;
            if key.trim().is_empty() {
                return Err(RegionSplitError::Configuration(format!(
                    "Script argument '{pair}' has an empty key"
                )));
            }
            args.insert(key, value);
        }
        Ok(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pairs() {
        let args: ScriptArgs = "type=.wav&dir=f:\\RegionFiles".parse().unwrap();
        assert_eq!(args.len(), 2);
        assert_eq!(args.value_of("type"), Some(".wav"));
        assert_eq!(args.value_of("dir"), Some("f:\\RegionFiles"));
    }

    #[test]
    fn test_keys_are_case_insensitive() {
        let args: ScriptArgs = "Preset=320 Kbps, CD Quality".parse().unwrap();
        assert_eq!(args.string("PRESET", ""), "320 Kbps, CD Quality");
    }

    #[test]
    fn test_empty_value_uses_default() {
        let args: ScriptArgs = "type=&dir=out".parse().unwrap();
        assert_eq!(args.string("type", ".mp3"), ".mp3");
        assert_eq!(args.value_of("type"), None);
    }

    #[test]
    fn test_value_may_contain_equals() {
        let args: ScriptArgs = "preset=a=b".parse().unwrap();
        assert_eq!(args.string("preset", ""), "a=b");
    }

    #[test]
    fn test_empty_input_and_stray_separators() {
        assert!("".parse::<ScriptArgs>().unwrap().is_empty());
        let args: ScriptArgs = "&type=.ogg&&".parse().unwrap();
        assert_eq!(args.len(), 1);
    }

    #[test]
    fn test_malformed_pairs_rejected() {
        assert!("type".parse::<ScriptArgs>().is_err());
        assert!("=.wav".parse::<ScriptArgs>().is_err());
    }

    #[test]
    fn test_int_accessor() {
        let args: ScriptArgs = "count=12&bad=x".parse().unwrap();
        assert_eq!(args.int("count", 0).unwrap(), 12);
        assert_eq!(args.int("missing", 7).unwrap(), 7);
        assert!(args.int("bad", 0).is_err());
    }

    #[test]
    fn test_bool_accessor() {
        let args: ScriptArgs = "manifest=Yes&quiet=0&bad=maybe".parse().unwrap();
        assert!(args.bool("manifest", false).unwrap());
        assert!(!args.bool("quiet", true).unwrap());
        assert!(args.bool("missing", true).unwrap());
        assert!(args.bool("bad", false).is_err());
    }

    #[test]
    fn test_extend_overrides() {
        let mut base: ScriptArgs = "type=.flac&dir=a".parse().unwrap();
        base.extend("dir=b".parse().unwrap());
        assert_eq!(base.string("type", ""), ".flac");
        assert_eq!(base.string("dir", ""), "b");
    }
}
