//! Encoder presets (templates) and preset identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the preset of a run is selected
///
/// Decided once while resolving the run configuration: empty text asks the
/// interactive chooser, integer text selects by template index, anything else by name.
///
/// # Examples
///
/// ```
/// use regionsplit::domain::PresetId;
///
/// assert_eq!(PresetId::parse(""), PresetId::Interactive);
/// assert_eq!(PresetId::parse(" 2 "), PresetId::ByIndex(2));
/// assert_eq!(
///     PresetId::parse("320 Kbps, CD Quality"),
///     PresetId::ByName("320 Kbps, CD Quality".to_string())
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresetId {
    /// Look the template up by its name
    ByName(String),
    /// Look the template up by its zero-based index
    ByIndex(i32),
    /// Let the user pick a template
    Interactive,
}

impl PresetId {
    /// Classifies raw preset text
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return PresetId::Interactive;
        }
        match raw.trim().parse::<i32>() {
            Ok(index) => PresetId::ByIndex(index),
            Err(_) => PresetId::ByName(raw.to_string()),
        }
    }

    /// Returns true when the template chooser must be shown
    pub fn is_interactive(&self) -> bool {
        matches!(self, PresetId::Interactive)
    }
}

impl fmt::Display for PresetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresetId::ByName(name) => write!(f, "{name}"),
            PresetId::ByIndex(index) => write!(f, "{index}"),
            PresetId::Interactive => Ok(()),
        }
    }
}

/// An encoding template exposed by a renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    /// Position in the renderer's template list
    #[serde(default)]
    pub index: usize,

    /// Display name
    pub name: String,

    /// Encoder arguments applied when rendering with this template
    #[serde(default)]
    pub args: Vec<String>,
}

impl Preset {
    /// Creates a new preset
    pub fn new(index: usize, name: impl Into<String>, args: &[&str]) -> Self {
        Self {
            index,
            name: name.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}
