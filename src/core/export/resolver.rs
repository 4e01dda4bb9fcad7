//! Run configuration, output directory and encoder resolution
//!
//! Everything here runs before the first region is touched. Resolution never creates,
//! deletes or renders anything.

use crate::adapters::host::{FileSystem, Prompter, Renderer, RendererRegistry};
use crate::config::args::{ARG_DIR, ARG_FORMAT, ARG_MODE, ARG_PRESET};
use crate::config::{ExportConfig, ScriptArgs};
use crate::domain::{ExportMode, Preset, PresetId, RegionSplitError, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Message shown by the directory chooser
pub const CHOOSE_DIRECTORY_MESSAGE: &str = "Select the target folder for saved files:";

/// Parameters of one export run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfiguration {
    /// Naming and metadata policy
    pub mode: ExportMode,

    /// Extension with a leading dot, or a renderer name
    pub format: String,

    /// Template selector
    pub preset: PresetId,

    /// Output directory as given; empty asks the chooser
    pub dir: String,
}

impl RunConfiguration {
    /// Layer script arguments over configured defaults
    ///
    /// Every field falls back independently: an absent or empty argument takes the
    /// configured value, and an empty configured value takes the mode default.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the `mode` argument names no known mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use regionsplit::config::{ExportConfig, ScriptArgs};
    /// use regionsplit::core::export::RunConfiguration;
    /// use regionsplit::domain::{ExportMode, PresetId};
    ///
    /// let args: ScriptArgs = "mode=titled&preset=0".parse().unwrap();
    /// let run = RunConfiguration::resolve(&args, &ExportConfig::default()).unwrap();
    /// assert_eq!(run.mode, ExportMode::Titled);
    /// assert_eq!(run.format, ".mp3");
    /// assert_eq!(run.preset, PresetId::ByIndex(0));
    /// ```
    pub fn resolve(args: &ScriptArgs, defaults: &ExportConfig) -> Result<Self> {
        let mode = match args.value_of(ARG_MODE) {
            Some(raw) => raw.parse().map_err(RegionSplitError::Configuration)?,
            None => defaults.mode,
        };

        let format = args.string(ARG_FORMAT, or_default(&defaults.format, mode.default_format()));
        let preset = args.string(ARG_PRESET, or_default(&defaults.preset, mode.default_preset()));
        let dir = args.string(ARG_DIR, &defaults.dir);

        Ok(Self {
            mode,
            format,
            preset: PresetId::parse(&preset),
            dir,
        })
    }
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() {
        default
    } else {
        value
    }
}

/// Output directory of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDirectory {
    /// Absolute, or relative to the working directory only when the source is
    pub path: PathBuf,

    /// The user picked the folder in the chooser
    pub chosen_interactively: bool,
}

/// Resolve the output directory against the document's source file
///
/// An empty `dir` opens the chooser, starting at the source file's folder. A relative
/// directory, typed or chosen, is joined onto that folder.
///
/// # Errors
///
/// Returns [`RegionSplitError::NoOutputDirectory`] when the chooser is cancelled or
/// returns an empty path.
pub fn resolve_directory(
    dir: &str,
    source: &Path,
    prompter: &dyn Prompter,
    fs: &dyn FileSystem,
) -> Result<OutputDirectory> {
    let source_folder = source.parent().unwrap_or_else(|| Path::new(""));

    let (raw, chosen_interactively) = if dir.is_empty() {
        tracing::debug!(start = %source_folder.display(), "Asking for the output directory");
        let chosen = prompter
            .choose_directory(CHOOSE_DIRECTORY_MESSAGE, source_folder)
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or(RegionSplitError::NoOutputDirectory)?;
        (chosen, true)
    } else {
        (PathBuf::from(dir), false)
    };

    let path = if fs.is_absolute(&raw) {
        raw
    } else {
        fs.join(source_folder, &raw)
    };

    Ok(OutputDirectory {
        path,
        chosen_interactively,
    })
}

/// A renderer bound to one of its templates
#[derive(Clone)]
pub struct EncoderBinding {
    renderer: Arc<dyn Renderer>,
    preset: Preset,
}

impl EncoderBinding {
    /// Bind a renderer to a template
    pub fn new(renderer: Arc<dyn Renderer>, preset: Preset) -> Self {
        Self { renderer, preset }
    }

    /// The bound renderer
    pub fn renderer(&self) -> &Arc<dyn Renderer> {
        &self.renderer
    }

    /// The bound template
    pub fn preset(&self) -> &Preset {
        &self.preset
    }

    /// Extension of produced files, without the leading dot
    pub fn extension(&self) -> &str {
        self.renderer.extension()
    }
}

impl fmt::Debug for EncoderBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncoderBinding")
            .field("renderer", &self.renderer.name())
            .field("id", &self.renderer.id())
            .field("preset", &self.preset.name)
            .finish()
    }
}

/// Find the renderer for a format and bind it to the requested template
///
/// A format starting with `.` is an extension; anything else is a renderer name.
///
/// # Errors
///
/// - [`RegionSplitError::EncoderNotFound`] when no renderer matches the format
/// - [`RegionSplitError::TemplateNotFound`] when the template lookup or chooser
///   yields nothing
pub fn resolve_encoder(
    registry: &dyn RendererRegistry,
    prompter: &dyn Prompter,
    format: &str,
    preset: &PresetId,
) -> Result<EncoderBinding> {
    let renderer = if format.starts_with('.') {
        registry.find_by_extension(format)
    } else {
        registry.find_by_name(format)
    }
    .ok_or_else(|| RegionSplitError::EncoderNotFound {
        format: format.to_string(),
    })?;

    if preset.is_interactive() {
        tracing::debug!(renderer = %renderer.name(), "Asking for the template");
    }

    let template = match preset {
        PresetId::ByIndex(index) => renderer.template_by_index(*index),
        PresetId::ByName(name) => renderer.template_by_name(name),
        PresetId::Interactive => prompter.choose_template(renderer.as_ref()),
    }
    .ok_or_else(|| RegionSplitError::TemplateNotFound {
        preset: preset.to_string(),
    })?;

    tracing::debug!(
        renderer = %renderer.name(),
        preset = %template.name,
        "Encoder resolved"
    );

    Ok(EncoderBinding::new(renderer, template))
}
