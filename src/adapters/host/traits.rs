//! Host collaborator traits
//!
//! These traits describe everything the export pipeline needs from the outside world:
//! the open document, the encoder registry, interactive choosers, the filesystem,
//! filename sanitizing and status output.

use crate::core::export::resolver::EncoderBinding;
use crate::domain::{Preset, Region, Result, SampleRange, TrackMetadata};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// One render of a document range to a file
#[derive(Debug)]
pub struct RenderRequest<'a> {
    /// Target file
    pub path: &'a Path,

    /// Renderer and preset to encode with
    pub binding: &'a EncoderBinding,

    /// Exact range of the document to render
    pub range: SampleRange,

    /// Metadata embedded into this file only
    pub metadata: Option<&'a TrackMetadata>,
}

/// Everything a renderer needs to encode one file
#[derive(Debug)]
pub struct EncodeJob<'a> {
    /// Decoded audio source of the document
    pub source: &'a Path,

    /// Range of the source to encode
    pub range: SampleRange,

    /// Template to encode with
    pub preset: &'a Preset,

    /// Metadata to embed
    pub metadata: Option<&'a TrackMetadata>,

    /// Target file
    pub output: &'a Path,
}

/// An open audio document
///
/// Rendering is synchronous: `render` returns once the file is completely written.
pub trait Document {
    /// Display title (may carry a file extension)
    fn title(&self) -> &str;

    /// Path of the audio file the document was opened from
    fn source_path(&self) -> &Path;

    /// Markers and regions in stored order
    fn regions(&self) -> &[Region];

    /// Render a range of the document through the bound encoder
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::RegionSplitError::Render`] when the encoder fails.
    fn render(&self, request: &RenderRequest<'_>) -> Result<()>;
}

/// Source of the currently open document
pub trait DocumentProvider {
    /// The open document, if any
    fn current_document(&self) -> Option<&dyn Document>;
}

impl<D: Document> DocumentProvider for Option<D> {
    fn current_document(&self) -> Option<&dyn Document> {
        self.as_ref().map(|d| d as &dyn Document)
    }
}

/// An encoder capability producing one output format
pub trait Renderer: Send + Sync {
    /// Display name, e.g. "FLAC Audio"
    fn name(&self) -> &str;

    /// Unique identifier
    fn id(&self) -> &str;

    /// Canonical file extension without the leading dot
    fn extension(&self) -> &str;

    /// Available templates in index order
    fn templates(&self) -> &[Preset];

    /// Template with the given name
    ///
    /// Exact matches win over ASCII case-insensitive ones.
    fn template_by_name(&self, name: &str) -> Option<Preset> {
        let templates = self.templates();
        templates
            .iter()
            .find(|t| t.name == name)
            .or_else(|| templates.iter().find(|t| t.name.eq_ignore_ascii_case(name)))
            .cloned()
    }

    /// Template at a zero-based index
    fn template_by_index(&self, index: i32) -> Option<Preset> {
        let index = usize::try_from(index).ok()?;
        self.templates().get(index).cloned()
    }

    /// Encode one job to disk
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::RegionSplitError::Render`] when encoding fails.
    fn encode(&self, job: &EncodeJob<'_>) -> Result<()>;
}

/// Lookup of renderers by extension or name
pub trait RendererRegistry {
    /// All registered renderers
    fn renderers(&self) -> Vec<Arc<dyn Renderer>>;

    /// Renderer producing files with the given extension (leading dot optional)
    fn find_by_extension(&self, extension: &str) -> Option<Arc<dyn Renderer>> {
        let wanted = extension.trim_start_matches('.');
        self.renderers()
            .into_iter()
            .find(|r| r.extension().eq_ignore_ascii_case(wanted))
    }

    /// Renderer with the given display name or id
    fn find_by_name(&self, name: &str) -> Option<Arc<dyn Renderer>> {
        self.renderers()
            .into_iter()
            .find(|r| r.name().eq_ignore_ascii_case(name) || r.id().eq_ignore_ascii_case(name))
    }
}

/// Interactive choosers
pub trait Prompter {
    /// Ask for a target directory; `None` or an empty path means cancelled
    fn choose_directory(&self, message: &str, start: &Path) -> Option<PathBuf>;

    /// Ask for one of the renderer's templates
    fn choose_template(&self, renderer: &dyn Renderer) -> Option<Preset>;
}

/// Filesystem primitives used by the pipeline
pub trait FileSystem {
    /// Whether a path is absolute on this platform
    fn is_absolute(&self, path: &Path) -> bool {
        path.is_absolute()
    }

    /// Join a path onto a base
    fn join(&self, base: &Path, path: &Path) -> PathBuf {
        base.join(path)
    }

    /// Create a directory and its parents; succeeds if it already exists
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Whether a file exists
    fn exists(&self, path: &Path) -> bool;

    /// Delete a file
    fn remove_file(&self, path: &Path) -> Result<()>;
}

/// Maps arbitrary text to a safe file name
pub trait FilenameSanitizer {
    /// Deterministic, total mapping of a raw name to a filesystem-safe name
    fn sanitize(&self, raw: &str) -> String;
}

/// Progress and status output
pub trait StatusSink {
    /// Replace the host's status line
    fn set_status_text(&self, text: &str);

    /// Append a progress line
    fn output_text(&self, text: &str);

    /// Show an informational notification
    fn notify(&self, message: &str, title: &str);
}
