//! Host abstraction layer
//!
//! This module provides the trait-based seam between the export pipeline and the
//! application hosting the open document.

pub mod registry;
pub mod traits;

pub use registry::RendererSet;
pub use traits::{
    Document, DocumentProvider, EncodeJob, FileSystem, FilenameSanitizer, Prompter,
    RenderRequest, Renderer, RendererRegistry, StatusSink,
};
