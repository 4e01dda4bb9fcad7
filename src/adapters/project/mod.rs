//! Project-file backed documents

pub mod document;

pub use document::{ProjectDocument, ProjectFile};
