//! ffmpeg-backed renderers
//!
//! Each renderer owns an output extension and a list of templates whose arguments are
//! passed straight to `ffmpeg`. Regions are cut sample-exactly with the `atrim` filter.

pub mod builtin;
pub mod renderer;

pub use builtin::{builtin_renderers, registry_from_config};
pub use renderer::FfmpegRenderer;
