//! In-memory renderer registry

use super::traits::{Renderer, RendererRegistry};
use std::sync::Arc;

/// Ordered set of renderers
///
/// Lookups return the first match, so renderers registered earlier win over later
/// ones with the same extension or name.
#[derive(Default, Clone)]
pub struct RendererSet {
    renderers: Vec<Arc<dyn Renderer>>,
}

impl RendererSet {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a renderer
    pub fn register(&mut self, renderer: Arc<dyn Renderer>) {
        tracing::debug!(
            renderer = %renderer.name(),
            extension = %renderer.extension(),
            templates = renderer.templates().len(),
            "Registered renderer"
        );
        self.renderers.push(renderer);
    }

    /// Builder-style [`RendererSet::register`]
    pub fn with(mut self, renderer: Arc<dyn Renderer>) -> Self {
        self.register(renderer);
        self
    }

    /// Number of registered renderers
    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    /// Returns true when nothing is registered
    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }
}

impl RendererRegistry for RendererSet {
    fn renderers(&self) -> Vec<Arc<dyn Renderer>> {
        self.renderers.clone()
    }
}

impl std::fmt::Debug for RendererSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.renderers.iter().map(|r| r.name().to_string()))
            .finish()
    }
}
