use indexmap::IndexMap;
use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::render::DrawingSurface;

/// Named drawing surfaces, kept in registration order.
#[derive(Debug)]
pub struct SurfaceRegistry<S> {
    surfaces: IndexMap<String, S>,
}

impl<S> Default for SurfaceRegistry<S> {
    fn default() -> Self {
        Self {
            surfaces: IndexMap::new(),
        }
    }
}

impl<S: DrawingSurface> SurfaceRegistry<S> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `surface` under `id`, returning any surface it replaces.
    pub fn insert(&mut self, id: impl Into<String>, surface: S) -> Option<S> {
        let id = id.into();
        debug!(surface_id = %id, viewport = ?surface.viewport(), "register surface");
        self.surfaces.insert(id, surface)
    }

    pub fn remove(&mut self, id: &str) -> Option<S> {
        self.surfaces.shift_remove(id)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&S> {
        self.surfaces.get(id)
    }

    /// Looks up the surface a chart should draw on.
    pub fn resolve(&mut self, id: &str) -> ChartResult<&mut S> {
        self.surfaces
            .get_mut(id)
            .ok_or_else(|| ChartError::SurfaceNotFound { id: id.to_owned() })
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.surfaces.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }
}
