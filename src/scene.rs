//! In-memory store of live primitives.
//!
//! The scene owns every primitive, remembers insertion order for drawing, and
//! shares one [`ColorKeyRegistry`](crate::registry::ColorKeyRegistry) with all
//! of them. Removing a primitive drops it, which releases its color key, so a
//! pick can never resolve to a shape that is no longer in the scene.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::align::{AlignType, align_with};
use crate::color::Color;
use crate::config::AlignConfig;
use crate::geometry::BoundingBox;
use crate::primitive::{self, Primitive, PrimitiveId, PrimitiveKind, PropValue, PropertyError, SharedRegistry};
use crate::registry::{ColorKeyRegistry, RegistryError};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SceneError {
    #[error("primitive {0} holds a key from another registry")]
    ForeignRegistry(PrimitiveId),
    #[error("primitive not found: {0}")]
    NotFound(PrimitiveId),
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Property(#[from] PropertyError),
}

/// Owner of every primitive drawn on one surface.
#[derive(Debug)]
pub struct Scene {
    registry: SharedRegistry,
    objects: HashMap<PrimitiveId, Box<dyn Primitive>>,
    order: Vec<PrimitiveId>,
}

impl Scene {
    /// Create an empty scene with its own registry.
    #[must_use]
    pub fn new() -> Self {
        Self::with_registry(Arc::new(ColorKeyRegistry::new()))
    }

    /// Create an empty scene that allocates from `registry`.
    #[must_use]
    pub fn with_registry(registry: SharedRegistry) -> Self {
        Self { registry, objects: HashMap::new(), order: Vec::new() }
    }

    #[must_use]
    pub fn registry(&self) -> &SharedRegistry {
        &self.registry
    }

    /// Add a primitive built against this scene's registry.
    ///
    /// # Errors
    ///
    /// Returns `ForeignRegistry` if its color key came from another registry;
    /// a pick through this scene could never find it.
    pub fn insert(&mut self, primitive: Box<dyn Primitive>) -> Result<PrimitiveId, SceneError> {
        let id = primitive.id();
        if !Arc::ptr_eq(primitive.header().registry(), &self.registry) {
            return Err(SceneError::ForeignRegistry(id));
        }
        if self.objects.insert(id, primitive).is_none() {
            self.order.push(id);
        }
        Ok(id)
    }

    /// Create a default primitive of `kind` and add it.
    ///
    /// # Errors
    ///
    /// Propagates `Exhausted` from the registry.
    pub fn spawn(&mut self, kind: PrimitiveKind) -> Result<PrimitiveId, SceneError> {
        let created = primitive::spawn(&self.registry, kind)?;
        self.insert(created)
    }

    /// Remove a primitive, returning it if it was present. Its key stays
    /// registered until the returned box is dropped.
    pub fn remove(&mut self, id: &PrimitiveId) -> Option<Box<dyn Primitive>> {
        let removed = self.objects.remove(id)?;
        self.order.retain(|o| o != id);
        tracing::trace!(%id, "primitive removed");
        Some(removed)
    }

    #[must_use]
    pub fn get(&self, id: &PrimitiveId) -> Option<&dyn Primitive> {
        self.objects.get(id).map(|p| &**p)
    }

    pub fn get_mut(&mut self, id: &PrimitiveId) -> Option<&mut (dyn Primitive + 'static)> {
        self.objects.get_mut(id).map(|p| &mut **p)
    }

    /// Set one property on one primitive.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for unknown ids, otherwise whatever the property
    /// rejects.
    pub fn set_property(&mut self, id: &PrimitiveId, name: &str, value: PropValue) -> Result<(), SceneError> {
        let target = self.objects.get_mut(id).ok_or(SceneError::NotFound(*id))?;
        target.set_property(name, value)?;
        Ok(())
    }

    /// Primitives in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Primitive> {
        self.order.iter().filter_map(|id| self.objects.get(id)).map(|p| &**p)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Union of every primitive's bounding box, or `None` for an empty scene.
    #[must_use]
    pub fn bounds(&self) -> Option<BoundingBox> {
        let boxes: Vec<BoundingBox> = self.iter().map(|p| p.world_bounding_box()).collect();
        BoundingBox::union_all(&boxes)
    }

    /// Resolve a color sampled from the pick buffer to a primitive in this scene.
    #[must_use]
    pub fn pick(&self, sampled: Color) -> Option<PrimitiveId> {
        let id = self.registry.pick(sampled)?;
        self.objects.contains_key(&id).then_some(id)
    }

    /// Align the primitives named by `ids`. Unknown and repeated ids are
    /// ignored. Returns `true` if anything moved.
    pub fn align(&mut self, ids: &[PrimitiveId], mode: AlignType, config: &AlignConfig) -> bool {
        let wanted: HashSet<&PrimitiveId> = ids.iter().collect();
        let mut selected: Vec<&mut Box<dyn Primitive>> = self
            .objects
            .iter_mut()
            .filter(|(id, _)| wanted.contains(id))
            .map(|(_, p)| p)
            .collect();
        if selected.len() < wanted.len() {
            tracing::debug!(requested = wanted.len(), found = selected.len(), "some selected ids are not in the scene");
        }
        align_with(&mut selected, mode, config)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
