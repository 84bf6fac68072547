//! Color-key registry for pixel picking.
//!
//! DESIGN
//! ======
//! Every live primitive owns a unique 32-bit key. Drawing the scene with each
//! primitive filled by its key turns "which object is under this pixel" into a
//! map lookup on the sampled color.
//!
//! Allocation is serialized by a dedicated counter mutex: the counter
//! read-modify-write and the map insert happen while it is held, so two
//! callers can never be handed the same key. The map itself is split into
//! `REGISTRY_SHARDS` independently locked shards; lookups take a shard read
//! lock and releases a shard write lock, so neither waits on the allocator
//! or on each other unless they hit the same shard.
//!
//! TRADE-OFFS
//! ==========
//! The counter wraps back to the base before `0xFFFFFFFE`. Keys still live at
//! wrap time are skipped, but a lookup racing a release-then-reallocate of the
//! same key after a wrap can observe the new owner. That needs more than 2^24
//! allocations in one session and is accepted.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::consts::{COLOR_KEY_BASE, COLOR_KEY_LIMIT, COLOR_KEY_RGB_MASK, REGISTRY_SHARDS};

/// Number of distinct keys the counter cycles through.
const KEY_SPACE: u32 = COLOR_KEY_LIMIT - COLOR_KEY_BASE;

// =============================================================================
// TYPES
// =============================================================================

/// A 32-bit pick key, packed like [`Color`] (`0xAARRGGBB`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorKey(u32);

impl ColorKey {
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// The fill color that renders this key.
    #[must_use]
    pub const fn color(self) -> Color {
        Color::from_u32(self.0)
    }

    #[must_use]
    pub const fn from_color(color: Color) -> Self {
        Self(color.to_u32())
    }

    /// Whether this value reads back as background (no RGB bits set).
    #[must_use]
    pub const fn is_background(self) -> bool {
        self.0 & COLOR_KEY_RGB_MASK == 0
    }
}

impl fmt::Display for ColorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010X}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("color key space exhausted ({live} live keys)")]
    Exhausted { live: usize },
}

// =============================================================================
// REGISTRY
// =============================================================================

/// Concurrent key allocator and `key -> owner` lookup table.
///
/// `O` is the owner handle stored per key, typically a
/// [`PrimitiveId`](crate::primitive::PrimitiveId). The registry never owns the
/// objects themselves.
pub struct ColorKeyRegistry<O> {
    next: Mutex<u32>,
    shards: Box<[RwLock<HashMap<ColorKey, O>>]>,
}

impl<O> ColorKeyRegistry<O> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_counter(COLOR_KEY_BASE)
    }

    fn with_counter(next: u32) -> Self {
        let shards = (0..REGISTRY_SHARDS).map(|_| RwLock::new(HashMap::new())).collect();
        Self { next: Mutex::new(next), shards }
    }

    fn shard(&self, key: ColorKey) -> &RwLock<HashMap<ColorKey, O>> {
        &self.shards[key.0 as usize % self.shards.len()]
    }

    /// Assign the next free key to `owner`.
    ///
    /// # Errors
    ///
    /// Returns `Exhausted` if every key in the allocatable range is live.
    pub fn allocate(&self, owner: O) -> Result<ColorKey, RegistryError> {
        let mut next = self.next.lock().unwrap_or_else(PoisonError::into_inner);
        let mut candidate = *next;

        for _ in 0..=KEY_SPACE {
            if candidate >= COLOR_KEY_LIMIT || candidate < COLOR_KEY_BASE {
                tracing::warn!(counter = candidate, "color key counter wrapped to base");
                candidate = COLOR_KEY_BASE;
            }
            let key = ColorKey(candidate);
            candidate += 1;
            if key.is_background() {
                continue;
            }

            let mut shard = self.shard(key).write().unwrap_or_else(PoisonError::into_inner);
            match shard.entry(key) {
                Entry::Vacant(slot) => {
                    slot.insert(owner);
                    *next = candidate;
                    tracing::trace!(%key, "color key allocated");
                    return Ok(key);
                }
                Entry::Occupied(_) => {
                    tracing::debug!(%key, "color key still live; skipping");
                }
            }
        }

        Err(RegistryError::Exhausted { live: self.len() })
    }

    /// Remove `key`'s mapping. Unknown or already-released keys are ignored.
    pub fn release(&self, key: ColorKey) {
        let removed = self
            .shard(key)
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&key);
        if removed.is_some() {
            tracing::trace!(%key, "color key released");
        }
    }

    #[must_use]
    pub fn contains(&self, key: ColorKey) -> bool {
        self.shard(key)
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&key)
    }

    /// Number of live keys across all shards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shards
            .iter()
            .map(|s| s.read().unwrap_or_else(PoisonError::into_inner).len())
            .sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<O: Clone> ColorKeyRegistry<O> {
    /// The owner currently mapped to `key`, if any.
    #[must_use]
    pub fn lookup(&self, key: ColorKey) -> Option<O> {
        self.shard(key)
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned()
    }

    /// Resolve a pixel sampled from a pick buffer to its owner.
    ///
    /// Background pixels (no RGB bits) never resolve.
    #[must_use]
    pub fn pick(&self, sampled: Color) -> Option<O> {
        let key = ColorKey::from_color(sampled);
        if key.is_background() {
            return None;
        }
        self.lookup(key)
    }
}

impl<O> Default for ColorKeyRegistry<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O> fmt::Debug for ColorKeyRegistry<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorKeyRegistry")
            .field("live", &self.len())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// LEASE
// =============================================================================

/// A key held on behalf of one owner; released when dropped.
pub struct ColorKeyLease<O> {
    registry: Arc<ColorKeyRegistry<O>>,
    key: ColorKey,
}

impl<O> ColorKeyLease<O> {
    /// Allocate a key for `owner` from `registry`.
    ///
    /// # Errors
    ///
    /// Propagates `Exhausted` from [`ColorKeyRegistry::allocate`].
    pub fn acquire(registry: &Arc<ColorKeyRegistry<O>>, owner: O) -> Result<Self, RegistryError> {
        let key = registry.allocate(owner)?;
        Ok(Self { registry: Arc::clone(registry), key })
    }

    #[must_use]
    pub fn key(&self) -> ColorKey {
        self.key
    }

    #[must_use]
    pub fn registry(&self) -> &Arc<ColorKeyRegistry<O>> {
        &self.registry
    }

    /// Release the key now instead of at end of scope.
    pub fn release(self) {
        drop(self);
    }
}

impl<O> Drop for ColorKeyLease<O> {
    fn drop(&mut self) {
        self.registry.release(self.key);
    }
}

impl<O> fmt::Debug for ColorKeyLease<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorKeyLease").field("key", &self.key).finish()
    }
}
