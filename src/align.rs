//! Edge and center alignment over any set of [`Alignable`] objects.
//!
//! DESIGN
//! ======
//! Alignment is a translate-only correction pass against a single reference
//! line taken from the union box of the whole set:
//!
//! 1. Snapshot every item's world bounding box once.
//! 2. Union the snapshot; pick the reference value for the mode
//!    (`Left` → `min_x`, `HCenter` → `center_x`, ... `Bottom` → `max_y`).
//! 3. If every item already sits within `epsilon` of the reference, stop.
//! 4. Otherwise move each item along the mode's axis by
//!    `reference - item_reference`, skipping items within `epsilon`.
//!
//! Items are corrected independently against the same snapshot, so the order
//! of `items` never changes the result. The orthogonal axis is never touched.
//!
//! Planning is split from applying: [`plan`] is pure and returns the
//! per-item deltas, which a caller can keep (for example to build an undo
//! entry from [`AlignPlan::inverse`]) before handing it to [`apply_plan`].

#[cfg(test)]
#[path = "align_test.rs"]
mod align_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::AlignConfig;
use crate::geometry::BoundingBox;
use crate::transform::Transform;

// =============================================================================
// TYPES
// =============================================================================

/// Which edge or center line the set is aligned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignType {
    Left,
    HCenter,
    Right,
    Top,
    VCenter,
    Bottom,
}

/// The axis an alignment mode corrects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlignError {
    #[error("unknown alignment mode: {0:?} (expected left, hcenter, right, top, vcenter or bottom)")]
    UnknownMode(String),
}

impl AlignType {
    pub const ALL: [AlignType; 6] = [
        AlignType::Left,
        AlignType::HCenter,
        AlignType::Right,
        AlignType::Top,
        AlignType::VCenter,
        AlignType::Bottom,
    ];

    #[must_use]
    pub fn axis(self) -> Axis {
        match self {
            AlignType::Left | AlignType::HCenter | AlignType::Right => Axis::X,
            AlignType::Top | AlignType::VCenter | AlignType::Bottom => Axis::Y,
        }
    }

    /// The coordinate of `bbox` this mode aligns on.
    #[must_use]
    pub fn reference(self, bbox: &BoundingBox) -> f64 {
        match self {
            AlignType::Left => bbox.min_x(),
            AlignType::HCenter => bbox.center_x(),
            AlignType::Right => bbox.max_x(),
            AlignType::Top => bbox.min_y(),
            AlignType::VCenter => bbox.center_y(),
            AlignType::Bottom => bbox.max_y(),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AlignType::Left => "left",
            AlignType::HCenter => "hcenter",
            AlignType::Right => "right",
            AlignType::Top => "top",
            AlignType::VCenter => "vcenter",
            AlignType::Bottom => "bottom",
        }
    }

    /// Split a signed distance along this mode's axis into `(dx, dy)`.
    fn delta(self, distance: f64) -> (f64, f64) {
        match self.axis() {
            Axis::X => (distance, 0.0),
            Axis::Y => (0.0, distance),
        }
    }
}

impl fmt::Display for AlignType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlignType {
    type Err = AlignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(AlignType::Left),
            "hcenter" => Ok(AlignType::HCenter),
            "right" => Ok(AlignType::Right),
            "top" => Ok(AlignType::Top),
            "vcenter" => Ok(AlignType::VCenter),
            "bottom" => Ok(AlignType::Bottom),
            _ => Err(AlignError::UnknownMode(s.to_string())),
        }
    }
}

// =============================================================================
// ALIGNABLE
// =============================================================================

/// What a drawable must expose to take part in alignment.
///
/// Implementors provide the bounding box and a pure translation. The
/// transform accessors are derived from those two: the world transform is a
/// translation to the bounding box's top-left corner, and setting it moves the
/// object by the difference between the requested and current anchor.
pub trait Alignable {
    /// World-space AABB reflecting the object's current geometry.
    fn world_bounding_box(&self) -> BoundingBox;

    /// Shift every point of the object by `(dx, dy)`.
    fn translate(&mut self, dx: f64, dy: f64);

    /// Translation-only transform whose `(tx, ty)` is the top-left anchor.
    fn world_transform(&self) -> Transform {
        let anchor = self.world_bounding_box().top_left();
        Transform::translate(anchor.x, anchor.y)
    }

    /// Move the object so its anchor lands on `(transform.tx, transform.ty)`.
    ///
    /// Only the translation column is read; the linear part is ignored.
    fn set_world_transform(&mut self, transform: &Transform) {
        let anchor = self.world_transform().translation();
        self.translate(transform.tx - anchor.x, transform.ty - anchor.y);
    }
}

impl<T: Alignable + ?Sized> Alignable for &mut T {
    fn world_bounding_box(&self) -> BoundingBox {
        (**self).world_bounding_box()
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        (**self).translate(dx, dy);
    }

    fn world_transform(&self) -> Transform {
        (**self).world_transform()
    }

    fn set_world_transform(&mut self, transform: &Transform) {
        (**self).set_world_transform(transform);
    }
}

impl<T: Alignable + ?Sized> Alignable for Box<T> {
    fn world_bounding_box(&self) -> BoundingBox {
        (**self).world_bounding_box()
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        (**self).translate(dx, dy);
    }

    fn world_transform(&self) -> Transform {
        (**self).world_transform()
    }

    fn set_world_transform(&mut self, transform: &Transform) {
        (**self).set_world_transform(transform);
    }
}

// =============================================================================
// PLAN
// =============================================================================

/// A single item's move, by index into the planned slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Correction {
    pub index: usize,
    pub dx: f64,
    pub dy: f64,
}

/// The moves an alignment pass would make, computed from one box snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignPlan {
    pub mode: AlignType,
    /// Union of every snapshotted box.
    pub union: BoundingBox,
    /// Reference value taken from `union` for `mode`.
    pub reference: f64,
    /// Items that need to move. Empty when the set is already aligned.
    pub corrections: Vec<Correction>,
}

impl AlignPlan {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.corrections.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.corrections.len()
    }

    /// The plan that undoes this one when applied to the same items.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            corrections: self
                .corrections
                .iter()
                .map(|c| Correction { index: c.index, dx: -c.dx, dy: -c.dy })
                .collect(),
            ..self.clone()
        }
    }
}

/// Compute the corrections that align `boxes` under `mode`.
///
/// Returns `None` when there are fewer than two boxes: there is nothing to
/// align against, and that is not an error.
#[must_use]
pub fn plan(boxes: &[BoundingBox], mode: AlignType, config: &AlignConfig) -> Option<AlignPlan> {
    if boxes.len() < 2 {
        return None;
    }
    let union = BoundingBox::union_all(boxes)?;
    let reference = mode.reference(&union);
    let eps = config.epsilon;

    let already_aligned = boxes.iter().all(|b| (mode.reference(b) - reference).abs() <= eps);
    if already_aligned {
        return Some(AlignPlan { mode, union, reference, corrections: Vec::new() });
    }

    let corrections = boxes
        .iter()
        .enumerate()
        .filter_map(|(index, b)| {
            let distance = reference - mode.reference(b);
            if distance.abs() <= eps {
                return None;
            }
            let (dx, dy) = mode.delta(distance);
            Some(Correction { index, dx, dy })
        })
        .collect();

    Some(AlignPlan { mode, union, reference, corrections })
}

// =============================================================================
// APPLY
// =============================================================================

/// Apply a plan's corrections through each item's world transform.
///
/// Corrections whose index is out of range are skipped. Returns the number of
/// items moved.
pub fn apply_plan<T: Alignable>(items: &mut [T], plan: &AlignPlan) -> usize {
    let mut moved = 0;
    for c in &plan.corrections {
        let Some(item) = items.get_mut(c.index) else {
            tracing::warn!(index = c.index, len = plan.len(), "alignment correction out of range; skipped");
            continue;
        };
        let current = item.world_transform();
        let target = Transform::translate(current.tx + c.dx, current.ty + c.dy);
        item.set_world_transform(&target);
        tracing::trace!(index = c.index, dx = c.dx, dy = c.dy, "aligned item");
        moved += 1;
    }
    moved
}

/// Align `items` under `mode` with the default tolerance.
///
/// Returns `true` if at least one item moved.
pub fn align<T: Alignable>(items: &mut [T], mode: AlignType) -> bool {
    align_with(items, mode, &AlignConfig::default())
}

/// Align `items` under `mode` using `config.epsilon` as the tolerance.
///
/// Returns `true` if at least one item moved.
pub fn align_with<T: Alignable>(items: &mut [T], mode: AlignType, config: &AlignConfig) -> bool {
    let boxes: Vec<BoundingBox> = items.iter().map(Alignable::world_bounding_box).collect();

    let Some(plan) = plan(&boxes, mode, config) else {
        tracing::debug!(count = items.len(), %mode, "fewer than two alignable items; nothing to align");
        return false;
    };
    if plan.is_empty() {
        tracing::debug!(count = items.len(), %mode, reference = plan.reference, "already aligned");
        return false;
    }

    let moved = apply_plan(items, &plan);
    tracing::debug!(count = items.len(), moved, %mode, reference = plan.reference, "alignment applied");
    moved > 0
}
