//! Points and axis-aligned bounding boxes.
//!
//! `BoundingBox` is an immutable value: every query on a shape builds a fresh
//! one, and nothing in the crate mutates a box in place. The `min <= max`
//! ordering is checked once at construction; every other constructor derives
//! its extents with `min`/`max` so the ordering holds by construction.
//!
//! Equality is exact component-wise float comparison. Callers that need fuzzy
//! comparison apply their own epsilon (see [`crate::align`]).

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use std::fmt;

use serde::Serialize;

// =============================================================================
// TYPES
// =============================================================================

/// A point (or free vector) in world space. Y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("min_x ({min}) cannot be greater than max_x ({max})")]
    InvertedX { min: f64, max: f64 },
    #[error("min_y ({min}) cannot be greater than max_y ({max})")]
    InvertedY { min: f64, max: f64 },
    #[error("bounding box extents must be finite")]
    NonFinite,
}

/// Axis-aligned bounding box in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

// =============================================================================
// CONSTRUCTION
// =============================================================================

impl BoundingBox {
    /// Build a box from explicit extents.
    ///
    /// # Errors
    ///
    /// Returns `InvertedX`/`InvertedY` when a minimum exceeds its maximum and
    /// `NonFinite` when any extent is NaN or infinite.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Result<Self, GeometryError> {
        if ![min_x, min_y, max_x, max_y].iter().all(|v| v.is_finite()) {
            return Err(GeometryError::NonFinite);
        }
        if min_x > max_x {
            return Err(GeometryError::InvertedX { min: min_x, max: max_x });
        }
        if min_y > max_y {
            return Err(GeometryError::InvertedY { min: min_y, max: max_y });
        }
        Ok(Self { min_x, min_y, max_x, max_y })
    }

    /// Build a box from its top-left corner and a size.
    ///
    /// # Errors
    ///
    /// Fails like [`BoundingBox::new`] for negative sizes or non-finite input.
    pub fn from_size(x: f64, y: f64, width: f64, height: f64) -> Result<Self, GeometryError> {
        Self::new(x, y, x + width, y + height)
    }

    /// Smallest box containing both corners, in any order.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self { min_x: a.x.min(b.x), min_y: a.y.min(b.y), max_x: a.x.max(b.x), max_y: a.y.max(b.y) }
    }

    /// Smallest box containing every point, or `None` for an empty input.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::from_corners(first, first), |acc, p| acc.union(&Self::from_corners(p, p))))
    }

    /// Smallest box containing every input box, or `None` for an empty input.
    pub fn union_all<'a, I>(boxes: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a BoundingBox>,
    {
        let mut iter = boxes.into_iter();
        let first = *iter.next()?;
        Some(iter.fold(first, |acc, b| acc.union(b)))
    }
}

// =============================================================================
// QUERIES
// =============================================================================

impl BoundingBox {
    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.min_x + self.width() * 0.5
    }

    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.min_y + self.height() * 0.5
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.center_x(), self.center_y())
    }

    /// Top-left corner; the positional anchor shared by every shape.
    #[must_use]
    pub fn top_left(&self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    /// Smallest box containing `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &BoundingBox) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Edges are inclusive.
    #[must_use]
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    /// A copy of this box shifted by `(dx, dy)`.
    #[must_use]
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self { min_x: self.min_x + dx, min_y: self.min_y + dy, max_x: self.max_x + dx, max_y: self.max_y + dy }
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Box: Min=({}, {}), Max=({}, {}), Size=({}, {})",
            self.min_x,
            self.min_y,
            self.max_x,
            self.max_y,
            self.width(),
            self.height()
        )
    }
}
