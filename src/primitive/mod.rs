//! Concrete drawable shapes.
//!
//! DESIGN
//! ======
//! Each shape is a plain struct with typed geometry plus a shared
//! [`PrimitiveHeader`] carrying its id, display name and color-key lease. The
//! lease ties the key's lifetime to the shape: dropping the shape releases its
//! key, so the registry never points at a destroyed object.
//!
//! Shapes implement [`Alignable`] with the same anchor convention: the world
//! transform's translation is the bounding box's top-left corner (Y down).
//! The alignment engine only ever sees the trait.

pub mod circle;
pub mod props;
pub mod rectangle;
pub mod triangle;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::align::Alignable;
use crate::color::Color;
use crate::registry::{ColorKey, ColorKeyLease, ColorKeyRegistry, RegistryError};

pub use circle::Circle;
pub use props::{PropKind, PropValue, PropertyDescriptor, PropertyError};
pub use rectangle::Rectangle;
pub use triangle::Triangle;

/// Unique identifier for a primitive.
pub type PrimitiveId = Uuid;

/// The registry type primitives allocate their keys from.
pub type SharedRegistry = Arc<ColorKeyRegistry<PrimitiveId>>;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    Circle,
    Rectangle,
    Triangle,
}

impl PrimitiveKind {
    /// Default display name for new shapes of this kind.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Circle => "Circle",
            PrimitiveKind::Rectangle => "Rectangle",
            PrimitiveKind::Triangle => "Triangle",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PrimitiveError {
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Property(#[from] PropertyError),
}

/// Identity shared by every shape.
#[derive(Debug)]
pub struct PrimitiveHeader {
    id: PrimitiveId,
    name: String,
    lease: ColorKeyLease<PrimitiveId>,
}

impl PrimitiveHeader {
    /// Mint a fresh id and allocate its color key.
    ///
    /// # Errors
    ///
    /// Propagates `Exhausted` from the registry.
    pub fn new(registry: &SharedRegistry, kind: PrimitiveKind) -> Result<Self, RegistryError> {
        let id = Uuid::new_v4();
        let lease = ColorKeyLease::acquire(registry, id)?;
        tracing::trace!(%id, %kind, key = %lease.key(), "primitive created");
        Ok(Self { id, name: kind.name().to_string(), lease })
    }

    #[must_use]
    pub fn id(&self) -> PrimitiveId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    #[must_use]
    pub fn color_key(&self) -> ColorKey {
        self.lease.key()
    }

    #[must_use]
    pub fn registry(&self) -> &SharedRegistry {
        self.lease.registry()
    }
}

// =============================================================================
// PRIMITIVE
// =============================================================================

/// A drawable shape: alignable, identifiable, and inspectable by name.
pub trait Primitive: Alignable + fmt::Debug + Send + Sync {
    fn header(&self) -> &PrimitiveHeader;

    fn header_mut(&mut self) -> &mut PrimitiveHeader;

    fn kind(&self) -> PrimitiveKind;

    fn fill(&self) -> Color;

    /// Every UI-visible property in declaration order.
    fn properties(&self) -> Vec<(&'static str, PropValue)>;

    /// # Errors
    ///
    /// Returns `UnknownProperty` for names this shape does not publish.
    fn get_property(&self, name: &str) -> Result<PropValue, PropertyError>;

    /// # Errors
    ///
    /// Returns `UnknownProperty`, `ReadOnly`, `TypeMismatch` or `OutOfRange`.
    fn set_property(&mut self, name: &str, value: PropValue) -> Result<(), PropertyError>;

    fn id(&self) -> PrimitiveId {
        self.header().id()
    }

    fn name(&self) -> &str {
        self.header().name()
    }

    fn color_key(&self) -> ColorKey {
        self.header().color_key()
    }

    /// Properties as a JSON object for data binding.
    fn properties_json(&self) -> serde_json::Map<String, serde_json::Value> {
        self.properties()
            .into_iter()
            .map(|(name, value)| {
                let json = match value {
                    PropValue::Float(v) => serde_json::Value::from(v),
                    PropValue::Uint(v) => serde_json::Value::from(v),
                    PropValue::Text(v) => serde_json::Value::from(v),
                };
                (name.to_string(), json)
            })
            .collect()
    }
}

/// Build a default shape of `kind`.
///
/// # Errors
///
/// Propagates `Exhausted` from the registry.
pub fn spawn(registry: &SharedRegistry, kind: PrimitiveKind) -> Result<Box<dyn Primitive>, RegistryError> {
    let primitive: Box<dyn Primitive> = match kind {
        PrimitiveKind::Circle => Box::new(Circle::new(registry)?),
        PrimitiveKind::Rectangle => Box::new(Rectangle::new(registry)?),
        PrimitiveKind::Triangle => Box::new(Triangle::new(registry)?),
    };
    Ok(primitive)
}

// =============================================================================
// SHARED DESCRIPTOR ACCESSORS
// =============================================================================

pub(crate) fn get_name<T: Primitive>(target: &T) -> PropValue {
    PropValue::Text(target.header().name().to_string())
}

pub(crate) fn set_name<T: Primitive>(target: &mut T, value: PropValue) -> Result<(), PropertyError> {
    let name = props::text("Name", value)?;
    target.header_mut().set_name(name);
    Ok(())
}

pub(crate) fn get_color_key<T: Primitive>(target: &T) -> PropValue {
    PropValue::Uint(target.header().color_key().value())
}
