//! Property descriptors for UI binding.
//!
//! Shapes keep their geometry in strongly typed fields. For generic editors
//! each shape also publishes a static descriptor list: a name, a value kind, a
//! getter and an optional setter. Lookup by name happens here and only here;
//! nothing in the geometry or alignment paths goes through it.

#[cfg(test)]
#[path = "props_test.rs"]
mod props_test;

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// TYPES
// =============================================================================

/// Value type carried by a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropKind {
    Float,
    Uint,
    Text,
}

impl fmt::Display for PropKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PropKind::Float => "float",
            PropKind::Uint => "uint",
            PropKind::Text => "text",
        })
    }
}

/// A property value as exchanged with the UI layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    Uint(u32),
    Float(f64),
    Text(String),
}

impl PropValue {
    #[must_use]
    pub fn kind(&self) -> PropKind {
        match self {
            PropValue::Float(_) => PropKind::Float,
            PropValue::Uint(_) => PropKind::Uint,
            PropValue::Text(_) => PropKind::Text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PropertyError {
    #[error("unknown property: {0}")]
    UnknownProperty(String),
    #[error("property {name} expects a {expected} value, got {actual}")]
    TypeMismatch { name: &'static str, expected: PropKind, actual: PropKind },
    #[error("property {0} is read-only")]
    ReadOnly(&'static str),
    #[error("property {name} out of range: {value}")]
    OutOfRange { name: &'static str, value: f64 },
}

pub type Getter<T> = fn(&T) -> PropValue;
pub type Setter<T> = fn(&mut T, PropValue) -> Result<(), PropertyError>;

/// One named, typed accessor pair over `T`.
pub struct PropertyDescriptor<T> {
    pub name: &'static str,
    pub kind: PropKind,
    pub get: Getter<T>,
    pub set: Option<Setter<T>>,
}

impl<T> PropertyDescriptor<T> {
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.set.is_none()
    }
}

impl<T> fmt::Debug for PropertyDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("read_only", &self.is_read_only())
            .finish()
    }
}

/// Types that publish a static descriptor list.
pub trait Described: Sized + 'static {
    fn descriptors() -> &'static [PropertyDescriptor<Self>];
}

// =============================================================================
// ACCESS
// =============================================================================

fn find<T: Described>(name: &str) -> Result<&'static PropertyDescriptor<T>, PropertyError> {
    T::descriptors()
        .iter()
        .find(|d| d.name == name)
        .ok_or_else(|| PropertyError::UnknownProperty(name.to_string()))
}

/// Read a property by name.
///
/// # Errors
///
/// Returns `UnknownProperty` if `T` has no property called `name`.
pub fn get<T: Described>(target: &T, name: &str) -> Result<PropValue, PropertyError> {
    let desc = find::<T>(name)?;
    Ok((desc.get)(target))
}

/// Write a property by name.
///
/// # Errors
///
/// Returns `UnknownProperty`, `ReadOnly`, `TypeMismatch`, or whatever the
/// property's setter rejects (typically `OutOfRange`).
pub fn set<T: Described>(target: &mut T, name: &str, value: PropValue) -> Result<(), PropertyError> {
    let desc = find::<T>(name)?;
    let Some(setter) = desc.set else {
        return Err(PropertyError::ReadOnly(desc.name));
    };
    if value.kind() != desc.kind {
        return Err(PropertyError::TypeMismatch { name: desc.name, expected: desc.kind, actual: value.kind() });
    }
    setter(target, value)
}

/// Every property in declaration order.
#[must_use]
pub fn snapshot<T: Described>(target: &T) -> Vec<(&'static str, PropValue)> {
    T::descriptors()
        .iter()
        .map(|d| (d.name, (d.get)(target)))
        .collect()
}

// =============================================================================
// SETTER HELPERS
// =============================================================================

pub(crate) fn check_finite(name: &'static str, value: f64) -> Result<f64, PropertyError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PropertyError::OutOfRange { name, value })
    }
}

pub(crate) fn check_non_negative(name: &'static str, value: f64) -> Result<f64, PropertyError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(PropertyError::OutOfRange { name, value })
    }
}

pub(crate) fn float(name: &'static str, value: &PropValue) -> Result<f64, PropertyError> {
    match value {
        PropValue::Float(v) => Ok(*v),
        other => Err(PropertyError::TypeMismatch { name, expected: PropKind::Float, actual: other.kind() }),
    }
}

pub(crate) fn uint(name: &'static str, value: &PropValue) -> Result<u32, PropertyError> {
    match value {
        PropValue::Uint(v) => Ok(*v),
        other => Err(PropertyError::TypeMismatch { name, expected: PropKind::Uint, actual: other.kind() }),
    }
}

pub(crate) fn text(name: &'static str, value: PropValue) -> Result<String, PropertyError> {
    match value {
        PropValue::Text(v) => Ok(v),
        other => Err(PropertyError::TypeMismatch { name, expected: PropKind::Text, actual: other.kind() }),
    }
}
