#[cfg(test)]
#[path = "circle_test.rs"]
mod circle_test;

use crate::align::Alignable;
use crate::color::Color;
use crate::consts::DEFAULT_FILL;
use crate::geometry::{BoundingBox, Point};
use crate::registry::RegistryError;

use super::props::{self, Described, PropKind, PropValue, PropertyDescriptor, PropertyError};
use super::{Primitive, PrimitiveError, PrimitiveHeader, PrimitiveKind, SharedRegistry, get_color_key, get_name, set_name};

/// A circle given by its center and radius.
#[derive(Debug)]
pub struct Circle {
    header: PrimitiveHeader,
    center_x: f64,
    center_y: f64,
    radius: f64,
    fill: Color,
}

impl Circle {
    /// Default circle: center (10, 10), radius 5, white.
    ///
    /// # Errors
    ///
    /// Propagates `Exhausted` from the registry.
    pub fn new(registry: &SharedRegistry) -> Result<Self, RegistryError> {
        Ok(Self {
            header: PrimitiveHeader::new(registry, PrimitiveKind::Circle)?,
            center_x: 10.0,
            center_y: 10.0,
            radius: 5.0,
            fill: Color::from_u32(DEFAULT_FILL),
        })
    }

    /// Circle with explicit geometry.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` for non-finite input or a negative radius; the
    /// key is only allocated once the geometry is valid.
    pub fn at(registry: &SharedRegistry, center: Point, radius: f64) -> Result<Self, PrimitiveError> {
        let center_x = props::check_finite("CenterX", center.x)?;
        let center_y = props::check_finite("CenterY", center.y)?;
        let radius = props::check_non_negative("Radius", radius)?;
        let mut circle = Self::new(registry)?;
        circle.center_x = center_x;
        circle.center_y = center_y;
        circle.radius = radius;
        Ok(circle)
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// # Errors
    ///
    /// Returns `OutOfRange` for non-finite coordinates.
    pub fn set_center(&mut self, center: Point) -> Result<(), PropertyError> {
        let x = props::check_finite("CenterX", center.x)?;
        let y = props::check_finite("CenterY", center.y)?;
        self.center_x = x;
        self.center_y = y;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `OutOfRange` for negative or non-finite radii.
    pub fn set_radius(&mut self, radius: f64) -> Result<(), PropertyError> {
        self.radius = props::check_non_negative("Radius", radius)?;
        Ok(())
    }

    pub fn set_fill(&mut self, fill: Color) {
        self.fill = fill;
    }
}

impl Alignable for Circle {
    fn world_bounding_box(&self) -> BoundingBox {
        BoundingBox::from_corners(
            Point::new(self.center_x - self.radius, self.center_y - self.radius),
            Point::new(self.center_x + self.radius, self.center_y + self.radius),
        )
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.center_x += dx;
        self.center_y += dy;
    }
}

static DESCRIPTORS: [PropertyDescriptor<Circle>; 6] = [
    PropertyDescriptor { name: "Name", kind: PropKind::Text, get: get_name::<Circle>, set: Some(set_name::<Circle>) },
    PropertyDescriptor { name: "ColorKey", kind: PropKind::Uint, get: get_color_key::<Circle>, set: None },
    PropertyDescriptor {
        name: "CenterX",
        kind: PropKind::Float,
        get: |c| PropValue::Float(c.center_x),
        set: Some(|c, v| c.set_center(Point::new(props::float("CenterX", &v)?, c.center_y))),
    },
    PropertyDescriptor {
        name: "CenterY",
        kind: PropKind::Float,
        get: |c| PropValue::Float(c.center_y),
        set: Some(|c, v| c.set_center(Point::new(c.center_x, props::float("CenterY", &v)?))),
    },
    PropertyDescriptor {
        name: "Radius",
        kind: PropKind::Float,
        get: |c| PropValue::Float(c.radius),
        set: Some(|c, v| c.set_radius(props::float("Radius", &v)?)),
    },
    PropertyDescriptor {
        name: "Color",
        kind: PropKind::Uint,
        get: |c| PropValue::Uint(c.fill.to_u32()),
        set: Some(|c, v| {
            c.fill = Color::from_u32(props::uint("Color", &v)?);
            Ok(())
        }),
    },
];

impl Described for Circle {
    fn descriptors() -> &'static [PropertyDescriptor<Self>] {
        &DESCRIPTORS
    }
}

impl Primitive for Circle {
    fn header(&self) -> &PrimitiveHeader {
        &self.header
    }

    fn header_mut(&mut self) -> &mut PrimitiveHeader {
        &mut self.header
    }

    fn kind(&self) -> PrimitiveKind {
        PrimitiveKind::Circle
    }

    fn fill(&self) -> Color {
        self.fill
    }

    fn properties(&self) -> Vec<(&'static str, PropValue)> {
        props::snapshot(self)
    }

    fn get_property(&self, name: &str) -> Result<PropValue, PropertyError> {
        props::get(self, name)
    }

    fn set_property(&mut self, name: &str, value: PropValue) -> Result<(), PropertyError> {
        props::set(self, name, value)
    }
}
