#[cfg(test)]
#[path = "rectangle_test.rs"]
mod rectangle_test;

use crate::align::Alignable;
use crate::color::Color;
use crate::consts::DEFAULT_FILL;
use crate::geometry::{BoundingBox, Point};
use crate::registry::RegistryError;

use super::props::{self, Described, PropKind, PropValue, PropertyDescriptor, PropertyError};
use super::{Primitive, PrimitiveError, PrimitiveHeader, PrimitiveKind, SharedRegistry, get_color_key, get_name, set_name};

/// An axis-aligned rectangle given by its top-left corner and size.
#[derive(Debug)]
pub struct Rectangle {
    header: PrimitiveHeader,
    pos_x: f64,
    pos_y: f64,
    width: f64,
    height: f64,
    fill: Color,
}

impl Rectangle {
    /// Default rectangle: 10×10 at (10, 10), white.
    ///
    /// # Errors
    ///
    /// Propagates `Exhausted` from the registry.
    pub fn new(registry: &SharedRegistry) -> Result<Self, RegistryError> {
        Ok(Self {
            header: PrimitiveHeader::new(registry, PrimitiveKind::Rectangle)?,
            pos_x: 10.0,
            pos_y: 10.0,
            width: 10.0,
            height: 10.0,
            fill: Color::from_u32(DEFAULT_FILL),
        })
    }

    /// Rectangle covering `bbox`.
    ///
    /// # Errors
    ///
    /// Propagates `Exhausted` from the registry.
    pub fn from_bounds(registry: &SharedRegistry, bbox: &BoundingBox) -> Result<Self, PrimitiveError> {
        Self::at(registry, bbox.top_left(), bbox.width(), bbox.height())
    }

    /// Rectangle with explicit geometry.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` for non-finite input or a negative size.
    pub fn at(registry: &SharedRegistry, pos: Point, width: f64, height: f64) -> Result<Self, PrimitiveError> {
        let pos_x = props::check_finite("PosX", pos.x)?;
        let pos_y = props::check_finite("PosY", pos.y)?;
        let width = props::check_non_negative("Width", width)?;
        let height = props::check_non_negative("Height", height)?;
        let mut rect = Self::new(registry)?;
        rect.pos_x = pos_x;
        rect.pos_y = pos_y;
        rect.width = width;
        rect.height = height;
        Ok(rect)
    }

    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.pos_x, self.pos_y)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// # Errors
    ///
    /// Returns `OutOfRange` for non-finite coordinates.
    pub fn set_position(&mut self, pos: Point) -> Result<(), PropertyError> {
        let x = props::check_finite("PosX", pos.x)?;
        let y = props::check_finite("PosY", pos.y)?;
        self.pos_x = x;
        self.pos_y = y;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `OutOfRange` for negative or non-finite sizes.
    pub fn set_size(&mut self, width: f64, height: f64) -> Result<(), PropertyError> {
        let w = props::check_non_negative("Width", width)?;
        let h = props::check_non_negative("Height", height)?;
        self.width = w;
        self.height = h;
        Ok(())
    }

    pub fn set_fill(&mut self, fill: Color) {
        self.fill = fill;
    }
}

impl Alignable for Rectangle {
    fn world_bounding_box(&self) -> BoundingBox {
        BoundingBox::from_corners(
            Point::new(self.pos_x, self.pos_y),
            Point::new(self.pos_x + self.width, self.pos_y + self.height),
        )
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.pos_x += dx;
        self.pos_y += dy;
    }
}

static DESCRIPTORS: [PropertyDescriptor<Rectangle>; 7] = [
    PropertyDescriptor { name: "Name", kind: PropKind::Text, get: get_name::<Rectangle>, set: Some(set_name::<Rectangle>) },
    PropertyDescriptor { name: "ColorKey", kind: PropKind::Uint, get: get_color_key::<Rectangle>, set: None },
    PropertyDescriptor {
        name: "PosX",
        kind: PropKind::Float,
        get: |r| PropValue::Float(r.pos_x),
        set: Some(|r, v| r.set_position(Point::new(props::float("PosX", &v)?, r.pos_y))),
    },
    PropertyDescriptor {
        name: "PosY",
        kind: PropKind::Float,
        get: |r| PropValue::Float(r.pos_y),
        set: Some(|r, v| r.set_position(Point::new(r.pos_x, props::float("PosY", &v)?))),
    },
    PropertyDescriptor {
        name: "Width",
        kind: PropKind::Float,
        get: |r| PropValue::Float(r.width),
        set: Some(|r, v| r.set_size(props::float("Width", &v)?, r.height)),
    },
    PropertyDescriptor {
        name: "Height",
        kind: PropKind::Float,
        get: |r| PropValue::Float(r.height),
        set: Some(|r, v| r.set_size(r.width, props::float("Height", &v)?)),
    },
    PropertyDescriptor {
        name: "Color",
        kind: PropKind::Uint,
        get: |r| PropValue::Uint(r.fill.to_u32()),
        set: Some(|r, v| {
            r.fill = Color::from_u32(props::uint("Color", &v)?);
            Ok(())
        }),
    },
];

impl Described for Rectangle {
    fn descriptors() -> &'static [PropertyDescriptor<Self>] {
        &DESCRIPTORS
    }
}

impl Primitive for Rectangle {
    fn header(&self) -> &PrimitiveHeader {
        &self.header
    }

    fn header_mut(&mut self) -> &mut PrimitiveHeader {
        &mut self.header
    }

    fn kind(&self) -> PrimitiveKind {
        PrimitiveKind::Rectangle
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
