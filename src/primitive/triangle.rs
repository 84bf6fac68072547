#[cfg(test)]
#[path = "triangle_test.rs"]
mod triangle_test;

use crate::align::Alignable;
use crate::color::Color;
use crate::consts::DEFAULT_FILL;
use crate::geometry::{BoundingBox, Point};
use crate::registry::RegistryError;

use super::props::{self, Described, PropKind, PropValue, PropertyDescriptor, PropertyError};
use super::{Primitive, PrimitiveError, PrimitiveHeader, PrimitiveKind, SharedRegistry, get_color_key, get_name, set_name};

/// A triangle given by three vertices in world coordinates.
#[derive(Debug)]
pub struct Triangle {
    header: PrimitiveHeader,
    vertices: [Point; 3],
    fill: Color,
}

impl Triangle {
    /// Default triangle: (50, 50), (70, 50), (60, 60), white.
    ///
    /// # Errors
    ///
    /// Propagates `Exhausted` from the registry.
    pub fn new(registry: &SharedRegistry) -> Result<Self, RegistryError> {
        Ok(Self {
            header: PrimitiveHeader::new(registry, PrimitiveKind::Triangle)?,
            vertices: [Point::new(50.0, 50.0), Point::new(70.0, 50.0), Point::new(60.0, 60.0)],
            fill: Color::from_u32(DEFAULT_FILL),
        })
    }

    /// Triangle with explicit vertices.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if any coordinate is non-finite.
    pub fn at(registry: &SharedRegistry, vertices: [Point; 3]) -> Result<Self, PrimitiveError> {
        for (v, (name_x, name_y)) in vertices.iter().zip(VERTEX_NAMES) {
            props::check_finite(name_x, v.x)?;
            props::check_finite(name_y, v.y)?;
        }
        let mut tri = Self::new(registry)?;
        tri.vertices = vertices;
        Ok(tri)
    }

    #[must_use]
    pub fn vertices(&self) -> [Point; 3] {
        self.vertices
    }

    /// Move vertex `index` (0..3). Out-of-range indices are ignored.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` for non-finite coordinates.
    pub fn set_vertex(&mut self, index: usize, at: Point) -> Result<(), PropertyError> {
        let Some((name_x, name_y)) = VERTEX_NAMES.get(index).copied() else {
            return Ok(());
        };
        let x = props::check_finite(name_x, at.x)?;
        let y = props::check_finite(name_y, at.y)?;
        self.vertices[index] = Point::new(x, y);
        Ok(())
    }

    pub fn set_fill(&mut self, fill: Color) {
        self.fill = fill;
    }
}

const VERTEX_NAMES: [(&str, &str); 3] = [("Vertex1X", "Vertex1Y"), ("Vertex2X", "Vertex2Y"), ("Vertex3X", "Vertex3Y")];

impl Alignable for Triangle {
    fn world_bounding_box(&self) -> BoundingBox {
        let [a, b, c] = self.vertices;
        BoundingBox::from_corners(a, b).union(&BoundingBox::from_corners(c, c))
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        for v in &mut self.vertices {
            v.x += dx;
            v.y += dy;
        }
    }
}

fn set_coord(tri: &mut Triangle, index: usize, x: Option<f64>, y: Option<f64>) -> Result<(), PropertyError> {
    let current = tri.vertices[index];
    tri.set_vertex(index, Point::new(x.unwrap_or(current.x), y.unwrap_or(current.y)))
}

static DESCRIPTORS: [PropertyDescriptor<Triangle>; 9] = [
    PropertyDescriptor { name: "Name", kind: PropKind::Text, get: get_name::<Triangle>, set: Some(set_name::<Triangle>) },
    PropertyDescriptor { name: "ColorKey", kind: PropKind::Uint, get: get_color_key::<Triangle>, set: None },
    PropertyDescriptor {
        name: "Vertex1X",
        kind: PropKind::Float,
        get: |t| PropValue::Float(t.vertices[0].x),
        set: Some(|t, v| set_coord(t, 0, Some(props::float("Vertex1X", &v)?), None)),
    },
    PropertyDescriptor {
        name: "Vertex1Y",
        kind: PropKind::Float,
        get: |t| PropValue::Float(t.vertices[0].y),
        set: Some(|t, v| set_coord(t, 0, None, Some(props::float("Vertex1Y", &v)?))),
    },
    PropertyDescriptor {
        name: "Vertex2X",
        kind: PropKind::Float,
        get: |t| PropValue::Float(t.vertices[1].x),
        set: Some(|t, v| set_coord(t, 1, Some(props::float("Vertex2X", &v)?), None)),
    },
    PropertyDescriptor {
        name: "Vertex2Y",
        kind: PropKind::Float,
        get: |t| PropValue::Float(t.vertices[1].y),
        set: Some(|t, v| set_coord(t, 1, None, Some(props::float("Vertex2Y", &v)?))),
    },
    PropertyDescriptor {
        name: "Vertex3X",
        kind: PropKind::Float,
        get: |t| PropValue::Float(t.vertices[2].x),
        set: Some(|t, v| set_coord(t, 2, Some(props::float("Vertex3X", &v)?), None)),
    },
    PropertyDescriptor {
        name: "Vertex3Y",
        kind: PropKind::Float,
        get: |t| PropValue::Float(t.vertices[2].y),
        set: Some(|t, v| set_coord(t, 2, None, Some(props::float("Vertex3Y", &v)?))),
    },
    PropertyDescriptor {
        name: "Color",
        kind: PropKind::Uint,
        get: |t| PropValue::Uint(t.fill.to_u32()),
        set: Some(|t, v| {
            t.fill = Color::from_u32(props::uint("Color", &v)?);
            Ok(())
        }),
    },
];

impl Described for Triangle {
    fn descriptors() -> &'static [PropertyDescriptor<Self>] {
        &DESCRIPTORS
    }
}

impl Primitive for Triangle {
    fn header(&self) -> &PrimitiveHeader {
        &self.header
    }

    fn header_mut(&mut self) -> &mut PrimitiveHeader {
        &mut self.header
    }

    fn kind(&self) -> PrimitiveKind {
        PrimitiveKind::Triangle
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
