#![allow(clippy::float_cmp)]

use std::sync::Arc;

use super::*;
use crate::registry::ColorKeyRegistry;
use crate::transform::Transform;

fn registry() -> SharedRegistry {
    Arc::new(ColorKeyRegistry::new())
}

#[test]
fn defaults() {
    let reg = registry();
    let t = Triangle::new(&reg).unwrap();
    assert_eq!(t.vertices(), [Point::new(50.0, 50.0), Point::new(70.0, 50.0), Point::new(60.0, 60.0)]);
    assert_eq!(t.name(), "Triangle");
}

#[test]
fn bounding_box_covers_vertices() {
    let reg = registry();
    let bbox = Triangle::new(&reg).unwrap().world_bounding_box();
    assert_eq!((bbox.min_x(), bbox.min_y(), bbox.max_x(), bbox.max_y()), (50.0, 50.0, 70.0, 60.0));
}

#[test]
fn bounding_box_with_third_vertex_outermost() {
    let reg = registry();
    let t = Triangle::at(&reg, [Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(-5.0, 9.0)]).unwrap();
    let bbox = t.world_bounding_box();
    assert_eq!((bbox.min_x(), bbox.min_y(), bbox.max_x(), bbox.max_y()), (-5.0, 0.0, 1.0, 9.0));
}

#[test]
fn translate_moves_every_vertex() {
    let reg = registry();
    let mut t = Triangle::new(&reg).unwrap();
    t.translate(-50.0, 10.0);
    assert_eq!(t.vertices(), [Point::new(0.0, 60.0), Point::new(20.0, 60.0), Point::new(10.0, 70.0)]);
}

#[test]
fn set_world_transform_moves_anchor() {
    let reg = registry();
    let mut t = Triangle::new(&reg).unwrap();
    t.set_world_transform(&Transform::translate(0.0, 0.0));
    let bbox = t.world_bounding_box();
    assert_eq!(bbox.top_left(), Point::new(0.0, 0.0));
    assert_eq!((bbox.width(), bbox.height()), (20.0, 10.0));
}

#[test]
fn at_rejects_infinite_vertex() {
    let reg = registry();
    let err = Triangle::at(&reg, [Point::new(0.0, 0.0), Point::new(0.0, f64::INFINITY), Point::new(1.0, 1.0)])
        .unwrap_err();
    assert!(matches!(err, PrimitiveError::Property(PropertyError::OutOfRange { name: "Vertex2Y", .. })));
    assert!(reg.is_empty());
}

#[test]
fn vertex_properties() {
    let reg = registry();
    let mut t = Triangle::new(&reg).unwrap();
    t.set_property("Vertex3Y", PropValue::Float(80.0)).unwrap();
    assert_eq!(t.vertices()[2], Point::new(60.0, 80.0));
    assert_eq!(t.get_property("Vertex3Y").unwrap(), PropValue::Float(80.0));
    assert_eq!(t.world_bounding_box().max_y(), 80.0);
}

#[test]
fn set_vertex_out_of_range_is_ignored() {
    let reg = registry();
    let mut t = Triangle::new(&reg).unwrap();
    let before = t.vertices();
    t.set_vertex(3, Point::new(0.0, 0.0)).unwrap();
    assert_eq!(t.vertices(), before);
}

#[test]
fn unknown_property() {
    let reg = registry();
    let t = Triangle::new(&reg).unwrap();
    assert_eq!(t.get_property("Radius"), Err(PropertyError::UnknownProperty("Radius".into())));
}

#[test]
fn property_count() {
    let reg = registry();
    assert_eq!(Triangle::new(&reg).unwrap().properties().len(), 9);
}
