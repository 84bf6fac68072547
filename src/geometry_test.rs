#![allow(clippy::float_cmp)]

use super::*;

fn bbox(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> BoundingBox {
    BoundingBox::new(min_x, min_y, max_x, max_y).unwrap()
}

// --- Point ---

#[test]
fn point_display() {
    assert_eq!(Point::new(1.5, -2.0).to_string(), "(1.5, -2)");
}

#[test]
fn point_default_is_origin() {
    assert_eq!(Point::default(), Point::new(0.0, 0.0));
}

// --- Construction ---

#[test]
fn new_accepts_ordered_extents() {
    let b = bbox(0.0, 1.0, 10.0, 21.0);
    assert_eq!(b.min_x(), 0.0);
    assert_eq!(b.min_y(), 1.0);
    assert_eq!(b.max_x(), 10.0);
    assert_eq!(b.max_y(), 21.0);
}

#[test]
fn new_accepts_zero_area() {
    let b = bbox(3.0, 3.0, 3.0, 3.0);
    assert_eq!(b.width(), 0.0);
    assert_eq!(b.height(), 0.0);
}

#[test]
fn new_rejects_inverted_x() {
    let err = BoundingBox::new(5.0, 0.0, 4.0, 1.0).unwrap_err();
    assert_eq!(err, GeometryError::InvertedX { min: 5.0, max: 4.0 });
}

#[test]
fn new_rejects_inverted_y() {
    let err = BoundingBox::new(0.0, 5.0, 1.0, 4.0).unwrap_err();
    assert_eq!(err, GeometryError::InvertedY { min: 5.0, max: 4.0 });
}

#[test]
fn new_rejects_nan_and_infinity() {
    assert_eq!(BoundingBox::new(f64::NAN, 0.0, 1.0, 1.0), Err(GeometryError::NonFinite));
    assert_eq!(BoundingBox::new(0.0, 0.0, f64::INFINITY, 1.0), Err(GeometryError::NonFinite));
}

#[test]
fn inverted_error_message_names_axis() {
    let err = BoundingBox::new(0.0, 2.0, 1.0, 1.0).unwrap_err();
    assert!(err.to_string().contains("min_y"));
}

#[test]
fn from_size_builds_from_top_left() {
    let b = BoundingBox::from_size(10.0, 20.0, 5.0, 8.0).unwrap();
    assert_eq!(b, bbox(10.0, 20.0, 15.0, 28.0));
}

#[test]
fn from_size_rejects_negative_size() {
    assert!(BoundingBox::from_size(0.0, 0.0, -1.0, 1.0).is_err());
}

#[test]
fn from_corners_orders_extents() {
    let b = BoundingBox::from_corners(Point::new(10.0, 0.0), Point::new(0.0, 10.0));
    assert_eq!(b, bbox(0.0, 0.0, 10.0, 10.0));
}

#[test]
fn from_points_covers_all() {
    let pts = [Point::new(50.0, 50.0), Point::new(70.0, 50.0), Point::new(60.0, 60.0)];
    let b = BoundingBox::from_points(pts).unwrap();
    assert_eq!(b, bbox(50.0, 50.0, 70.0, 60.0));
}

#[test]
fn from_points_empty_is_none() {
    assert!(BoundingBox::from_points(Vec::new()).is_none());
}

// --- Derived values ---

#[test]
fn derived_dimensions() {
    let b = bbox(2.0, 20.0, 8.0, 26.0);
    assert_eq!(b.width(), 6.0);
    assert_eq!(b.height(), 6.0);
    assert_eq!(b.center_x(), 5.0);
    assert_eq!(b.center_y(), 23.0);
    assert_eq!(b.center(), Point::new(5.0, 23.0));
    assert_eq!(b.top_left(), Point::new(2.0, 20.0));
}

// --- Union ---

#[test]
fn union_of_two() {
    let u = bbox(0.0, 0.0, 10.0, 10.0).union(&bbox(5.0, 5.0, 15.0, 15.0));
    assert_eq!(u, bbox(0.0, 0.0, 15.0, 15.0));
}

#[test]
fn union_all_matches_pairwise_fold() {
    let boxes = [bbox(0.0, 0.0, 10.0, 10.0), bbox(5.0, 5.0, 15.0, 15.0), bbox(2.0, 20.0, 8.0, 26.0)];
    let u = BoundingBox::union_all(&boxes).unwrap();
    assert_eq!(u, bbox(0.0, 0.0, 15.0, 26.0));
}

#[test]
fn union_all_empty_is_none() {
    let boxes: [BoundingBox; 0] = [];
    assert!(BoundingBox::union_all(&boxes).is_none());
}

// --- Misc ---

#[test]
fn contains_point_is_inclusive() {
    let b = bbox(0.0, 0.0, 10.0, 10.0);
    assert!(b.contains_point(Point::new(0.0, 10.0)));
    assert!(b.contains_point(Point::new(5.0, 5.0)));
    assert!(!b.contains_point(Point::new(10.1, 5.0)));
}

#[test]
fn translated_shifts_both_corners() {
    let b = bbox(0.0, 0.0, 10.0, 10.0).translated(-5.0, 2.5);
    assert_eq!(b, bbox(-5.0, 2.5, 5.0, 12.5));
}

#[test]
fn equality_is_exact() {
    assert_ne!(bbox(0.0, 0.0, 1.0, 1.0), bbox(0.0, 0.0, 1.0 + 1e-12, 1.0));
}

#[test]
fn display_format() {
    let s = bbox(0.0, 0.0, 10.0, 5.0).to_string();
    assert_eq!(s, "Box: Min=(0, 0), Max=(10, 5), Size=(10, 5)");
}
