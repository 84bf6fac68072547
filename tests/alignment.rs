//! End-to-end alignment over real primitives.
#![allow(clippy::float_cmp)]

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use shapekit::align::{AlignType, Alignable, align, align_with, apply_plan, plan};
use shapekit::config::AlignConfig;
use shapekit::geometry::{BoundingBox, Point};
use shapekit::primitive::{Circle, Primitive, Rectangle, SharedRegistry, Triangle};
use shapekit::registry::ColorKeyRegistry;

fn registry() -> SharedRegistry {
    Arc::new(ColorKeyRegistry::new())
}

fn rect(reg: &SharedRegistry, min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Rectangle {
    Rectangle::from_bounds(reg, &BoundingBox::new(min_x, min_y, max_x, max_y).unwrap()).unwrap()
}

#[test]
fn three_rectangles_align_left() {
    let reg = registry();
    let mut rects =
        vec![rect(&reg, 0.0, 0.0, 10.0, 10.0), rect(&reg, 5.0, 5.0, 15.0, 15.0), rect(&reg, 2.0, 20.0, 8.0, 26.0)];
    let before: Vec<Point> = rects.iter().map(Rectangle::position).collect();

    assert!(align(&mut rects, AlignType::Left));

    let deltas: Vec<(f64, f64)> =
        rects.iter().zip(&before).map(|(r, b)| (r.position().x - b.x, r.position().y - b.y)).collect();
    assert_eq!(deltas, [(0.0, 0.0), (-5.0, 0.0), (-2.0, 0.0)]);
    assert!(rects.iter().all(|r| r.world_bounding_box().min_x() == 0.0));
}

#[test]
fn two_circles_align_hcenter() {
    let reg = registry();
    let mut circles = vec![
        Circle::at(&reg, Point::new(5.0, 5.0), 5.0).unwrap(),
        Circle::at(&reg, Point::new(8.0, 105.0), 5.0).unwrap(),
    ];

    assert!(align(&mut circles, AlignType::HCenter));

    for c in &circles {
        assert!((c.world_bounding_box().center_x() - 6.5).abs() < 1e-9);
    }
    assert_eq!(circles[0].center().y, 5.0);
    assert_eq!(circles[1].center().y, 105.0);
}

#[test]
fn mixed_shapes_through_trait_objects() {
    let reg = registry();
    let mut shapes: Vec<Box<dyn Primitive>> = vec![
        Box::new(Circle::new(&reg).unwrap()),
        Box::new(Rectangle::at(&reg, Point::new(30.0, 0.0), 10.0, 40.0).unwrap()),
        Box::new(Triangle::new(&reg).unwrap()),
    ];

    assert!(align(&mut shapes, AlignType::Bottom));
    assert!(shapes.iter().all(|s| s.world_bounding_box().max_y() == 60.0));
    assert!(!align(&mut shapes, AlignType::Bottom));
}

#[test]
fn idempotent_under_both_tolerances() {
    for config in [AlignConfig::default(), AlignConfig::PIXEL] {
        for mode in AlignType::ALL {
            let reg = registry();
            let mut rects = vec![rect(&reg, 0.0, 0.0, 3.0, 7.0), rect(&reg, 11.0, 4.0, 20.0, 9.0)];
            assert!(align_with(&mut rects, mode, &config), "{mode} should move something");
            assert!(!align_with(&mut rects, mode, &config), "{mode} second pass should be a no-op");
        }
    }
}

#[test]
fn random_sets_land_on_reference() {
    let mut rng = StdRng::seed_from_u64(7);
    let reg = registry();
    for _ in 0..50 {
        let mode = AlignType::ALL[rng.random_range(0..AlignType::ALL.len())];
        let mut tris: Vec<Triangle> = (0..rng.random_range(2..8))
            .map(|_| {
                let mut v = || Point::new(rng.random_range(-100.0..100.0), rng.random_range(-100.0..100.0));
                let vertices = [v(), v(), v()];
                Triangle::at(&reg, vertices).unwrap()
            })
            .collect();
        let boxes: Vec<BoundingBox> = tris.iter().map(Alignable::world_bounding_box).collect();
        let union = BoundingBox::union_all(&boxes).unwrap();
        let target = mode.reference(&union);

        align(&mut tris, mode);

        for (t, before) in tris.iter().zip(&boxes) {
            let after = t.world_bounding_box();
            assert!((mode.reference(&after) - target).abs() < 1e-6);
            // Orthogonal axis untouched.
            match mode {
                AlignType::Left | AlignType::HCenter | AlignType::Right => {
                    assert_eq!(after.min_y(), before.min_y());
                }
                AlignType::Top | AlignType::VCenter | AlignType::Bottom => {
                    assert_eq!(after.min_x(), before.min_x());
                }
            }
        }
    }
}

#[test]
fn plan_inverse_restores_positions() {
    let reg = registry();
    let mut rects = vec![rect(&reg, 0.0, 0.0, 10.0, 10.0), rect(&reg, 40.0, 12.0, 50.0, 30.0)];
    let before: Vec<BoundingBox> = rects.iter().map(Alignable::world_bounding_box).collect();

    let forward = plan(&before, AlignType::Right, &AlignConfig::default()).unwrap();
    assert_eq!(apply_plan(&mut rects, &forward), 1);
    assert_eq!(rects[0].world_bounding_box().max_x(), 50.0);

    apply_plan(&mut rects, &forward.inverse());
    let after: Vec<BoundingBox> = rects.iter().map(Alignable::world_bounding_box).collect();
    assert_eq!(after, before);
}
