//! Registry behavior under concurrent primitive construction and teardown.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use shapekit::primitive::{self, Primitive, PrimitiveKind, SharedRegistry};
use shapekit::registry::{ColorKey, ColorKeyRegistry};

const THREADS: usize = 6;
const PER_THREAD: usize = 400;

#[test]
fn concurrent_construction_yields_distinct_keys() {
    let reg: SharedRegistry = Arc::new(ColorKeyRegistry::new());

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let reg = Arc::clone(&reg);
            thread::spawn(move || {
                let kind = [PrimitiveKind::Circle, PrimitiveKind::Rectangle, PrimitiveKind::Triangle][t % 3];
                (0..PER_THREAD).map(|_| primitive::spawn(&reg, kind).unwrap()).collect::<Vec<_>>()
            })
        })
        .collect();
    let shapes: Vec<Box<dyn Primitive>> = handles.into_iter().flat_map(|h| h.join().unwrap()).collect();

    let keys: HashSet<ColorKey> = shapes.iter().map(|s| s.color_key()).collect();
    assert_eq!(keys.len(), THREADS * PER_THREAD);
    assert_eq!(reg.len(), THREADS * PER_THREAD);
    for s in &shapes {
        assert_eq!(reg.lookup(s.color_key()), Some(s.id()));
    }

    drop(shapes);
    assert!(reg.is_empty());
}

#[test]
fn lookups_stay_consistent_while_others_churn() {
    let reg: SharedRegistry = Arc::new(ColorKeyRegistry::new());
    let stable: Vec<Box<dyn Primitive>> =
        (0..100).map(|_| primitive::spawn(&reg, PrimitiveKind::Circle).unwrap()).collect();

    thread::scope(|s| {
        for _ in 0..3 {
            s.spawn(|| {
                for _ in 0..500 {
                    // Created and dropped immediately; its key is released.
                    let temp = primitive::spawn(&reg, PrimitiveKind::Rectangle).unwrap();
                    assert!(reg.contains(temp.color_key()));
                }
            });
        }
        s.spawn(|| {
            for _ in 0..20 {
                for p in &stable {
                    assert_eq!(reg.lookup(p.color_key()), Some(p.id()));
                }
            }
        });
    });

    assert_eq!(reg.len(), stable.len());
}

#[test]
fn released_key_is_never_resolved() {
    let reg: SharedRegistry = Arc::new(ColorKeyRegistry::new());
    let shape = primitive::spawn(&reg, PrimitiveKind::Triangle).unwrap();
    let key = shape.color_key();
    drop(shape);
    assert_eq!(reg.lookup(key), None);
    assert_eq!(reg.pick(key.color()), None);
}
