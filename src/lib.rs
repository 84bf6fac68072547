//! Geometry, alignment and color-key picking for 2D drawable primitives.
//!
//! The crate models a small drawing surface: circles, rectangles and triangles
//! that can be aligned to a shared edge or center line, and that each carry a
//! unique opaque color so a pick buffer sample resolves back to the shape that
//! drew it. Hosts feed shapes in, call [`align`](align::align) or
//! [`Scene::align`](scene::Scene::align), and render with whatever backend
//! they like.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`geometry`] | `Point` and the axis-aligned `BoundingBox` |
//! | [`transform`] | 2D affine `Transform` |
//! | [`align`] | The `Alignable` trait and the alignment engine |
//! | [`config`] | Alignment tolerance, loaded from the environment |
//! | [`color`] | ARGB `Color` packing |
//! | [`registry`] | Concurrent color-key allocator and owner lookup |
//! | [`primitive`] | Concrete shapes and their property descriptors |
//! | [`scene`] | In-memory store of live primitives |
//! | [`consts`] | Shared numeric constants (tolerances, key range, defaults) |

pub mod align;
pub mod color;
pub mod config;
pub mod consts;
pub mod geometry;
pub mod primitive;
pub mod registry;
pub mod scene;
pub mod transform;
