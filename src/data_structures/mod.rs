//! Engine data structures: points, transforms, faces and shapes.
//!
//! This module contains the geometry types the scene arena is built from:
//!
//! - `point` contains the packed per-point record and its components
//! - `transform` holds 4x4 matrices for translation and pivot rotation
//! - `texture` holds texture references carried by faces
//! - `face` contains polygons and their orientation-aware textured wrapper
//! - `group` defines face groups and the `Renderable` capability
//! - `shapes` contains single-face renderables (triangle, rectangle)
//! - `solid` builds composite shapes (pyramid, extruded solid) from a base face

pub mod face;
pub mod group;
pub mod point;
pub mod shapes;
pub mod solid;
pub mod texture;
pub mod transform;
