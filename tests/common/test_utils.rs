#![allow(dead_code)]

use std::f32::consts::TAU;

use facet_ngin::{Color, Face, FaceGroup, Point, TextureGroup, Texture, TexturedFace, Vertex};

pub const EPSILON: f32 = 1e-4;

pub fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[track_caller]
pub fn assert_vertex_close(actual: Vertex, expected: Vertex) {
    assert!(
        actual.distance(&expected) < EPSILON,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

#[track_caller]
pub fn assert_floats_close(actual: &[f32], expected: &[f32]) {
    assert_eq!(actual.len(), expected.len(), "length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!((a - e).abs() < EPSILON, "element {}: expected {}, got {}", i, e, a);
    }
}

/// A regular `n`-gon of circumradius `radius` around `center` in the XY plane, counter-clockwise.
pub fn regular_polygon(n: usize, radius: f32, center: Vertex) -> Face {
    let points = (0..n)
        .map(|i| {
            let angle = TAU * i as f32 / n as f32;
            Point::with_color(
                Vertex::new(
                    center.x + radius * angle.cos(),
                    center.y + radius * angle.sin(),
                    center.z,
                ),
                Color::WHITE,
            )
        })
        .collect();
    Face::new(points).expect("n >= 3")
}

pub fn textures(n: usize) -> Vec<TextureGroup> {
    (0..n)
        .map(|i| Texture::with_blend(format!("side_{}.png", i), 0.5).into())
        .collect()
}

/// Mean of every point in the group; inside any convex solid.
pub fn group_center(group: &FaceGroup) -> Vertex {
    let n = group.point_count() as f32;
    let (x, y, z) = group.points().fold((0.0, 0.0, 0.0), |(x, y, z), p| {
        (x + p.vertex.x, y + p.vertex.y, z + p.vertex.z)
    });
    Vertex::new(x / n, y / n, z / n)
}

/// Positive when `face` points away from `center`, negative when it points towards it.
pub fn facing(center: Vertex, face: &TexturedFace) -> f32 {
    let normal = face.face().normal().expect("face is not degenerate");
    let at = face.face().centroid();
    normal.x * (at.x - center.x) + normal.y * (at.y - center.y) + normal.z * (at.z - center.z)
}
