use facet_ngin::{Axis, Color, Point, RotationDirection, TextureCoordinate, TransformMatrix, Vertex};

use crate::common::test_utils::{assert_vertex_close, EPSILON};

mod common;

#[test]
fn should_translate_vertices() {
    let m = TransformMatrix::translation(1.0, -2.0, 0.5);
    assert_vertex_close(m * Vertex::new(1.0, 1.0, 1.0), Vertex::new(2.0, -1.0, 1.5));
}

#[test]
fn should_map_direction_to_angle_sign() {
    let x = Vertex::new(1.0, 0.0, 0.0);
    let ccw = TransformMatrix::rotation(90.0, Axis::Z, RotationDirection::CounterClockwise);
    let cw = TransformMatrix::rotation(90.0, Axis::Z, RotationDirection::Clockwise);
    assert_vertex_close(ccw * x, Vertex::new(0.0, 1.0, 0.0));
    assert_vertex_close(cw * x, Vertex::new(0.0, -1.0, 0.0));

    let rx = TransformMatrix::rotation(90.0, Axis::X, RotationDirection::CounterClockwise);
    assert_vertex_close(rx * Vertex::new(0.0, 1.0, 0.0), Vertex::new(0.0, 0.0, 1.0));
    let ry = TransformMatrix::rotation(90.0, Axis::Y, RotationDirection::CounterClockwise);
    assert_vertex_close(ry * Vertex::new(0.0, 0.0, 1.0), Vertex::new(1.0, 0.0, 0.0));
}

#[test]
fn should_apply_rightmost_matrix_first() {
    let t = TransformMatrix::translation(1.0, 0.0, 0.0);
    let r = TransformMatrix::rotation(90.0, Axis::Z, RotationDirection::CounterClockwise);
    let x = Vertex::new(1.0, 0.0, 0.0);
    assert_vertex_close((t * r) * x, Vertex::new(1.0, 1.0, 0.0));
    assert_vertex_close((r * t) * x, Vertex::new(0.0, 2.0, 0.0));
}

#[test]
fn should_rotate_about_pivot() {
    let pivot = Vertex::new(1.0, 0.0, 0.0);
    let m = TransformMatrix::rotation_about(180.0, Axis::Z, RotationDirection::CounterClockwise, pivot);
    assert_vertex_close(m * Vertex::new(2.0, 0.0, 0.0), Vertex::new(0.0, 0.0, 0.0));
    assert_vertex_close(m * pivot, pivot);

    // The reversed composition orbits a different point entirely.
    let r = TransformMatrix::rotation(180.0, Axis::Z, RotationDirection::CounterClockwise);
    let reversed = TransformMatrix::translation(-1.0, 0.0, 0.0) * r * TransformMatrix::translation(1.0, 0.0, 0.0);
    let wrong = reversed * Vertex::new(2.0, 0.0, 0.0);
    assert!(wrong.distance(&Vertex::new(0.0, 0.0, 0.0)) > 1.0);
}

#[test]
fn should_only_transform_vertex_of_point() {
    let color = Color::new(10, 20, 30);
    let tex = TextureCoordinate::new(0.3, 0.6);
    let point = Point::from_parts(Vertex::new(1.0, 2.0, 3.0), color, tex);
    let moved = TransformMatrix::rotation(45.0, Axis::Y, RotationDirection::Clockwise) * point;
    assert_eq!(moved.color, color);
    assert_eq!(moved.texture_coordinate, tex);
    assert!(moved.vertex.distance(&point.vertex) > EPSILON);
}

#[test]
fn should_round_trip_rotation_about_pivot() {
    let pivot = Vertex::new(-3.0, 2.0, 7.0);
    let v = Vertex::new(0.5, -1.25, 4.0);
    for axis in [Axis::X, Axis::Y, Axis::Z] {
        let there = TransformMatrix::rotation_about(33.0, axis, RotationDirection::CounterClockwise, pivot);
        let back = TransformMatrix::rotation_about(-33.0, axis, RotationDirection::CounterClockwise, pivot);
        assert_vertex_close(back * (there * v), v);
        let inverse = there.inverse().expect("rotations are invertible");
        assert_vertex_close(inverse * (there * v), v);
    }
}
