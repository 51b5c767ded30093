//! 4x4 homogeneous transform matrices.
//!
//! Matrices act on column vectors, so in `a * b` the matrix `b` is applied
//! first. Every composed transform in this crate is written with that
//! convention, most importantly rotation about a pivot:
//!
//! ```text
//! translation(pivot) * rotation * translation(-pivot)
//! ```
//!
//! i.e. move the pivot to the origin, rotate, move back.

use std::ops::Mul;

use cgmath::{Deg, Matrix4, SquareMatrix, Vector3, Vector4};

use crate::data_structures::point::{Point, Vertex};

/// One of the three coordinate axes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Sense of a rotation when looking down the axis towards the origin.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum RotationDirection {
    #[default]
    CounterClockwise,
    Clockwise,
}

impl RotationDirection {
    /// Counter-clockwise rotations are positive, clockwise ones negative.
    pub fn signed(self, degrees: f32) -> f32 {
        match self {
            RotationDirection::CounterClockwise => degrees,
            RotationDirection::Clockwise => -degrees,
        }
    }
}

/// An affine transform stored as a 4x4 matrix.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TransformMatrix(Matrix4<f32>);

impl TransformMatrix {
    pub fn identity() -> Self {
        Self(Matrix4::identity())
    }

    pub fn translation(dx: f32, dy: f32, dz: f32) -> Self {
        Self(Matrix4::from_translation(Vector3::new(dx, dy, dz)))
    }

    /// Rotation about `axis` through the origin. `degrees` is interpreted in `direction`.
    pub fn rotation(degrees: f32, axis: Axis, direction: RotationDirection) -> Self {
        let angle = Deg(direction.signed(degrees));
        Self(match axis {
            Axis::X => Matrix4::from_angle_x(angle),
            Axis::Y => Matrix4::from_angle_y(angle),
            Axis::Z => Matrix4::from_angle_z(angle),
        })
    }

    /// Rotation about an axis parallel to `axis` that passes through `pivot`.
    pub fn rotation_about(
        degrees: f32,
        axis: Axis,
        direction: RotationDirection,
        pivot: Vertex,
    ) -> Self {
        Self::translation(pivot.x, pivot.y, pivot.z)
            * Self::rotation(degrees, axis, direction)
            * Self::translation(-pivot.x, -pivot.y, -pivot.z)
    }

    /// Conjugate `self` so that it acts about `pivot` instead of the origin.
    pub fn about(self, pivot: Vertex) -> Self {
        Self::translation(pivot.x, pivot.y, pivot.z)
            * self
            * Self::translation(-pivot.x, -pivot.y, -pivot.z)
    }

    /// `None` when the matrix is singular, which never happens for the
    /// rotations and translations built here.
    pub fn inverse(&self) -> Option<Self> {
        self.0.invert().map(Self)
    }

    pub fn transform_vertex(&self, vertex: Vertex) -> Vertex {
        let v = self.0 * Vector4::new(vertex.x, vertex.y, vertex.z, 1.0);
        Vertex::new(v.x, v.y, v.z)
    }

    /// Only the vertex moves; color and texture coordinate pass through.
    pub fn transform_point(&self, point: Point) -> Point {
        Point {
            vertex: self.transform_vertex(point.vertex),
            ..point
        }
    }

    pub fn matrix(&self) -> Matrix4<f32> {
        self.0
    }
}

impl Default for TransformMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<Matrix4<f32>> for TransformMatrix {
    fn from(m: Matrix4<f32>) -> Self {
        Self(m)
    }
}

impl Mul<TransformMatrix> for TransformMatrix {
    type Output = Self;

    fn mul(self, rhs: TransformMatrix) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl<'a, 'b> Mul<&'b TransformMatrix> for &'a TransformMatrix {
    type Output = TransformMatrix;

    fn mul(self, rhs: &'b TransformMatrix) -> Self::Output {
        TransformMatrix(self.0 * rhs.0)
    }
}

impl Mul<Vertex> for TransformMatrix {
    type Output = Vertex;

    fn mul(self, rhs: Vertex) -> Self::Output {
        self.transform_vertex(rhs)
    }
}

impl Mul<Point> for TransformMatrix {
    type Output = Point;

    fn mul(self, rhs: Point) -> Self::Output {
        self.transform_point(rhs)
    }
}
