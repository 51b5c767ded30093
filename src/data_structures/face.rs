//! Planar polygons and their textured, orientation-aware wrapper.

use cgmath::{InnerSpace, Vector3};

use crate::{
    data_structures::{
        point::{Color, Point, TextureCoordinate, Vertex},
        texture::TextureGroup,
        transform::{Axis, RotationDirection, TransformMatrix},
    },
    error::GeometryError,
};

/// An ordered polygon of points.
///
/// Winding matters: the first three points decide which side is the front.
/// Faces are drawn as a triangle fan rooted at the first point.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    points: Vec<Point>,
}

impl Face {
    /// Any polygon with at least three points.
    pub fn new(points: Vec<Point>) -> Result<Self, GeometryError> {
        if points.len() < 3 {
            return Err(GeometryError::TooFewPoints {
                found: points.len(),
            });
        }
        Ok(Self { points })
    }

    /// Exactly three points, stored as given.
    pub fn triangle(points: Vec<Point>) -> Result<Self, GeometryError> {
        if points.len() != 3 {
            return Err(GeometryError::PointCount {
                shape: "triangle",
                expected: 3,
                found: points.len(),
            });
        }
        Ok(Self { points })
    }

    /// Four corners around `center` in the XY plane, counter-clockwise from
    /// the bottom-left corner: `(-w, -h)`, `(w, -h)`, `(w, h)`, `(-w, h)`
    /// (half extents). Texture coordinates span the unit square in the same order.
    pub fn rectangle(center: Vertex, width: f32, height: f32, color: Color) -> Self {
        let (hw, hh) = (width / 2.0, height / 2.0);
        let corner = |dx: f32, dy: f32, u: f32, v: f32| {
            Point::from_parts(
                Vertex::new(center.x + dx, center.y + dy, center.z),
                color,
                TextureCoordinate::new(u, v),
            )
        };
        Self {
            points: vec![
                corner(-hw, -hh, 0.0, 0.0),
                corner(hw, -hh, 1.0, 0.0),
                corner(hw, hh, 1.0, 1.0),
                corner(-hw, hh, 0.0, 1.0),
            ],
        }
    }

    pub fn sides(&self) -> usize {
        self.points.len()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Points can be edited but never added or removed.
    pub fn points_mut(&mut self) -> &mut [Point] {
        &mut self.points
    }

    /// Fan triangulation: `(0, i, i + 1)` for every inner point.
    pub fn indices(&self) -> Vec<u32> {
        (1..self.points.len() as u32 - 1)
            .flat_map(|i| [0, i, i + 1])
            .collect()
    }

    pub fn index_count(&self) -> usize {
        (self.points.len() - 2) * 3
    }

    /// All points flattened back to back.
    pub fn array(&self) -> Vec<f32> {
        self.points.iter().flat_map(|p| p.array()).collect()
    }

    pub fn centroid(&self) -> Vertex {
        let n = self.points.len() as f32;
        let (x, y, z) = self.points.iter().fold((0.0, 0.0, 0.0), |(x, y, z), p| {
            (x + p.vertex.x, y + p.vertex.y, z + p.vertex.z)
        });
        Vertex::new(x / n, y / n, z / n)
    }

    /// Unit normal following the right-hand rule over the winding, or `None`
    /// when every point is collinear.
    ///
    /// Uses Newell's method, so it holds for any planar polygon whatever its first three points.
    pub fn normal(&self) -> Option<Vertex> {
        let n = self.points.len();
        let mut normal = Vector3::new(0.0, 0.0, 0.0);
        for i in 0..n {
            let a = self.points[i].vertex;
            let b = self.points[(i + 1) % n].vertex;
            normal.x += (a.y - b.y) * (a.z + b.z);
            normal.y += (a.z - b.z) * (a.x + b.x);
            normal.z += (a.x - b.x) * (a.y + b.y);
        }
        if normal.magnitude2() <= f32::EPSILON {
            return None;
        }
        Some(normal.normalize().into())
    }

    /// Flip the front side by reversing the winding. Point 0 stays first.
    pub fn reverse_winding(&mut self) {
        self.points[1..].reverse();
    }

    /// Width and height measured inside the face's own plane.
    ///
    /// The width axis is world X projected onto the plane, or world Y when
    /// the plane is perpendicular to X; the height axis is normal × width.
    /// Faces without a normal fall back to their XY bounding box.
    pub fn extent(&self) -> (f32, f32) {
        let (u, v) = match self.normal() {
            Some(normal) => {
                let n = Vector3::from(normal);
                let project = |axis: Vector3<f32>| axis - n * n.dot(axis);
                let mut u = project(Vector3::unit_x());
                if u.magnitude2() < 1e-6 {
                    u = project(Vector3::unit_y());
                }
                let u = u.normalize();
                (u, n.cross(u))
            }
            None => (Vector3::unit_x(), Vector3::unit_y()),
        };
        let span = |axis: Vector3<f32>| {
            let (min, max) = self.points.iter().fold((f32::MAX, f32::MIN), |(lo, hi), p| {
                let d = Vector3::from(p.vertex).dot(axis);
                (lo.min(d), hi.max(d))
            });
            max - min
        };
        (span(u), span(v))
    }

    pub fn transform(&mut self, matrix: &TransformMatrix) {
        for point in self.points.iter_mut() {
            *point = matrix.transform_point(*point);
        }
    }
}

/// Accumulated rotation of a face relative to its local, axis-aligned frame.
///
/// The per-axis totals are kept for callers, the matrix is the exact
/// composition of every rotation in the order it happened.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Orientation {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    matrix: TransformMatrix,
}

impl Orientation {
    fn rotate(&mut self, degrees: f32, axis: Axis, direction: RotationDirection) {
        let signed = direction.signed(degrees);
        match axis {
            Axis::X => self.x += signed,
            Axis::Y => self.y += signed,
            Axis::Z => self.z += signed,
        }
        self.matrix = TransformMatrix::rotation(degrees, axis, direction) * self.matrix;
    }

    /// `self` applied after `inner`.
    fn compose(&self, inner: &Orientation) -> Orientation {
        Orientation {
            x: self.x + inner.x,
            y: self.y + inner.y,
            z: self.z + inner.z,
            matrix: self.matrix * inner.matrix,
        }
    }

    pub fn matrix(&self) -> TransformMatrix {
        self.matrix
    }

    pub fn is_identity(&self) -> bool {
        self.matrix == TransformMatrix::identity()
    }
}

/// A face plus one texture group per corner and the orientation state
/// needed to rebuild its unrotated frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TexturedFace {
    face: Face,
    textures: Vec<TextureGroup>,
    orientation: Orientation,
    width: f32,
    height: f32,
    location: Vertex,
}

impl TexturedFace {
    /// Fails unless there is exactly one texture group per side.
    pub fn new(face: Face, textures: Vec<TextureGroup>) -> Result<Self, GeometryError> {
        if textures.len() != face.sides() {
            return Err(GeometryError::TextureCount {
                expected: face.sides(),
                found: textures.len(),
            });
        }
        Ok(Self::assemble(face, textures))
    }

    /// Every corner gets an empty texture group.
    pub fn untextured(face: Face) -> Self {
        let textures = vec![TextureGroup::empty(); face.sides()];
        Self::assemble(face, textures)
    }

    fn assemble(face: Face, textures: Vec<TextureGroup>) -> Self {
        let (width, height) = face.extent();
        let location = face.centroid();
        Self {
            face,
            textures,
            orientation: Orientation::default(),
            width,
            height,
            location,
        }
    }

    pub fn face(&self) -> &Face {
        &self.face
    }

    pub fn points(&self) -> &[Point] {
        self.face.points()
    }

    pub fn points_mut(&mut self) -> &mut [Point] {
        self.face.points_mut()
    }

    pub fn sides(&self) -> usize {
        self.face.sides()
    }

    pub fn textures(&self) -> &[TextureGroup] {
        &self.textures
    }

    pub fn orientation(&self) -> &Orientation {
        &self.orientation
    }

    pub fn rotation_x(&self) -> f32 {
        self.orientation.x
    }

    pub fn rotation_y(&self) -> f32 {
        self.orientation.y
    }

    pub fn rotation_z(&self) -> f32 {
        self.orientation.z
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn location(&self) -> Vertex {
        self.location
    }

    /// Rotate about `pivot`, or about the face's own location when `None`.
    pub fn rotate(
        &mut self,
        degrees: f32,
        axis: Axis,
        direction: RotationDirection,
        pivot: Option<Vertex>,
    ) {
        let pivot = pivot.unwrap_or(self.location);
        let matrix = TransformMatrix::rotation_about(degrees, axis, direction, pivot);
        self.face.transform(&matrix);
        self.location = matrix.transform_vertex(self.location);
        self.orientation.rotate(degrees, axis, direction);
    }

    pub fn translate(&mut self, dx: f32, dy: f32, dz: f32) {
        let matrix = TransformMatrix::translation(dx, dy, dz);
        self.face.transform(&matrix);
        self.location = matrix.transform_vertex(self.location);
    }

    /// Flip the front side. Texture groups follow their corners.
    pub fn reverse_winding(&mut self) {
        self.face.reverse_winding();
        self.textures[1..].reverse();
    }

    /// Undo every rotation about the current location and hand back what was undone.
    pub(crate) fn clear_orientation(&mut self) -> Orientation {
        let captured = self.orientation;
        if let Some(inverse) = captured.matrix.inverse() {
            self.face.transform(&inverse.about(self.location));
        }
        self.orientation = Orientation::default();
        captured
    }

    /// Apply `orientation` about `pivot` on top of whatever this face already has.
    pub(crate) fn restore_orientation(&mut self, orientation: &Orientation, pivot: Vertex) {
        let matrix = orientation.matrix.about(pivot);
        self.face.transform(&matrix);
        self.location = matrix.transform_vertex(self.location);
        self.orientation = orientation.compose(&self.orientation);
    }

    /// Rectangles know their exact frame, polygons only their bounding box.
    pub(crate) fn with_frame(mut self, width: f32, height: f32, location: Vertex) -> Self {
        self.width = width;
        self.height = height;
        self.location = location;
        self
    }
}
