//! Single-face renderables.

use crate::{
    data_structures::{
        face::{Face, TexturedFace},
        group::{FaceGroup, Renderable},
        point::{Color, Point, Vertex},
        texture::TextureGroup,
        transform::{Axis, RotationDirection},
    },
    error::GeometryError,
};

/// A renderable made of exactly three points.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    faces: FaceGroup,
}

impl Triangle {
    pub fn new(points: Vec<Point>) -> Result<Self, GeometryError> {
        let face = Face::triangle(points)?;
        Ok(Self::from_face(TexturedFace::untextured(face)))
    }

    /// `textures` must hold one group per corner.
    pub fn textured(points: Vec<Point>, textures: Vec<TextureGroup>) -> Result<Self, GeometryError> {
        let face = Face::triangle(points)?;
        Ok(Self::from_face(TexturedFace::new(face, textures)?))
    }

    fn from_face(face: TexturedFace) -> Self {
        Self {
            faces: FaceGroup::new(vec![face]),
        }
    }

    pub fn face(&self) -> &TexturedFace {
        &self.faces.faces()[0]
    }

    pub fn into_face(self) -> TexturedFace {
        self.faces.into_faces().swap_remove(0)
    }
}

impl Renderable for Triangle {
    fn faces(&self) -> &FaceGroup {
        &self.faces
    }

    fn faces_mut(&mut self) -> &mut [TexturedFace] {
        self.faces.faces_mut()
    }
}

/// An axis-aligned rectangle in its local XY plane, see [`Face::rectangle`] for the winding.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    faces: FaceGroup,
}

impl Rectangle {
    pub fn new(center: Vertex, width: f32, height: f32, color: Color) -> Self {
        let face = Face::rectangle(center, width, height, color);
        Self::from_face(TexturedFace::untextured(face).with_frame(width, height, center))
    }

    /// `textures` must hold one group per corner, i.e. four.
    pub fn textured(
        center: Vertex,
        width: f32,
        height: f32,
        color: Color,
        textures: Vec<TextureGroup>,
    ) -> Result<Self, GeometryError> {
        let face = Face::rectangle(center, width, height, color);
        let face = TexturedFace::new(face, textures)?.with_frame(width, height, center);
        Ok(Self::from_face(face))
    }

    fn from_face(face: TexturedFace) -> Self {
        Self {
            faces: FaceGroup::new(vec![face]),
        }
    }

    /// Turn the rectangle about its center by counter-clockwise degrees,
    /// X first, then Y, then Z.
    pub fn rotated(mut self, x: f32, y: f32, z: f32) -> Self {
        for (degrees, axis) in [(x, Axis::X), (y, Axis::Y), (z, Axis::Z)] {
            if degrees != 0.0 {
                self.rotate(degrees, axis, RotationDirection::CounterClockwise, None);
            }
        }
        self
    }

    pub fn face(&self) -> &TexturedFace {
        &self.faces.faces()[0]
    }

    pub fn into_face(self) -> TexturedFace {
        self.faces.into_faces().swap_remove(0)
    }
}

impl Renderable for Rectangle {
    fn faces(&self) -> &FaceGroup {
        &self.faces
    }

    fn faces_mut(&mut self) -> &mut [TexturedFace] {
        self.faces.faces_mut()
    }
}

impl From<Rectangle> for TexturedFace {
    fn from(rectangle: Rectangle) -> Self {
        rectangle.into_face()
    }
}

impl From<Triangle> for TexturedFace {
    fn from(triangle: Triangle) -> Self {
        triangle.into_face()
    }
}
