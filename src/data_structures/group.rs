//! Face groups and the [`Renderable`] capability shared by every shape.

use std::fmt::Debug;

use crate::data_structures::{
    face::TexturedFace,
    point::{BUFFER_SIZE, Point, Vertex},
    transform::{Axis, RotationDirection},
};

/// Faces that are rendered together as one object, e.g. every face of a pyramid.
///
/// Point and index order follow face order; indices are rebased so they
/// address the group's own flattened point array.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FaceGroup {
    faces: Vec<TexturedFace>,
}

impl FaceGroup {
    pub fn new(faces: Vec<TexturedFace>) -> Self {
        Self { faces }
    }

    pub fn faces(&self) -> &[TexturedFace] {
        &self.faces
    }

    /// Faces can be edited in place but the group keeps its face count.
    pub fn faces_mut(&mut self) -> &mut [TexturedFace] {
        &mut self.faces
    }

    pub fn into_faces(self) -> Vec<TexturedFace> {
        self.faces
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn point_count(&self) -> usize {
        self.faces.iter().map(TexturedFace::sides).sum()
    }

    pub fn index_count(&self) -> usize {
        self.faces.iter().map(|f| f.face().index_count()).sum()
    }

    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.faces.iter().flat_map(|f| f.points())
    }

    pub fn array(&self) -> Vec<f32> {
        let mut data = vec![0.0; self.point_count() * BUFFER_SIZE];
        self.write_array(&mut data);
        data
    }

    pub fn indices(&self) -> Vec<u32> {
        let mut data = vec![0; self.index_count()];
        self.write_indices(0, &mut data);
        data
    }

    /// Flatten every point into `out`, which must hold exactly `point_count * BUFFER_SIZE` floats.
    pub(crate) fn write_array(&self, out: &mut [f32]) {
        debug_assert_eq!(out.len(), self.point_count() * BUFFER_SIZE);
        for (chunk, point) in out.chunks_exact_mut(BUFFER_SIZE).zip(self.points()) {
            chunk.copy_from_slice(&point.array());
        }
    }

    /// Write all indices into `out`, each shifted by `base` plus the owning face's point offset.
    pub(crate) fn write_indices(&self, base: u32, out: &mut [u32]) {
        debug_assert_eq!(out.len(), self.index_count());
        let mut point_offset = base;
        let mut cursor = 0;
        for face in &self.faces {
            for index in face.face().indices() {
                out[cursor] = index + point_offset;
                cursor += 1;
            }
            point_offset += face.sides() as u32;
        }
    }

    /// Location of the first face, which composite shapes use for their base.
    pub fn location(&self) -> Vertex {
        self.faces
            .first()
            .map(TexturedFace::location)
            .unwrap_or_default()
    }

    /// Rotate every face about the same pivot, defaulting to [`FaceGroup::location`].
    pub fn rotate(
        &mut self,
        degrees: f32,
        axis: Axis,
        direction: RotationDirection,
        pivot: Option<Vertex>,
    ) {
        let pivot = pivot.unwrap_or_else(|| self.location());
        rotate_faces(&mut self.faces, degrees, axis, direction, pivot);
    }

    pub fn translate(&mut self, dx: f32, dy: f32, dz: f32) {
        translate_faces(&mut self.faces, dx, dy, dz);
    }
}

fn rotate_faces(
    faces: &mut [TexturedFace],
    degrees: f32,
    axis: Axis,
    direction: RotationDirection,
    pivot: Vertex,
) {
    for face in faces.iter_mut() {
        face.rotate(degrees, axis, direction, Some(pivot));
    }
}

fn translate_faces(faces: &mut [TexturedFace], dx: f32, dy: f32, dz: f32) {
    for face in faces.iter_mut() {
        face.translate(dx, dy, dz);
    }
}

impl From<Vec<TexturedFace>> for FaceGroup {
    fn from(faces: Vec<TexturedFace>) -> Self {
        Self::new(faces)
    }
}

/// Anything the scene can hold: exposes its faces and moves them rigidly.
///
/// The face count of a renderable is fixed once it is built. Faces are only
/// handed out mutably as a slice, so they can be edited but never added,
/// removed or swapped for a different group.
pub trait Renderable {
    fn faces(&self) -> &FaceGroup;

    fn faces_mut(&mut self) -> &mut [TexturedFace];

    fn location(&self) -> Vertex {
        self.faces().location()
    }

    /// Rotate about `pivot`, or about [`Renderable::location`] when `None`.
    fn rotate(
        &mut self,
        degrees: f32,
        axis: Axis,
        direction: RotationDirection,
        pivot: Option<Vertex>,
    ) {
        let pivot = pivot.unwrap_or_else(|| self.location());
        rotate_faces(self.faces_mut(), degrees, axis, direction, pivot);
    }

    fn translate(&mut self, dx: f32, dy: f32, dz: f32) {
        translate_faces(self.faces_mut(), dx, dy, dz);
    }
}

impl Debug for dyn Renderable + 'static {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderable")
            .field("faces", &self.faces().len())
            .field("points", &self.faces().point_count())
            .finish()
    }
}

impl Renderable for FaceGroup {
    fn faces(&self) -> &FaceGroup {
        self
    }

    fn faces_mut(&mut self) -> &mut [TexturedFace] {
        &mut self.faces
    }
}
