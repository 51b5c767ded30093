//! Composite shapes extruded from a base face.
//!
//! Every composite is built the same way through [`in_local_frame`]: the base
//! is turned back into its axis-aligned frame, new faces are generated along
//! the local Z axis, and the base's orientation is re-applied to all of them
//! about the base location. Building directly in the rotated frame would
//! stack the base rotation on top of the new points a second time.

use crate::{
    data_structures::{
        face::{Face, TexturedFace},
        group::{FaceGroup, Renderable},
        point::{Point, TextureCoordinate},
        texture::TextureGroup,
        transform::TransformMatrix,
    },
    error::GeometryError,
};

/// Run `build` on `base` in its local frame and return `base` followed by the
/// built faces, all in the orientation `base` originally had.
///
/// `build` sees the de-rotated base and must produce faces in that same frame.
pub fn in_local_frame<F>(mut base: TexturedFace, build: F) -> Result<FaceGroup, GeometryError>
where
    F: FnOnce(&TexturedFace) -> Result<Vec<TexturedFace>, GeometryError>,
{
    let orientation = base.clear_orientation();
    let pivot = base.location();
    let derived = build(&base)?;

    let mut faces = Vec::with_capacity(derived.len() + 1);
    faces.push(base);
    faces.extend(derived);
    for face in faces.iter_mut() {
        face.restore_orientation(&orientation, pivot);
    }
    log::trace!(
        "built composite of {} faces in local frame (rotation {:?})",
        faces.len(),
        (orientation.x, orientation.y, orientation.z)
    );
    Ok(FaceGroup::new(faces))
}

fn check_texture_count(base: &TexturedFace, textures: &[TextureGroup]) -> Result<(), GeometryError> {
    if textures.len() != base.sides() {
        return Err(GeometryError::TextureCount {
            expected: base.sides(),
            found: textures.len(),
        });
    }
    Ok(())
}

/// A base polygon joined to a single apex: one base plus one triangle per edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Pyramid {
    faces: FaceGroup,
}

impl Pyramid {
    /// Raise an apex `length_z` above the base location along the base normal.
    /// The apex has the default color whatever the base is colored.
    ///
    /// Side `i` spans `base[i]`, the apex and `base[i + 1]` and is textured
    /// with `textures[i]`, so there must be one texture group per base side.
    pub fn new(
        base: impl Into<TexturedFace>,
        textures: Vec<TextureGroup>,
        length_z: f32,
    ) -> Result<Self, GeometryError> {
        let base = base.into();
        check_texture_count(&base, &textures)?;

        let faces = in_local_frame(base, |base| {
            let points = base.points();
            let n = points.len();
            let apex = Point::with_texture_coordinate(
                TransformMatrix::translation(0.0, 0.0, length_z) * base.location(),
                TextureCoordinate::new(0.5, 1.0),
            );

            (0..n)
                .map(|i| {
                    let mut left = points[i];
                    left.texture_coordinate = TextureCoordinate::new(1.0, 0.0);
                    let mut right = points[(i + 1) % n];
                    right.texture_coordinate = TextureCoordinate::new(0.0, 0.0);

                    let side = Face::triangle(vec![left, apex, right])?;
                    TexturedFace::new(side, vec![textures[i].clone(); 3])
                })
                .collect()
        })?;
        Ok(Self { faces })
    }

    pub fn base(&self) -> &TexturedFace {
        &self.faces.faces()[0]
    }

    pub fn sides(&self) -> &[TexturedFace] {
        &self.faces.faces()[1..]
    }
}

impl Renderable for Pyramid {
    fn faces(&self) -> &FaceGroup {
        &self.faces
    }

    fn faces_mut(&mut self) -> &mut [TexturedFace] {
        self.faces.faces_mut()
    }
}

/// A prism: the base, a copy of it moved along the base normal, and one
/// quadrilateral wall per base edge.
///
/// The cap and the walls wind the same way as the base relative to the
/// solid, so a counter-clockwise base gives a solid whose faces all point
/// inward, like a [`Pyramid`] built on the same base.
#[derive(Debug, Clone, PartialEq)]
pub struct Solid {
    faces: FaceGroup,
}

impl Solid {
    /// Extrude `base` by `length_z`. Wall `i` is textured with `textures[i]`,
    /// the cap reuses the base's own texture groups.
    ///
    /// The cap keeps point 0 of the base first and lists the rest in reverse.
    pub fn extrude(
        base: impl Into<TexturedFace>,
        textures: Vec<TextureGroup>,
        length_z: f32,
    ) -> Result<Self, GeometryError> {
        let base = base.into();
        check_texture_count(&base, &textures)?;

        let faces = in_local_frame(base, |base| {
            let mut top = base.clone();
            top.translate(0.0, 0.0, length_z);
            top.reverse_winding();

            let bottom_points = base.points();
            let n = bottom_points.len();
            // Top corner i sits above bottom corner i, whatever order the reversed cap stores them in.
            let top_points: Vec<Point> = bottom_points
                .iter()
                .map(|p| TransformMatrix::translation(0.0, 0.0, length_z) * *p)
                .collect();
            let corner = |p: Point, u: f32, v: f32| Point {
                texture_coordinate: TextureCoordinate::new(u, v),
                ..p
            };

            let mut faces = Vec::with_capacity(n + 1);
            for i in 0..n {
                let next = (i + 1) % n;
                let wall = Face::new(vec![
                    corner(bottom_points[i], 0.0, 0.0),
                    corner(top_points[i], 0.0, 1.0),
                    corner(top_points[next], 1.0, 1.0),
                    corner(bottom_points[next], 1.0, 0.0),
                ])?;
                faces.push(TexturedFace::new(wall, vec![textures[i].clone(); 4])?);
            }
            faces.insert(0, top);
            Ok(faces)
        })?;
        Ok(Self { faces })
    }

    pub fn base(&self) -> &TexturedFace {
        &self.faces.faces()[0]
    }

    pub fn top(&self) -> &TexturedFace {
        &self.faces.faces()[1]
    }

    pub fn walls(&self) -> &[TexturedFace] {
        &self.faces.faces()[2..]
    }
}

impl Renderable for Solid {
    fn faces(&self) -> &FaceGroup {
        &self.faces
    }

    fn faces_mut(&mut self) -> &mut [TexturedFace] {
        self.faces.faces_mut()
    }
}
