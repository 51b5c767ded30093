//! The packed per-point record and its components.
//!
//! A [`Point`] is the atomic unit of geometry: a position, a color and a
//! texture coordinate laid out back to back as plain `f32`s. The flattened
//! order `[x, y, z, r, g, b, a, u, v]` is a hard contract with the shading
//! stage and with the scene arena, so it never changes.

use std::mem;

/// Number of floats in a flattened [`Vertex`].
pub const VERTEX_SIZE: usize = 3;
/// Number of floats in a flattened [`Color`].
pub const COLOR_SIZE: usize = 4;
/// Number of floats in a flattened [`TextureCoordinate`].
pub const TEXTURE_COORDINATE_SIZE: usize = 2;
/// Length of [`Point::array`], and the stride of the arena's vertex region in floats.
pub const BUFFER_SIZE: usize = VERTEX_SIZE + COLOR_SIZE + TEXTURE_COORDINATE_SIZE;

/// A location in 3D space. Transformed as a homogeneous point with an implicit `w = 1`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vertex {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn array(&self) -> [f32; VERTEX_SIZE] {
        [self.x, self.y, self.z]
    }

    /// Euclidean distance, used mostly by tests and tolerance checks.
    pub fn distance(&self, other: &Vertex) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl From<cgmath::Vector3<f32>> for Vertex {
    fn from(v: cgmath::Vector3<f32>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vertex> for cgmath::Vector3<f32> {
    fn from(v: Vertex) -> Self {
        cgmath::Vector3::new(v.x, v.y, v.z)
    }
}

impl From<[f32; 3]> for Vertex {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<(f32, f32, f32)> for Vertex {
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Self::new(x, y, z)
    }
}

/// Normalized RGBA color.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);

    /// Create an opaque color from 0-255 channel values.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        let f = |c: u8| c as f32 / 255.0;
        Self::rgba(f(r), f(g), f(b), 1.0)
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn array(&self) -> [f32; COLOR_SIZE] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    /// The lavender every point gets when no color is given.
    fn default() -> Self {
        Self::new(180, 164, 240)
    }
}

impl From<Color> for wgpu::Color {
    fn from(c: Color) -> Self {
        wgpu::Color {
            r: c.r as f64,
            g: c.g as f64,
            b: c.b as f64,
            a: c.a as f64,
        }
    }
}

/// Texture space position of a point.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TextureCoordinate {
    pub u: f32,
    pub v: f32,
}

impl TextureCoordinate {
    pub const fn new(u: f32, v: f32) -> Self {
        Self { u, v }
    }

    pub fn array(&self) -> [f32; TEXTURE_COORDINATE_SIZE] {
        [self.u, self.v]
    }
}

/// A colored, textured point in 3D space as it is stored on the GPU.
///
/// `Point` is `Copy`: every copy is an independent value, so deriving new
/// shapes from existing points can never write back into the source.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Point {
    pub vertex: Vertex,
    pub color: Color,
    pub texture_coordinate: TextureCoordinate,
}

impl Point {
    /// Names of the three shader attributes, in location order.
    pub const ATTRIBUTE_NAMES: [&'static str; 3] = ["position", "color", "textureCoordinate"];
    /// Byte offset of the color attribute.
    pub const COLOR_OFFSET: usize = VERTEX_SIZE * mem::size_of::<f32>();
    /// Byte offset of the texture coordinate attribute.
    pub const TEXTURE_COORDINATE_OFFSET: usize = (VERTEX_SIZE + COLOR_SIZE) * mem::size_of::<f32>();
    /// Distance in bytes between two consecutive points.
    pub const STRIDE: usize = BUFFER_SIZE * mem::size_of::<f32>();

    /// A point with the default color and a zero texture coordinate.
    pub fn new(vertex: Vertex) -> Self {
        Self::from_parts(vertex, Color::default(), TextureCoordinate::default())
    }

    pub fn with_color(vertex: Vertex, color: Color) -> Self {
        Self::from_parts(vertex, color, TextureCoordinate::default())
    }

    pub fn with_texture_coordinate(vertex: Vertex, texture_coordinate: TextureCoordinate) -> Self {
        Self::from_parts(vertex, Color::default(), texture_coordinate)
    }

    pub fn from_parts(vertex: Vertex, color: Color, texture_coordinate: TextureCoordinate) -> Self {
        Self {
            vertex,
            color,
            texture_coordinate,
        }
    }

    /// The flattened `[vertex, color, texture coordinate]` sequence.
    pub fn array(&self) -> [f32; BUFFER_SIZE] {
        let mut data = [0.0; BUFFER_SIZE];
        data[..VERTEX_SIZE].copy_from_slice(&self.vertex.array());
        data[VERTEX_SIZE..VERTEX_SIZE + COLOR_SIZE].copy_from_slice(&self.color.array());
        data[VERTEX_SIZE + COLOR_SIZE..].copy_from_slice(&self.texture_coordinate.array());
        data
    }

    /// Layout of a flattened point stream as seen by the vertex shader.
    ///
    /// Location 0 is `position`, 1 is `color` and 2 is `textureCoordinate`,
    /// all read with a stride of [`Point::STRIDE`] bytes.
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: Self::STRIDE as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: Self::COLOR_OFFSET as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: Self::TEXTURE_COORDINATE_OFFSET as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

impl From<Vertex> for Point {
    fn from(vertex: Vertex) -> Self {
        Self::new(vertex)
    }
}
