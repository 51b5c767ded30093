//! Texture references carried alongside geometry.
//!
//! Decoding images and binding them to samplers happens outside this crate.
//! Faces only remember *which* textures they use and how strongly each one
//! is blended in.

/// A texture file and the weight it is blended with, in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    path: String,
    blend: f32,
}

impl Texture {
    /// A fully opaque texture.
    pub fn new(path: impl Into<String>) -> Self {
        Self::with_blend(path, 1.0)
    }

    /// `blend` is clamped into `[0, 1]`.
    pub fn with_blend(path: impl Into<String>, blend: f32) -> Self {
        Self {
            path: path.into(),
            blend: blend.clamp(0.0, 1.0),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn blend(&self) -> f32 {
        self.blend
    }
}

/// Textures blended together on one corner or face.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextureGroup {
    textures: Vec<Texture>,
}

impl TextureGroup {
    pub fn new(textures: Vec<Texture>) -> Self {
        Self { textures }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn textures(&self) -> &[Texture] {
        &self.textures
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    pub fn push(&mut self, texture: Texture) {
        self.textures.push(texture);
    }
}

impl From<Texture> for TextureGroup {
    fn from(texture: Texture) -> Self {
        Self::new(vec![texture])
    }
}

impl FromIterator<Texture> for TextureGroup {
    fn from_iter<I: IntoIterator<Item = Texture>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
