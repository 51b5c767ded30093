//! Start-up options consumed by whatever opens the window.

use crate::{data_structures::point::Color, scene::Scene};

/// Window size, first scene and background colour.
#[derive(Debug)]
pub struct Options {
    pub width: u32,
    pub height: u32,
    pub starting_scene: Option<Scene>,
    pub clear_colour: Color,
}

impl Options {
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_starting_scene(mut self, scene: Scene) -> Self {
        self.starting_scene = Some(scene);
        self
    }

    pub fn with_clear_colour(mut self, colour: Color) -> Self {
        self.clear_colour = colour;
        self
    }

    /// The clear colour as the render pass expects it.
    pub fn wgpu_clear_colour(&self) -> wgpu::Color {
        self.clear_colour.into()
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            width: 720,
            height: 720,
            starting_scene: None,
            clear_colour: Color::BLACK,
        }
    }
}
