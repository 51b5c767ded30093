//! facet-ngin
//!
//! A small rendering core that turns declarative shapes (rectangles,
//! triangles, pyramids, extruded solids) into one packed geometry arena that
//! can be uploaded to the GPU without copying, and keeps that arena in sync
//! as shapes are translated and rotated.
//!
//! High-level modules
//! - `data_structures`: points, transform matrices, faces and shape builders
//! - `scene`: the arena that concatenates every renderable's geometry
//! - `resources`: GPU buffers that mirror arena regions
//! - `context`: device/queue ownership for buffer creation
//! - `options`: start-up options consumed at the application boundary
//! - `error`: the fatal error taxonomy of construction and upload
//!

pub mod context;
pub mod data_structures;
pub mod error;
pub mod options;
pub mod resources;
pub mod scene;

// Re-exports commonly used types for convenience in downstream code.
pub use data_structures::{
    face::{Face, TexturedFace},
    group::{FaceGroup, Renderable},
    point::{BUFFER_SIZE, Color, Point, TextureCoordinate, Vertex},
    shapes::{Rectangle, Triangle},
    solid::{Pyramid, Solid},
    texture::{Texture, TextureGroup},
    transform::{Axis, RotationDirection, TransformMatrix},
};
pub use scene::{RenderableId, Scene};

/// Install `env_logger` as the global logger.
///
/// Safe to call more than once; a logger that is already installed is kept.
pub fn init_logger() {
    if let Err(e) = env_logger::try_init() {
        log::debug!("Could not initialize logger: {}", e);
    }
}
