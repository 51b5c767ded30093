//! Error types for shape construction, the scene arena and GPU buffers.
//!
//! None of these are transient: every variant signals a caller bug and
//! construction is aborted rather than producing partial geometry.

use thiserror::Error;

use crate::resources::buffer::BufferKind;

/// Errors raised while building faces and composite shapes.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("a {shape} needs exactly {expected} points, got {found}")]
    PointCount {
        shape: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("a face needs at least 3 points, got {found}")]
    TooFewPoints { found: usize },

    #[error("expected {expected} texture groups (one per side), got {found}")]
    TextureCount { expected: usize, found: usize },
}

/// Errors raised by the scene arena.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SceneError {
    #[error("renderable handle from arena generation {found} used on generation {current}")]
    StaleHandle { found: u64, current: u64 },

    #[error("no renderable at index {index} (arena holds {len})")]
    UnknownRenderable { index: usize, len: usize },

    #[error("renderable {index} changed its layout from {before:?} to {after:?} (points, indices)")]
    LayoutChanged {
        index: usize,
        before: (usize, usize),
        after: (usize, usize),
    },
}

/// Errors raised by the GPU buffer adapter.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BufferError {
    #[error("cannot upload {data} data into a {kind} buffer")]
    KindMismatch {
        kind: BufferKind,
        data: BufferKind,
    },

    #[error("buffer was created from arena generation {created}, arena is now at {current}")]
    StaleView { created: u64, current: u64 },
}
