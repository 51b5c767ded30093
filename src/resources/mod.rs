/**
 * This module contains the GPU side of the scene: buffers that mirror the arena.
 */
pub mod buffer;
