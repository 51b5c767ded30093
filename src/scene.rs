//! The scene arena: every renderable's geometry in one vertex region and one index region.
//!
//! Renderables keep the order they were registered in. Each one owns a
//! disjoint, fixed slice of both regions, and its indices are rebased to its
//! first point in the shared vertex region so the regions can be drawn with a
//! single indexed draw call.
//!
//! The arena is pull based. [`Scene::rotate`], [`Scene::translate`] and
//! [`Scene::modify`] rewrite the affected slice immediately, but nothing is
//! uploaded until the caller asks a [`GpuBuffer`](crate::resources::buffer::GpuBuffer)
//! to re-upload. Adding or removing a renderable rebuilds both regions and
//! starts a new generation; handles and buffers from an older generation are
//! rejected.

use std::ops::Range;

use crate::{
    data_structures::{
        group::Renderable,
        point::{BUFFER_SIZE, Vertex},
        transform::{Axis, RotationDirection},
    },
    error::SceneError,
    resources::buffer::{BufferData, BufferKind},
};

/// Handle to a renderable inside one generation of a [`Scene`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RenderableId {
    index: usize,
    generation: u64,
}

impl RenderableId {
    /// Position in registration order.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Where one renderable lives inside the arena, in points and indices.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Slot {
    points: Range<usize>,
    indices: Range<usize>,
}

/// Borrowed view of one arena region, valid for a single upload.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MemoryView<'a> {
    data: BufferData<'a>,
    generation: u64,
}

impl<'a> MemoryView<'a> {
    pub fn kind(&self) -> BufferKind {
        self.data.kind()
    }

    pub fn data(&self) -> BufferData<'a> {
        self.data
    }

    /// Arena generation the view was taken from.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of elements (floats or indices), not bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn byte_len(&self) -> usize {
        self.data.byte_len()
    }

    pub fn bytes(&self) -> &'a [u8] {
        self.data.bytes()
    }
}

/// Owner of all renderables and of the contiguous memory built from them.
#[derive(Debug, Default)]
pub struct Scene {
    renderables: Vec<Box<dyn Renderable>>,
    slots: Vec<Slot>,
    vertices: Vec<f32>,
    indices: Vec<u32>,
    generation: u64,
}

impl Scene {
    pub fn new(renderables: Vec<Box<dyn Renderable>>) -> Self {
        let mut scene = Self {
            renderables,
            ..Default::default()
        };
        scene.build();
        scene
    }

    /// Lay out every renderable back to back and fill both regions.
    fn build(&mut self) {
        let mut point_offset = 0;
        let mut index_offset = 0;
        self.slots = self
            .renderables
            .iter()
            .map(|r| {
                let faces = r.faces();
                let slot = Slot {
                    points: point_offset..point_offset + faces.point_count(),
                    indices: index_offset..index_offset + faces.index_count(),
                };
                point_offset = slot.points.end;
                index_offset = slot.indices.end;
                slot
            })
            .collect();

        self.vertices = vec![0.0; point_offset * BUFFER_SIZE];
        self.indices = vec![0; index_offset];
        for index in 0..self.renderables.len() {
            self.write_slot(index);
        }
        log::debug!(
            "built scene arena generation {}: {} renderables, {} points, {} indices",
            self.generation,
            self.renderables.len(),
            point_offset,
            index_offset
        );
    }

    fn rebuild(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.build();
    }

    /// Rewrite one renderable's slice of both regions from its current faces.
    fn write_slot(&mut self, index: usize) {
        let slot = self.slots[index].clone();
        let faces = self.renderables[index].faces();
        faces.write_array(
            &mut self.vertices[slot.points.start * BUFFER_SIZE..slot.points.end * BUFFER_SIZE],
        );
        faces.write_indices(slot.points.start as u32, &mut self.indices[slot.indices.clone()]);
        log::trace!("rewrote arena slot {} ({:?})", index, slot);
    }

    fn check(&self, id: RenderableId) -> Result<usize, SceneError> {
        if id.generation != self.generation {
            return Err(SceneError::StaleHandle {
                found: id.generation,
                current: self.generation,
            });
        }
        if id.index >= self.renderables.len() {
            return Err(SceneError::UnknownRenderable {
                index: id.index,
                len: self.renderables.len(),
            });
        }
        Ok(id.index)
    }

    /// Register a renderable at the end. Invalidates every earlier handle and view.
    pub fn add(&mut self, renderable: Box<dyn Renderable>) -> RenderableId {
        self.renderables.push(renderable);
        self.rebuild();
        RenderableId {
            index: self.renderables.len() - 1,
            generation: self.generation,
        }
    }

    /// Take a renderable out. Invalidates every earlier handle and view.
    pub fn remove(&mut self, id: RenderableId) -> Result<Box<dyn Renderable>, SceneError> {
        let index = self.check(id)?;
        let removed = self.renderables.remove(index);
        self.rebuild();
        Ok(removed)
    }

    /// Handles for the current generation, in registration order.
    pub fn ids(&self) -> impl Iterator<Item = RenderableId> + '_ {
        (0..self.renderables.len()).map(|index| RenderableId {
            index,
            generation: self.generation,
        })
    }

    pub fn get(&self, id: RenderableId) -> Result<&dyn Renderable, SceneError> {
        let index = self.check(id)?;
        Ok(self.renderables[index].as_ref())
    }

    pub fn rotate(
        &mut self,
        id: RenderableId,
        degrees: f32,
        axis: Axis,
        direction: RotationDirection,
        pivot: Option<Vertex>,
    ) -> Result<(), SceneError> {
        self.modify(id, |r| r.rotate(degrees, axis, direction, pivot))
    }

    pub fn translate(&mut self, id: RenderableId, dx: f32, dy: f32, dz: f32) -> Result<(), SceneError> {
        self.modify(id, |r| r.translate(dx, dy, dz))
    }

    /// Mutate one renderable and rewrite its slice.
    ///
    /// The renderable must keep its point and index counts. Built-in shapes
    /// always do, but a custom [`Renderable`] may not. When the counts change
    /// the arena is rebuilt so it stays consistent and `LayoutChanged` is returned.
    pub fn modify<F>(&mut self, id: RenderableId, f: F) -> Result<(), SceneError>
    where
        F: FnOnce(&mut dyn Renderable),
    {
        let index = self.check(id)?;
        let layout = |r: &dyn Renderable| (r.faces().point_count(), r.faces().index_count());

        let before = layout(self.renderables[index].as_ref());
        f(self.renderables[index].as_mut());
        let after = layout(self.renderables[index].as_ref());

        if before != after {
            log::warn!(
                "renderable {} changed layout {:?} -> {:?}, rebuilding arena",
                index,
                before,
                after
            );
            self.rebuild();
            return Err(SceneError::LayoutChanged {
                index,
                before,
                after,
            });
        }
        self.write_slot(index);
        Ok(())
    }

    /// Float range of a renderable inside the vertex region.
    pub fn vertex_range(&self, id: RenderableId) -> Result<Range<usize>, SceneError> {
        let slot = &self.slots[self.check(id)?];
        Ok(slot.points.start * BUFFER_SIZE..slot.points.end * BUFFER_SIZE)
    }

    /// Range of a renderable inside the index region.
    pub fn index_range(&self, id: RenderableId) -> Result<Range<usize>, SceneError> {
        Ok(self.slots[self.check(id)?].indices.clone())
    }

    /// Zero-copy view of one region for the buffer adapter.
    pub fn memory_region(&self, kind: BufferKind) -> MemoryView<'_> {
        let data = match kind {
            BufferKind::Vertex => BufferData::Vertices(&self.vertices),
            BufferKind::Index => BufferData::Indices(&self.indices),
        };
        MemoryView {
            data,
            generation: self.generation,
        }
    }

    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn point_count(&self) -> usize {
        self.vertices.len() / BUFFER_SIZE
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.renderables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderables.is_empty()
    }
}
