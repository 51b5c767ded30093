use std::{fmt, mem};

use wgpu::util::DeviceExt;

use crate::{
    error::BufferError,
    scene::{MemoryView, Scene},
};

/// Format of every index region, matching the `u32` indices the arena writes.
pub const INDEX_FORMAT: wgpu::IndexFormat = wgpu::IndexFormat::Uint32;

/// What a GPU buffer holds: flattened points or `u32` indices.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BufferKind {
    Vertex,
    Index,
}

impl BufferKind {
    pub fn usage(self) -> wgpu::BufferUsages {
        match self {
            BufferKind::Vertex => wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            BufferKind::Index => wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
        }
    }

    /// Size in bytes of one element of this kind.
    pub fn element_size(self) -> usize {
        match self {
            BufferKind::Vertex => mem::size_of::<f32>(),
            BufferKind::Index => mem::size_of::<u32>(),
        }
    }

    /// Vertex buffers only take floats, index buffers only take `u32`s.
    pub fn check(self, data: &BufferData<'_>) -> Result<(), BufferError> {
        if data.kind() != self {
            return Err(BufferError::KindMismatch {
                kind: self,
                data: data.kind(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for BufferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferKind::Vertex => f.write_str("vertex"),
            BufferKind::Index => f.write_str("index"),
        }
    }
}

/// Typed data handed to a buffer for upload.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum BufferData<'a> {
    Vertices(&'a [f32]),
    Indices(&'a [u32]),
}

impl<'a> BufferData<'a> {
    pub fn kind(&self) -> BufferKind {
        match self {
            BufferData::Vertices(_) => BufferKind::Vertex,
            BufferData::Indices(_) => BufferKind::Index,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            BufferData::Vertices(data) => data.len(),
            BufferData::Indices(data) => data.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `len * element_size`, the only place byte sizes are derived.
    pub fn byte_len(&self) -> usize {
        self.len() * self.kind().element_size()
    }

    pub fn bytes(&self) -> &'a [u8] {
        match *self {
            BufferData::Vertices(data) => bytemuck::cast_slice(data),
            BufferData::Indices(data) => bytemuck::cast_slice(data),
        }
    }
}

/// A wgpu buffer mirroring one region of a [`Scene`].
///
/// The buffer only borrows scene memory while an upload runs. The GPU
/// allocation is destroyed when the `GpuBuffer` is dropped, on every path.
#[derive(Debug)]
pub struct GpuBuffer {
    kind: BufferKind,
    buffer: wgpu::Buffer,
    generation: u64,
    len: usize,
}

impl GpuBuffer {
    /// Upload `view` once into a new buffer of the view's kind.
    pub fn create(device: &wgpu::Device, view: MemoryView<'_>) -> Self {
        let kind = view.kind();
        let buffer = Self::allocate(device, view.data());
        log::debug!(
            "created {} buffer of {} bytes for arena generation {}",
            kind,
            view.byte_len(),
            view.generation()
        );
        Self {
            kind,
            buffer,
            generation: view.generation(),
            len: view.len(),
        }
    }

    fn allocate(device: &wgpu::Device, data: BufferData<'_>) -> wgpu::Buffer {
        let kind = data.kind();
        device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("Scene {} Buffer", kind)),
            contents: data.bytes(),
            usage: kind.usage(),
        })
    }

    /// Upload the current bytes of the same scene region again.
    ///
    /// Fails with `StaleView` once the scene has been rebuilt; a rebuilt arena
    /// needs a freshly created buffer.
    pub fn reupload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        scene: &Scene,
    ) -> Result<(), BufferError> {
        if scene.generation() != self.generation {
            return Err(BufferError::StaleView {
                created: self.generation,
                current: scene.generation(),
            });
        }
        self.write(device, queue, scene.memory_region(self.kind).data());
        Ok(())
    }

    /// Upload caller supplied data, which must match the buffer's kind.
    pub fn reupload_with(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        data: BufferData<'_>,
    ) -> Result<(), BufferError> {
        self.kind.check(&data)?;
        self.write(device, queue, data);
        Ok(())
    }

    fn write(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, data: BufferData<'_>) {
        let byte_len = data.byte_len() as wgpu::BufferAddress;
        if byte_len > self.buffer.size() {
            log::debug!(
                "growing {} buffer from {} to {} bytes",
                self.kind,
                self.buffer.size(),
                byte_len
            );
            let old = mem::replace(&mut self.buffer, Self::allocate(device, data));
            old.destroy();
        } else if byte_len == 0 {
            log::warn!("skipping upload of an empty {} buffer", self.kind);
        } else {
            queue.write_buffer(&self.buffer, 0, data.bytes());
        }
        self.len = data.len();
    }

    pub fn kind(&self) -> BufferKind {
        self.kind
    }

    /// Elements written by the last upload.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    /// The bytes written by the last upload, ready to bind in a render pass.
    /// `None` when there is nothing to draw, as wgpu rejects empty slices.
    pub fn slice(&self) -> Option<wgpu::BufferSlice<'_>> {
        if self.is_empty() {
            return None;
        }
        let end = (self.len * self.kind.element_size()) as wgpu::BufferAddress;
        Some(self.buffer.slice(..end))
    }
}

impl Drop for GpuBuffer {
    fn drop(&mut self) {
        log::trace!("releasing {} buffer", self.kind);
        self.buffer.destroy();
    }
}
