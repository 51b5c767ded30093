use anyhow::Context as _;

use crate::{
    resources::buffer::{BufferKind, GpuBuffer},
    scene::Scene,
};

/// Device and queue used to create and refresh scene buffers.
///
/// Window and surface management live outside this crate; the context only
/// needs a device that can hold buffers.
#[derive(Debug)]
pub struct GpuContext {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
}

impl GpuContext {
    /// Wrap a device and queue acquired elsewhere, e.g. alongside a surface.
    pub fn new(device: wgpu::Device, queue: wgpu::Queue) -> Self {
        Self { device, queue }
    }

    /// Acquire a device without any window or surface.
    pub async fn headless() -> anyhow::Result<Self> {
        let instance = wgpu::Instance::default();

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .context("no GPU adapter available")?;
        log::debug!("using adapter {:?}", adapter.get_info());

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("facet-ngin device"),
                // Keep to limits every backend, WebGL included, can satisfy.
                required_limits: wgpu::Limits::downlevel_webgl2_defaults(),
                ..Default::default()
            })
            .await
            .context("GPU device request failed")?;

        Ok(Self { device, queue })
    }

    /// Create the vertex and index buffers for the current arena of `scene`.
    pub fn upload(&self, scene: &Scene) -> (GpuBuffer, GpuBuffer) {
        (
            GpuBuffer::create(&self.device, scene.memory_region(BufferKind::Vertex)),
            GpuBuffer::create(&self.device, scene.memory_region(BufferKind::Index)),
        )
    }
}
