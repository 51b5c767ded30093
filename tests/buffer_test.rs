use facet_ngin::{
    error::BufferError,
    resources::buffer::{BufferData, BufferKind},
};

mod common;

#[test]
fn should_reject_mismatched_data_kind() {
    let floats = [0.0_f32; 9];
    let indices = [0_u32, 1, 2];

    assert_eq!(BufferKind::Vertex.check(&BufferData::Vertices(&floats)), Ok(()));
    assert_eq!(BufferKind::Index.check(&BufferData::Indices(&indices)), Ok(()));
    assert_eq!(
        BufferKind::Vertex.check(&BufferData::Indices(&indices)),
        Err(BufferError::KindMismatch {
            kind: BufferKind::Vertex,
            data: BufferKind::Index
        })
    );
    assert!(BufferKind::Index.check(&BufferData::Vertices(&floats)).is_err());
}

#[test]
fn should_count_bytes_once() {
    let floats = [1.0_f32; 36];
    let data = BufferData::Vertices(&floats);
    assert_eq!(data.len(), 36);
    assert_eq!(data.byte_len(), 144);
    assert_eq!(data.bytes().len(), data.byte_len());

    let indices = [0_u32; 6];
    assert_eq!(BufferData::Indices(&indices).byte_len(), 24);
}

#[test]
fn should_request_copy_destination_usage() {
    assert!(BufferKind::Vertex.usage().contains(wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST));
    assert!(BufferKind::Index.usage().contains(wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST));
    assert_eq!(BufferKind::Vertex.to_string(), "vertex");
}

#[cfg(feature = "integration-tests")]
mod gpu {
    use facet_ngin::{
        context::GpuContext,
        error::BufferError,
        resources::buffer::{BufferData, BufferKind},
        Color, Rectangle, Renderable, Scene, Vertex,
    };
    use futures::executor::block_on;

    use crate::common::test_utils::init;

    fn scene() -> Scene {
        let renderables: Vec<Box<dyn Renderable>> = vec![
            Box::new(Rectangle::new(Vertex::new(0.0, 0.0, 0.0), 1.0, 1.0, Color::WHITE)),
            Box::new(Rectangle::new(Vertex::new(2.0, 0.0, 0.0), 1.0, 1.0, Color::BLACK)),
        ];
        Scene::new(renderables)
    }

    #[test]
    fn should_upload_scene_regions() {
        init();
        let ctx = block_on(GpuContext::headless()).unwrap();
        let scene = scene();

        let (vertices, indices) = ctx.upload(&scene);
        assert_eq!(vertices.kind(), BufferKind::Vertex);
        assert_eq!(vertices.len(), 72);
        assert_eq!(vertices.buffer().size(), 72 * 4);
        assert_eq!(indices.len(), 12);
        assert!(vertices.slice().is_some());
    }

    #[test]
    fn should_reupload_after_in_place_changes() {
        init();
        let ctx = block_on(GpuContext::headless()).unwrap();
        let mut scene = scene();
        let (mut vertices, _) = ctx.upload(&scene);

        let id = scene.ids().next().unwrap();
        scene.translate(id, 0.0, 1.0, 0.0).unwrap();
        assert_eq!(vertices.reupload(&ctx.device, &ctx.queue, &scene), Ok(()));
    }

    #[test]
    fn should_reject_reupload_after_rebuild() {
        init();
        let ctx = block_on(GpuContext::headless()).unwrap();
        let mut scene = scene();
        let (mut vertices, mut indices) = ctx.upload(&scene);

        scene.add(Box::new(Rectangle::new(Vertex::new(4.0, 0.0, 0.0), 1.0, 1.0, Color::WHITE)));
        assert_eq!(
            vertices.reupload(&ctx.device, &ctx.queue, &scene),
            Err(BufferError::StaleView { created: 0, current: 1 })
        );

        let floats = scene.vertices().to_vec();
        assert!(indices
            .reupload_with(&ctx.device, &ctx.queue, BufferData::Vertices(&floats))
            .is_err());
        vertices
            .reupload_with(&ctx.device, &ctx.queue, BufferData::Vertices(&floats))
            .unwrap();
        assert_eq!(vertices.len(), 108);
        assert!(vertices.buffer().size() >= 108 * 4);
        assert_eq!(scene.get(scene.ids().next().unwrap()).unwrap().faces().len(), 1);
    }
}
