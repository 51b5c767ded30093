use std::mem;

use facet_ngin::{
    data_structures::point::{COLOR_SIZE, TEXTURE_COORDINATE_SIZE, VERTEX_SIZE},
    BUFFER_SIZE, Color, Point, TextureCoordinate, Vertex,
};

mod common;

fn every_constructor() -> Vec<Point> {
    let vertex = Vertex::new(1.0, -2.0, 3.5);
    let color = Color::rgba(0.1, 0.2, 0.3, 0.4);
    let tex = TextureCoordinate::new(0.25, 0.75);
    vec![
        Point::new(vertex),
        Point::with_color(vertex, color),
        Point::with_texture_coordinate(vertex, tex),
        Point::from_parts(vertex, color, tex),
    ]
}

#[test]
fn should_flatten_in_fixed_order_for_every_constructor() {
    for point in every_constructor() {
        let data = point.array();
        assert_eq!(data.len(), BUFFER_SIZE);
        assert_eq!(&data[..VERTEX_SIZE], &point.vertex.array());
        assert_eq!(&data[VERTEX_SIZE..VERTEX_SIZE + COLOR_SIZE], &point.color.array());
        assert_eq!(
            &data[VERTEX_SIZE + COLOR_SIZE..],
            &point.texture_coordinate.array()
        );
    }
}

#[test]
fn should_default_color_and_texture_coordinate() {
    let point = Point::new(Vertex::new(0.0, 0.0, 0.0));
    assert_eq!(point.color, Color::new(180, 164, 240));
    assert!((point.color.r - 180.0 / 255.0).abs() < 1e-6);
    assert_eq!(point.color.a, 1.0);
    assert_eq!(point.texture_coordinate, TextureCoordinate::new(0.0, 0.0));
}

#[test]
fn should_match_memory_layout_with_flattened_array() {
    assert_eq!(BUFFER_SIZE, VERTEX_SIZE + COLOR_SIZE + TEXTURE_COORDINATE_SIZE);
    assert_eq!(mem::size_of::<Point>(), BUFFER_SIZE * mem::size_of::<f32>());
    for point in every_constructor() {
        let raw: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&point));
        assert_eq!(raw, &point.array());
    }
}

#[test]
fn should_describe_attribute_stride_and_offsets() {
    let layout = Point::desc();
    assert_eq!(layout.array_stride, (BUFFER_SIZE * 4) as u64);
    assert_eq!(layout.step_mode, wgpu::VertexStepMode::Vertex);

    let offsets: Vec<_> = layout.attributes.iter().map(|a| a.offset).collect();
    assert_eq!(offsets, vec![0, 12, 28]);
    let locations: Vec<_> = layout.attributes.iter().map(|a| a.shader_location).collect();
    assert_eq!(locations, vec![0, 1, 2]);
    assert_eq!(layout.attributes[0].format, wgpu::VertexFormat::Float32x3);
    assert_eq!(layout.attributes[1].format, wgpu::VertexFormat::Float32x4);
    assert_eq!(layout.attributes[2].format, wgpu::VertexFormat::Float32x2);
    assert_eq!(
        Point::ATTRIBUTE_NAMES,
        ["position", "color", "textureCoordinate"]
    );
}

#[test]
fn should_copy_points_by_value() {
    let source = Point::new(Vertex::new(1.0, 1.0, 1.0));
    let mut copy = source;
    copy.vertex.x = 42.0;
    copy.texture_coordinate = TextureCoordinate::new(1.0, 1.0);
    assert_eq!(source.vertex.x, 1.0);
    assert_eq!(source.texture_coordinate, TextureCoordinate::new(0.0, 0.0));
}
