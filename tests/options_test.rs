use facet_ngin::{options::Options, Color, Rectangle, Renderable, Scene, Vertex};

mod common;

#[test]
fn should_default_to_square_black_window() {
    let options = Options::default();
    assert_eq!((options.width, options.height), (720, 720));
    assert!(options.starting_scene.is_none());
    assert_eq!(options.clear_colour, Color::BLACK);
    assert_eq!(options.wgpu_clear_colour(), wgpu::Color::BLACK);
}

#[test]
fn should_chain_overrides() {
    let rectangle: Box<dyn Renderable> =
        Box::new(Rectangle::new(Vertex::new(0.0, 0.0, 0.0), 1.0, 1.0, Color::WHITE));
    let scene = Scene::new(vec![rectangle]);
    let options = Options::default()
        .with_size(1280, 720)
        .with_clear_colour(Color::WHITE)
        .with_starting_scene(scene);

    assert_eq!(options.width, 1280);
    assert_eq!(options.wgpu_clear_colour(), wgpu::Color::WHITE);
    assert_eq!(options.starting_scene.map(|s| s.len()), Some(1));
}
