use super::*;

fn small_scene() -> Scene {
    let mut scene = Scene::new(
        Canvas {
            width: 1080,
            height: 1080,
        },
        Rgba8::from_rgb(0x0a, 0x0a, 0x0a),
    );
    scene.push(SceneNode::Rect {
        bounds: Rect::new(10.0, 20.0, 110.0, 220.0),
        corner_radius: 8.0,
        fill: Rgba8::from_rgb(0xa8, 0x55, 0xf7),
        opacity: 0.9,
        border: None,
        shadow: Some(Shadow::glow(12.0, Rgba8::from_rgb(0xa8, 0x55, 0xf7).with_alpha(0x40))),
    });
    scene.push(SceneNode::Text {
        content: "hello".to_string(),
        anchor: Point::new(540.0, 80.0),
        align: TextAlign::Center,
        valign: TextVAlign::Top,
        font_size: 48.0,
        font_weight: 800,
        color: Rgba8::from_rgb(255, 255, 255),
        opacity: 1.0,
        max_width: Some(900.0),
        shadow: None,
    });
    scene
}

#[test]
fn scenes_roundtrip_through_json() {
    let scene = small_scene();
    let json = serde_json::to_string(&scene).unwrap();
    let back: Scene = serde_json::from_str(&json).unwrap();
    assert_eq!(back, scene);
}

#[test]
fn node_kinds_are_tagged_snake_case() {
    let scene = small_scene();
    let value = serde_json::to_value(&scene).unwrap();
    assert_eq!(value["nodes"][0]["kind"], "rect");
    assert_eq!(value["nodes"][1]["kind"], "text");
    assert_eq!(value["nodes"][1]["align"], "center");
    assert_eq!(value["background"], "#0a0a0a");
}

#[test]
fn push_keeps_paint_order() {
    let scene = small_scene();
    assert_eq!(scene.nodes.len(), 2);
    assert!(matches!(scene.nodes[0], SceneNode::Rect { .. }));
    assert!(matches!(scene.nodes[1], SceneNode::Text { .. }));
}

#[test]
fn scale_about_center_shrinks_symmetrically() {
    let r = Rect::new(100.0, 100.0, 300.0, 200.0);
    let center = Point::new(200.0, 150.0);
    let scaled = scale_about(r, center, 0.8);

    assert_eq!(scaled, Rect::new(120.0, 110.0, 280.0, 190.0));
    // Center is preserved.
    assert_eq!(scaled.center(), center);
}

#[test]
fn scale_about_unit_factor_is_identity() {
    let r = Rect::new(5.0, 7.0, 11.0, 13.0);
    assert_eq!(scale_about(r, Point::new(999.0, -4.0), 1.0), r);
}
