use super::*;

#[test]
fn default_scene_matches_authored_layout() {
    let scene = WidgetScene::build(&WidgetConfig::default());
    assert_eq!(scene.path_d, "M 5 45 C 25 5, 75 5, 95 45");

    let authored = [(5.0, 45.0), (50.0, 15.0), (95.0, 45.0)];
    for ((anchor, dot), (x, y)) in scene.anchor_dots.iter().zip(authored) {
        assert!(
            (dot.x - x).abs() < 1e-4 && (dot.y - y).abs() < 1e-4,
            "{anchor}: {dot:?}"
        );
    }
    assert_eq!(scene.labels.len(), 3);
    assert_eq!(scene.font_size, 2.0);
}

#[test]
fn hit_test_finds_each_label() {
    let scene = WidgetScene::build(&WidgetConfig::default());
    // Just right of each baseline origin, inside the glyph box.
    assert_eq!(scene.hit_test(Point::new(2.5, 47.5)), Some(Anchor::A));
    assert_eq!(scene.hit_test(Point::new(49.5, 11.5)), Some(Anchor::B));
    assert_eq!(scene.hit_test(Point::new(92.5, 47.5)), Some(Anchor::C));
}

#[test]
fn hit_test_misses_empty_space_and_the_arc() {
    let scene = WidgetScene::build(&WidgetConfig::default());
    assert_eq!(scene.hit_test(Point::new(50.0, 40.0)), None);
    assert_eq!(scene.hit_test(Point::new(50.0, 15.0)), None);
}

#[test]
fn anchor_dots_follow_a_custom_curve() {
    let cfg = WidgetConfig {
        curve: [
            Point::new(10.0, 40.0),
            Point::new(30.0, 40.0),
            Point::new(70.0, 40.0),
            Point::new(90.0, 40.0),
        ],
        ..WidgetConfig::default()
    };
    let scene = WidgetScene::build(&cfg);
    let (_, mid) = scene.anchor_dots[1];
    assert!((mid.x - 50.0).abs() < 1e-4);
    assert!((mid.y - 40.0).abs() < 1e-9);
}
