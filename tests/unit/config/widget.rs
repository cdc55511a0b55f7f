use super::*;

#[test]
fn defaults_describe_the_authored_widget() {
    let cfg = WidgetConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.duration_ms, 4000.0);
    assert_eq!(cfg.animator_opts().marker_half_px, 7.5);
    assert_eq!(cfg.ease, Ease::InOutCubic);
    assert_eq!(cfg.curve().svg_path_d(), "M 5 45 C 25 5, 75 5, 95 45");
}

#[test]
fn empty_json_yields_defaults() {
    let cfg = WidgetConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, WidgetConfig::default());
}

#[test]
fn partial_json_overrides_only_named_fields() {
    let cfg = WidgetConfig::from_json_str(
        r#"{ "duration_ms": 1500, "ease": "Linear", "palette": { "marker_fill": "green" } }"#,
    )
    .unwrap();
    assert_eq!(cfg.duration_ms, 1500.0);
    assert_eq!(cfg.ease, Ease::Linear);
    assert_eq!(cfg.palette.marker_fill, "green");
    assert_eq!(cfg.palette.curve_stroke, "blue");
}

#[test]
fn unknown_fields_are_rejected() {
    let err = WidgetConfig::from_json_str(r#"{ "speed": 3 }"#).unwrap_err();
    assert!(matches!(err, ArcglideError::Serde(_)));
}

#[test]
fn invalid_values_fail_validation() {
    let cases = [
        r#"{ "duration_ms": 0 }"#,
        r#"{ "duration_ms": -5 }"#,
        r#"{ "marker_size_px": -1 }"#,
        r#"{ "label_font_size": 0 }"#,
        r#"{ "curve": [{"x":5,"y":45},{"x":25,"y":5},{"x":75,"y":5},{"x":120,"y":45}] }"#,
        r#"{ "curve": [{"x":1,"y":1},{"x":1,"y":1},{"x":1,"y":1},{"x":1,"y":1}] }"#,
    ];
    for json in cases {
        let err = WidgetConfig::from_json_str(json).unwrap_err();
        assert!(
            matches!(err, ArcglideError::Validation(_)),
            "{json} -> {err}"
        );
    }
}

#[test]
fn viewbox_edges_are_accepted() {
    let cfg = WidgetConfig::from_json_str(
        r#"{ "curve": [{"x":0,"y":50},{"x":0,"y":0},{"x":100,"y":0},{"x":100,"y":50}] }"#,
    )
    .unwrap();
    assert!(cfg.curve().total_length() > 100.0);
}

#[test]
fn missing_file_is_reported_with_path() {
    let err = WidgetConfig::from_json_path(Path::new("definitely/not/here.json")).unwrap_err();
    assert!(err.to_string().contains("definitely/not/here.json"));
}
