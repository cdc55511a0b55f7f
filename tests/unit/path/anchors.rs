use super::*;

#[test]
fn fractions_are_strictly_increasing() {
    assert!(
        Anchor::ALL
            .windows(2)
            .all(|w| w[0].fraction() < w[1].fraction())
    );
    assert_eq!(Anchor::A.fraction(), 0.0);
    assert_eq!(Anchor::C.fraction(), 1.0);
}

#[test]
fn labels_roundtrip_through_parser() {
    for a in Anchor::ALL {
        assert_eq!(Anchor::from_label(a.label()), Some(a));
        assert_eq!(
            Anchor::from_label(&a.label().to_lowercase()),
            Some(a)
        );
    }
    assert_eq!(Anchor::from_label("D"), None);
}

#[test]
fn default_curve_places_labels_where_they_were_authored() {
    let curve = ArcCurve::default();
    let expect = [
        (Anchor::A, Point::new(2.0, 48.0)),
        (Anchor::B, Point::new(49.0, 12.0)),
        (Anchor::C, Point::new(92.0, 48.0)),
    ];
    for (a, p) in expect {
        let got = a.label_origin(&curve);
        assert!(
            (got.x - p.x).abs() < 1e-4 && (got.y - p.y).abs() < 1e-4,
            "{a}: {got:?}"
        );
    }
}

#[test]
fn serde_uses_bare_letters() {
    let json = serde_json::to_string(&Anchor::B).unwrap();
    assert_eq!(json, "\"B\"");
    let back: Anchor = serde_json::from_str("\"C\"").unwrap();
    assert_eq!(back, Anchor::C);
}
