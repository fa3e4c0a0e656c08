use super::*;

fn circle_focal() -> Box<dyn FocalShape> {
    FocalKind::Circle.instantiate(DEFAULT_RIPPLE_ALPHA)
}

#[test]
fn circle_prepare_encloses_target_plus_padding() {
    let mut focal = circle_focal();
    focal.prepare_rect(Rect::new(10.0, 10.0, 50.0, 50.0), 20.0);
    assert_eq!(focal.center(), Point::new(30.0, 30.0));
    let expected = 20.0_f64.hypot(20.0) + 20.0;
    assert!((focal.base_extent() - expected).abs() < 1e-9);

    focal.update(1.0, 1.0);
    // Every target corner sits inside the prepared circle.
    for p in [
        Point::new(10.0, 10.0),
        Point::new(50.0, 10.0),
        Point::new(10.0, 50.0),
        Point::new(50.0, 50.0),
    ] {
        assert!(focal.contains(p), "{p:?}");
    }
}

#[test]
fn circle_reveal_scales_radius_linearly() {
    let mut focal = circle_focal();
    focal.prepare_point(Point::new(100.0, 100.0), 44.0);
    focal.update(0.5, 0.5);
    match focal.geometry(Rgba8::rgb(255, 255, 255)) {
        ShapeGeometry::Circle { radius, color, .. } => {
            assert!((radius - 22.0).abs() < 1e-9);
            assert_eq!(color.a, 128);
        }
        other => panic!("expected circle, got {other:?}"),
    }
    assert!(focal.contains(Point::new(110.0, 100.0)));
    assert!(!focal.contains(Point::new(130.0, 100.0)));
}

#[test]
fn ripple_ring_hidden_until_updated() {
    let mut focal = circle_focal();
    focal.prepare_point(Point::new(0.0, 0.0), 40.0);
    focal.update(1.0, 1.0);
    assert!(focal.ripple_geometry(Rgba8::rgb(255, 255, 255)).is_none());

    focal.update_ripple(1.3, 0.5);
    let ring = focal
        .ripple_geometry(Rgba8::rgb(255, 255, 255))
        .expect("ripple visible");
    match ring {
        ShapeGeometry::Circle { radius, .. } => assert!((radius - 52.0).abs() < 1e-9),
        other => panic!("expected circle, got {other:?}"),
    }

    focal.update_ripple(1.6, 0.0);
    assert!(focal.ripple_geometry(Rgba8::rgb(255, 255, 255)).is_none());
}

#[test]
fn rectangle_focal_hugs_target_bounds() {
    let mut focal =
        FocalKind::Rectangle { corner_radius: 8.0 }.instantiate(DEFAULT_RIPPLE_ALPHA);
    let target = Rect::new(100.0, 200.0, 300.0, 260.0);
    focal.prepare_rect(target, 10.0);
    assert_eq!(focal.bounds(), Rect::new(90.0, 190.0, 310.0, 270.0));

    focal.update(1.0, 1.0);
    assert!(focal.contains(target.center()));
    assert!(focal.contains(Point::new(100.0, 200.0)));
    assert!(!focal.contains(Point::new(85.0, 200.0)));

    focal.update(0.0, 0.0);
    assert!(!focal.contains(target.center()));
}
