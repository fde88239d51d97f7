use glam::Vec2;
use lake_core::*;

#[test]
fn wide_viewport_scales_by_width() {
    let fit = cover_fit(Vec2::new(2000.0, 500.0), Vec2::new(1000.0, 1000.0)).unwrap();
    assert_eq!(fit.scale, 2.0);
    assert_eq!(fit.size, Vec2::new(2000.0, 2000.0));
    assert_eq!(fit.origin, Vec2::new(0.0, -750.0));
}

#[test]
fn tall_viewport_scales_by_height() {
    let fit = cover_fit(Vec2::new(400.0, 900.0), Vec2::new(300.0, 300.0)).unwrap();
    assert_eq!(fit.scale, 3.0);
    assert_eq!(fit.origin, Vec2::new(-250.0, 0.0));
}

#[test]
fn cover_always_fills_the_viewport() {
    let image = Vec2::new(320.0, 180.0);
    for &(w, h) in &[(1920.0, 1080.0), (375.0, 812.0), (1.0, 1.0), (3000.0, 200.0)] {
        let vp = Vec2::new(w, h);
        let fit = cover_fit(vp, image).unwrap();
        assert!(fit.size.x >= vp.x - 1e-3 && fit.size.y >= vp.y - 1e-3);
        // centered: equal overflow on both sides
        let far = fit.origin + fit.size;
        assert!((fit.origin.x + (far.x - vp.x)).abs() < 1e-2);
        assert!((fit.origin.y + (far.y - vp.y)).abs() < 1e-2);
    }
}

#[test]
fn shrinks_large_images() {
    let fit = cover_fit(Vec2::new(100.0, 100.0), Vec2::new(400.0, 200.0)).unwrap();
    assert_eq!(fit.scale, 0.5);
    assert_eq!(fit.origin, Vec2::new(-50.0, 0.0));
}

#[test]
fn empty_image_has_no_fit() {
    assert!(cover_fit(Vec2::new(100.0, 100.0), Vec2::new(0.0, 10.0)).is_none());
    let bg = Background::new(Vec2::ZERO, Vec2::new(100.0, 100.0));
    assert!(bg.fit().is_none());
}
