use anchor_follow::model::{APPEARANCE_SECONDS, AppearanceAnimation, INITIAL_SCALE, fit_scale};
use glam::{Vec2, Vec3};

#[test]
fn test_fit_scale_takes_tighter_ratio() {
    // width ratio 0.5, height ratio 1.0
    let scale = fit_scale(
        Vec2::new(0.2, 0.3),
        Vec3::ZERO,
        Vec3::new(0.4, 0.1, 0.3),
    );
    assert!((scale - 0.5).abs() < 1e-6);

    // height-limited case
    let scale = fit_scale(
        Vec2::new(0.2, 0.1),
        Vec3::ZERO,
        Vec3::new(0.1, 0.2, 0.2),
    );
    assert!((scale - 0.5).abs() < 1e-6);
}

#[test]
fn test_fit_scale_offset_bounding_box() {
    // footprint comes from the box extent, not its absolute corners
    let scale = fit_scale(
        Vec2::new(0.2, 0.3),
        Vec3::new(-0.05, 0.0, -0.075),
        Vec3::new(0.05, 0.05, 0.075),
    );
    assert!((scale - 2.0).abs() < 1e-6);
}

#[test]
fn test_appearance_scale_in() {
    let anim = AppearanceAnimation::new(2.0, 0.0);

    assert!((anim.scale_at(0.0) - INITIAL_SCALE).abs() < 1e-6);

    // monotone growth
    let mut last = 0.0f32;
    for i in 0..=40 {
        let s = anim.scale_at(APPEARANCE_SECONDS * i as f64 / 40.0);
        assert!(s >= last);
        last = s;
    }

    // exact saturation
    assert_eq!(anim.scale_at(APPEARANCE_SECONDS), 2.0);
    assert_eq!(anim.scale_at(10.0), 2.0);
    assert_eq!(anim.target_scale(), 2.0);
}
