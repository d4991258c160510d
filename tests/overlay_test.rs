use anchor_follow::overlay::{BASE_OPACITY, FADE_SECONDS, HOLD_SECONDS, OverlayPlane};
use glam::{Quat, Vec2};
use std::f32::consts::FRAC_PI_2;

#[test]
fn test_plane_sized_to_image() {
    let plane = OverlayPlane::new(Vec2::new(0.21, 0.297), 0.0);
    assert!((plane.width - 0.21).abs() < 1e-6);
    assert!((plane.height - 0.297).abs() < 1e-6);

    // lies flat against the image
    let flat = Quat::from_rotation_x(-FRAC_PI_2);
    assert!(plane.local_pose.orientation.dot(flat).abs() > 1.0 - 1e-6);
}

#[test]
fn test_opacity_held_then_fades() {
    let plane = OverlayPlane::new(Vec2::new(0.2, 0.3), 0.0);

    assert_eq!(plane.opacity_at(0.0), Some(BASE_OPACITY));
    assert_eq!(plane.opacity_at(HOLD_SECONDS), Some(BASE_OPACITY));

    // halfway through the fade
    let mid = plane.opacity_at(HOLD_SECONDS + FADE_SECONDS / 2.0).unwrap();
    assert!((mid - BASE_OPACITY / 2.0).abs() < 1e-6);

    // exactly zero at the end, removed strictly after
    assert_eq!(plane.opacity_at(HOLD_SECONDS + FADE_SECONDS), Some(0.0));
    assert_eq!(plane.opacity_at(HOLD_SECONDS + FADE_SECONDS + 0.001), None);
}

#[test]
fn test_removal_respects_detection_time() {
    let plane = OverlayPlane::new(Vec2::new(0.2, 0.3), 10.0);
    assert!(!plane.is_removed(10.0 + HOLD_SECONDS + FADE_SECONDS));
    assert!(plane.is_removed(10.0 + HOLD_SECONDS + FADE_SECONDS + 0.1));
}
