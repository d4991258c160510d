use anchor_follow::types::Pose;
use glam::{Quat, Vec3};
use std::f32::consts::FRAC_PI_3;

#[test]
fn test_na_isometry_roundtrip() {
    let pose = Pose::new(
        Vec3::new(1.0, 2.0, 3.0),
        Quat::from_rotation_y(FRAC_PI_3),
    );

    let iso = pose.to_na_isometry3();
    let back = Pose::from_na_isometry3(&iso);

    assert!(pose.position.distance(back.position) < 1e-6);
    assert!(pose.orientation.dot(back.orientation).abs() > 1.0 - 1e-6);
}

#[test]
fn test_approx_eq_tolerances() {
    let a = Pose::from_position(Vec3::new(0.5, 0.0, 0.0));
    let b = Pose::from_position(Vec3::new(0.5 + 5e-5, 0.0, 0.0));
    assert!(a.approx_eq(&b, 1e-4, 1e-4));
    assert!(!a.approx_eq(&b, 1e-6, 1e-4));

    let rotated = Pose::new(a.position, Quat::from_rotation_z(0.1));
    assert!(!a.approx_eq(&rotated, 1e-4, 1e-4));
}

#[test]
fn test_approx_eq_double_cover() {
    // q and -q are the same rotation
    let q = Quat::from_rotation_y(FRAC_PI_3);
    let a = Pose::new(Vec3::ZERO, q);
    let b = Pose::new(Vec3::ZERO, -q);
    assert!(a.approx_eq(&b, 1e-6, 1e-6));
}

#[test]
fn test_distance() {
    let a = Pose::from_position(Vec3::ZERO);
    let b = Pose::from_position(Vec3::new(3.0, 4.0, 0.0));
    assert!((a.distance_to(&b) - 5.0).abs() < 1e-6);
}
