use glam::{Quat, Vec3};
use nalgebra as na;

/// A world-space position and orientation pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub orientation: Quat,
}

impl Pose {
    pub const IDENTITY: Pose = Pose {
        position: Vec3::ZERO,
        orientation: Quat::IDENTITY,
    };

    pub fn new(position: Vec3, orientation: Quat) -> Pose {
        Pose {
            position,
            orientation,
        }
    }

    pub fn from_position(position: Vec3) -> Pose {
        Pose {
            position,
            orientation: Quat::IDENTITY,
        }
    }

    pub fn distance_to(&self, other: &Pose) -> f32 {
        self.position.distance(other.position)
    }

    /// Epsilon-tolerant pose comparison.
    ///
    /// Orientations are compared through the absolute quaternion dot product,
    /// so q and -q count as the same rotation.
    pub fn approx_eq(&self, other: &Pose, pos_eps: f32, rot_eps: f32) -> bool {
        self.position.distance_squared(other.position) <= pos_eps * pos_eps
            && 1.0 - self.orientation.dot(other.orientation).abs() <= rot_eps
    }

    pub fn to_na_isometry3(&self) -> na::Isometry3<f32> {
        let translation =
            na::Translation3::new(self.position.x, self.position.y, self.position.z);
        let rotation = na::Unit::new_normalize(na::Quaternion::new(
            self.orientation.w,
            self.orientation.x,
            self.orientation.y,
            self.orientation.z,
        ));
        na::Isometry3::from_parts(translation, rotation)
    }

    pub fn from_na_isometry3(iso: &na::Isometry3<f32>) -> Pose {
        let t = iso.translation.vector;
        let q = iso.rotation.quaternion();
        Pose {
            position: Vec3::new(t.x, t.y, t.z),
            orientation: Quat::from_xyzw(q.i, q.j, q.k, q.w),
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Pose::IDENTITY
    }
}
