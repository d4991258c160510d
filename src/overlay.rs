use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec2, Vec3};

use crate::types::Pose;

/// Seconds the plane stays fully visible after detection.
pub const HOLD_SECONDS: f64 = 1.5;
/// Seconds the fade-out takes once the hold ends.
pub const FADE_SECONDS: f64 = 1.0;
/// Opacity while held.
pub const BASE_OPACITY: f32 = 0.5;

/// Translucent plane highlighting the detected image.
///
/// Sized to the reference image's physical extent, laid flat against it, then
/// faded out and removed on a fixed schedule.
#[derive(Debug, Clone, Copy)]
pub struct OverlayPlane {
    pub width: f32,
    pub height: f32,
    /// Pose relative to the anchor node; the plane lies flat on the image.
    pub local_pose: Pose,
    detected_at: f64,
}

impl OverlayPlane {
    pub fn new(image_physical_size: Vec2, detected_at: f64) -> OverlayPlane {
        OverlayPlane {
            width: image_physical_size.x,
            height: image_physical_size.y,
            local_pose: Pose::new(Vec3::ZERO, Quat::from_rotation_x(-FRAC_PI_2)),
            detected_at,
        }
    }

    /// Opacity at `time`, or `None` once the plane has been removed from the
    /// scene. Holds at `BASE_OPACITY`, fades linearly to exactly 0.0 at
    /// hold + fade, and is removed strictly after that.
    pub fn opacity_at(&self, time: f64) -> Option<f32> {
        let elapsed = time - self.detected_at;
        if elapsed > HOLD_SECONDS + FADE_SECONDS {
            None
        } else if elapsed <= HOLD_SECONDS {
            Some(BASE_OPACITY)
        } else {
            let fade = ((elapsed - HOLD_SECONDS) / FADE_SECONDS) as f32;
            Some(BASE_OPACITY * (1.0 - fade))
        }
    }

    pub fn is_removed(&self, time: f64) -> bool {
        self.opacity_at(time).is_none()
    }
}
