use glam::{Vec2, Vec3};

use crate::easing::ease_out_sine;

/// Seconds the appearance scale-in takes.
pub const APPEARANCE_SECONDS: f64 = 0.4;
/// Scale the model pops in at before growing to fit.
pub const INITIAL_SCALE: f32 = 0.001;

/// Uniform scale that fits a model's bounding box onto the detected image.
///
/// The model stands on the image plane, so its x/z footprint is matched
/// against the image's physical width/height and the tighter ratio wins.
pub fn fit_scale(image_physical_size: Vec2, bounding_min: Vec3, bounding_max: Vec3) -> f32 {
    let size = bounding_max - bounding_min;
    let width_ratio = image_physical_size.x / size.x;
    let height_ratio = image_physical_size.y / size.z;
    width_ratio.min(height_ratio)
}

/// Ease-out scale-in from `INITIAL_SCALE` to the fitted scale.
#[derive(Debug, Clone, Copy)]
pub struct AppearanceAnimation {
    target_scale: f32,
    started_at: f64,
}

impl AppearanceAnimation {
    pub fn new(target_scale: f32, started_at: f64) -> AppearanceAnimation {
        AppearanceAnimation {
            target_scale,
            started_at,
        }
    }

    /// Uniform scale at `time`; saturates at the target once the pop-in ends.
    pub fn scale_at(&self, time: f64) -> f32 {
        let t_linear = ((time - self.started_at) / APPEARANCE_SECONDS).clamp(0.0, 1.0);
        if t_linear >= 1.0 {
            return self.target_scale;
        }
        let t = ease_out_sine(t_linear) as f32;
        INITIAL_SCALE + (self.target_scale - INITIAL_SCALE) * t
    }

    pub fn target_scale(&self) -> f32 {
        self.target_scale
    }
}
