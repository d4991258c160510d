use glam::{Vec2, Vec3};
use log::info;

use crate::config::SmootherConfig;
use crate::model::{self, AppearanceAnimation};
use crate::overlay::OverlayPlane;
use crate::smoother::PoseSmoother;
use crate::types::Pose;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// `advance` was called with a timestamp earlier than one already seen.
    TimeWentBackwards,
    /// A second reference image was reported; the session tracks one image.
    AlreadyTracking,
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::TimeWentBackwards => write!(f, "frame time went backwards"),
            SessionError::AlreadyTracking => write!(f, "already tracking a reference image"),
        }
    }
}

impl std::error::Error for SessionError {}

#[derive(Debug, Clone, Copy)]
struct TrackedImage {
    overlay: OverlayPlane,
    appearance: AppearanceAnimation,
    /// Latest anchor pose reported by the tracking provider; read once per
    /// frame when `advance` runs.
    anchor_pose: Pose,
}

/// Per-frame outputs for the rendering host to apply.
#[derive(Debug, Clone, Copy)]
pub struct FrameUpdate {
    pub model_pose: Pose,
    pub model_scale: f32,
    /// `None` once the overlay has been removed from the scene.
    pub overlay_opacity: Option<f32>,
}

/// Single-image tracking session.
///
/// Owns the smoother state and the overlay/appearance timelines. The host
/// forwards anchor events and calls `advance` once per rendered frame,
/// writing the returned pose and scale onto its scene node.
#[derive(Debug, Default)]
pub struct TrackingSession {
    smoother: PoseSmoother,
    tracked: Option<TrackedImage>,
    model_pose: Pose,
    last_time: Option<f64>,
}

impl TrackingSession {
    pub fn new(config: SmootherConfig) -> TrackingSession {
        TrackingSession {
            smoother: PoseSmoother::new(config),
            tracked: None,
            model_pose: Pose::IDENTITY,
            last_time: None,
        }
    }

    /// Reports the first detection of the reference image.
    ///
    /// Places the model directly at the anchor and starts the overlay and
    /// appearance timelines.
    pub fn on_image_detected(
        &mut self,
        time: f64,
        anchor_pose: Pose,
        image_physical_size: Vec2,
        model_bounding_box: (Vec3, Vec3),
    ) -> Result<(), SessionError> {
        if self.tracked.is_some() {
            return Err(SessionError::AlreadyTracking);
        }
        let scale = model::fit_scale(
            image_physical_size,
            model_bounding_box.0,
            model_bounding_box.1,
        );
        info!("image detected at t={:.3}, fitted model scale {:.4}", time, scale);
        self.model_pose = anchor_pose;
        self.tracked = Some(TrackedImage {
            overlay: OverlayPlane::new(image_physical_size, time),
            appearance: AppearanceAnimation::new(scale, time),
            anchor_pose,
        });
        Ok(())
    }

    /// Stores the latest anchor pose; the next `advance` picks it up.
    pub fn on_anchor_updated(&mut self, anchor_pose: Pose) {
        if let Some(tracked) = self.tracked.as_mut() {
            tracked.anchor_pose = anchor_pose;
        }
    }

    /// Advances the session by one rendered frame.
    ///
    /// Returns `None` before any image has been detected.
    pub fn advance(&mut self, time: f64) -> Result<Option<FrameUpdate>, SessionError> {
        if let Some(last) = self.last_time {
            if time < last {
                return Err(SessionError::TimeWentBackwards);
            }
        }
        self.last_time = Some(time);
        let Some(tracked) = self.tracked.as_ref() else {
            return Ok(None);
        };
        self.model_pose = self
            .smoother
            .update(time, &tracked.anchor_pose, &self.model_pose);
        Ok(Some(FrameUpdate {
            model_pose: self.model_pose,
            model_scale: tracked.appearance.scale_at(time),
            overlay_opacity: tracked.overlay.opacity_at(time),
        }))
    }

    pub fn is_tracking(&self) -> bool {
        self.tracked.is_some()
    }

    pub fn model_pose(&self) -> &Pose {
        &self.model_pose
    }
}
