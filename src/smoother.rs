use log::debug;

use crate::config::SmootherConfig;
use crate::easing::ease_out_sine;
use crate::types::Pose;

/// One in-flight interpolation run from a recorded start pose toward the
/// anchor pose observed when the run began.
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    pub start_time: f64,
    pub duration: f64,
    pub initial: Pose,
    pub target: Pose,
}

impl Segment {
    /// Starts a segment from the object's current pose toward the anchor.
    ///
    /// Duration is distance-proportional at the configured speed, clamped to
    /// [min_duration, max_duration].
    pub fn begin(config: &SmootherConfig, time: f64, object: &Pose, anchor: &Pose) -> Segment {
        let distance = object.distance_to(anchor) as f64;
        let duration =
            (distance / config.speed as f64).clamp(config.min_duration, config.max_duration);
        Segment {
            start_time: time,
            duration,
            initial: *object,
            target: *anchor,
        }
    }

    /// Pose along this segment at `time`, saturating at the target once the
    /// duration has elapsed.
    pub fn sample(&self, time: f64) -> Pose {
        let t_linear = ((time - self.start_time) / self.duration).clamp(0.0, 1.0);
        if t_linear >= 1.0 {
            return self.target;
        }
        let t = ease_out_sine(t_linear) as f32;
        let delta = self.target.position - self.initial.position;
        Pose {
            position: self.initial.position + delta * t,
            orientation: self.initial.orientation.slerp(self.target.orientation, t),
        }
    }
}

/// Result of a single smoothing step.
#[derive(Debug, Clone, Copy)]
pub struct Step {
    pub segment: Segment,
    pub pose: Pose,
}

/// Advances the smoothing by one rendered frame.
///
/// If the anchor has moved away from the current segment's target (beyond the
/// configured epsilons) a new segment starts from the object's current pose
/// and the object pose is returned unchanged for this frame. Otherwise the
/// existing segment is sampled at `time`.
pub fn step(
    segment: Option<&Segment>,
    config: &SmootherConfig,
    time: f64,
    anchor: &Pose,
    object: &Pose,
) -> Step {
    if let Some(seg) = segment {
        if seg
            .target
            .approx_eq(anchor, config.position_epsilon, config.orientation_epsilon)
        {
            return Step {
                segment: *seg,
                pose: seg.sample(time),
            };
        }
    }
    let seg = Segment::begin(config, time, object, anchor);
    debug!(
        "new segment at t={:.3}: distance {:.4}, duration {:.3} s",
        time,
        object.distance_to(anchor),
        seg.duration
    );
    Step {
        segment: seg,
        pose: *object,
    }
}

/// Frame-loop convenience wrapper owning the current segment.
#[derive(Debug, Default)]
pub struct PoseSmoother {
    config: SmootherConfig,
    segment: Option<Segment>,
}

impl PoseSmoother {
    pub fn new(config: SmootherConfig) -> PoseSmoother {
        PoseSmoother {
            config,
            segment: None,
        }
    }

    /// One call per rendered frame. Returns the pose to write onto the
    /// followed object.
    pub fn update(&mut self, time: f64, anchor: &Pose, object: &Pose) -> Pose {
        let result = step(self.segment.as_ref(), &self.config, time, anchor, object);
        self.segment = Some(result.segment);
        result.pose
    }

    pub fn segment(&self) -> Option<&Segment> {
        self.segment.as_ref()
    }

    pub fn config(&self) -> &SmootherConfig {
        &self.config
    }

    /// Drops the current segment; the next update starts a fresh one.
    pub fn reset(&mut self) {
        self.segment = None;
    }
}
