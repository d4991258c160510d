use glam::{Quat, Vec3};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::types::Pose;

/// Synthetic anchor trajectory parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SimulatorConfig {
    pub seed: u64,
    /// Radius of the circular arc the anchor travels, in world units.
    pub radius: f32,
    /// Angular rate along the arc in radians per second.
    pub angular_rate: f32,
    /// Uniform positional noise amplitude per axis, in world units.
    pub jitter: f32,
    /// Seconds between anchor observations. The tracking provider reports at
    /// its own cadence, not once per rendered frame.
    pub update_interval: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            radius: 0.5,
            angular_rate: 0.4,
            jitter: 0.0,
            update_interval: 0.25,
        }
    }
}

/// Deterministic stand-in for a camera tracking provider.
///
/// Moves an anchor along a horizontal arc, facing its direction of travel,
/// and reports its pose at the configured cadence.
#[derive(Debug)]
pub struct AnchorSimulator {
    config: SimulatorConfig,
    rng: ChaCha8Rng,
    next_time: f64,
}

impl AnchorSimulator {
    pub fn new(config: SimulatorConfig) -> AnchorSimulator {
        AnchorSimulator {
            config,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_time: 0.0,
        }
    }

    /// Anchor pose observed at `time`, if a tracking update lands this frame.
    pub fn poll(&mut self, time: f64) -> Option<Pose> {
        if time + 1e-9 < self.next_time {
            return None;
        }
        self.next_time += self.config.update_interval;
        Some(self.pose_at(time))
    }

    fn pose_at(&mut self, time: f64) -> Pose {
        let angle = self.config.angular_rate * time as f32;
        let mut position =
            Vec3::new(angle.cos(), 0.0, angle.sin()) * self.config.radius;
        if self.config.jitter > 0.0 {
            let j = self.config.jitter;
            position += Vec3::new(
                self.rng.random_range(-j..j),
                self.rng.random_range(-j..j),
                self.rng.random_range(-j..j),
            );
        }
        Pose::new(position, Quat::from_rotation_y(-angle))
    }
}
