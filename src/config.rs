use serde::{Deserialize, Serialize};

/// Tuning knobs for the pose smoother.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SmootherConfig {
    /// Chase speed in world units per second.
    pub speed: f32,
    /// Lower clamp on a segment's duration in seconds. Keeps a zero-distance
    /// retarget from producing a zero-length segment.
    pub min_duration: f64,
    /// Upper clamp on a segment's duration in seconds.
    pub max_duration: f64,
    /// Anchor movement below this distance does not restart interpolation.
    pub position_epsilon: f32,
    /// Anchor rotation below this threshold (1 - |q0 . q1|) does not restart
    /// interpolation.
    pub orientation_epsilon: f32,
}

impl Default for SmootherConfig {
    fn default() -> Self {
        Self {
            speed: 0.15,
            min_duration: 0.05,
            max_duration: 2.0,
            position_epsilon: 1e-4,
            orientation_epsilon: 1e-4,
        }
    }
}

impl SmootherConfig {
    pub fn from_json_file(file_path: &str) -> SmootherConfig {
        let contents =
            std::fs::read_to_string(file_path).expect("Should have been able to read the file");
        serde_json::from_str(&contents).unwrap()
    }

    pub fn to_json_file(&self, output_path: &str) {
        let j = serde_json::to_string_pretty(self).unwrap();
        std::fs::write(output_path, j).unwrap();
    }
}
