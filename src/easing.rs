use std::f64::consts::FRAC_PI_2;

/// Quarter-sine ease-out curve: 0 at t=0, 1 at t=1, flattening toward the
/// end. Input is clamped to [0, 1].
pub fn ease_out_sine(t: f64) -> f64 {
    (t.clamp(0.0, 1.0) * FRAC_PI_2).sin()
}
