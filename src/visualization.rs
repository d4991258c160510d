use rerun::{RecordingStream, TimeCell};

use crate::types::Pose;

/// Maps a timestamp onto the viridis gradient over `[0, t_max]`.
pub fn time_to_color(t: f64, t_max: f64) -> (u8, u8, u8, u8) {
    let c = colorous::VIRIDIS.eval_continuous(if t_max > 0.0 {
        (t / t_max).clamp(0.0, 1.0)
    } else {
        0.0
    });
    (c.r, c.g, c.b, 255)
}

fn time_to_nanos(time: f64) -> i64 {
    (time * 1e9) as i64
}

/// Logs one pose sample on the given topic.
pub fn log_pose(
    recording: &RecordingStream,
    topic: &str,
    time: f64,
    pose: &Pose,
    color: (u8, u8, u8, u8),
) {
    recording.set_time(
        "stable",
        TimeCell::from_timestamp_nanos_since_epoch(time_to_nanos(time)),
    );
    recording
        .log(
            format!("{}/pose", topic),
            &rerun::Points3D::new([(pose.position.x, pose.position.y, pose.position.z)])
                .with_colors([color])
                .with_radii([rerun::Radius::new_ui_points(5.0)]),
        )
        .unwrap();
}

/// Logs a whole trajectory as points colored by time along the gradient.
pub fn log_trajectory(recording: &RecordingStream, topic: &str, samples: &[(f64, Pose)]) {
    let t_max = samples.last().map(|(t, _)| *t).unwrap_or(0.0);
    let (pts, colors): (Vec<_>, Vec<_>) = samples
        .iter()
        .map(|(t, p)| {
            (
                (p.position.x, p.position.y, p.position.z),
                time_to_color(*t, t_max),
            )
        })
        .unzip();
    recording
        .log(
            topic,
            &rerun::Points3D::new(pts)
                .with_colors(colors)
                .with_radii([rerun::Radius::new_ui_points(2.0)]),
        )
        .unwrap();
}
