use anchor_follow::config::SmootherConfig;
use anchor_follow::session::TrackingSession;
use anchor_follow::simulation::{AnchorSimulator, SimulatorConfig};
use anchor_follow::visualization::*;
use clap::Parser;
use glam::{Vec2, Vec3};
use std::time::Instant;

#[derive(Parser)]
#[command(version, about, author)]
struct AFRSCli {
    /// seconds of simulated tracking
    #[arg(long, default_value_t = 10.0)]
    duration: f64,

    /// rendered frames per second
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// seconds between simulated anchor observations
    #[arg(long, default_value_t = 0.25)]
    update_interval: f64,

    /// positional jitter amplitude of the simulated anchor
    #[arg(long, default_value_t = 0.0)]
    jitter: f32,

    /// rng seed for the simulated trajectory
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// path to a smoother config json
    #[arg(long)]
    config: Option<String>,

    /// output rerun recording path
    #[arg(long, default_value = "follow.rrd")]
    output: String,
}

fn main() {
    env_logger::init();
    let cli = AFRSCli::parse();
    let config = cli
        .config
        .as_deref()
        .map(SmootherConfig::from_json_file)
        .unwrap_or_default();
    let mut session = TrackingSession::new(config);
    let mut simulator = AnchorSimulator::new(SimulatorConfig {
        seed: cli.seed,
        jitter: cli.jitter,
        update_interval: cli.update_interval,
        ..Default::default()
    });
    let recording = rerun::RecordingStreamBuilder::new("anchor-follow")
        .save(&cli.output)
        .unwrap();

    // physical size of the reference image and the model bounding box the
    // original demo would read from its assets
    let image_physical_size = Vec2::new(0.2, 0.3);
    let model_bounding_box = (Vec3::ZERO, Vec3::new(0.12, 0.08, 0.3));

    let now = Instant::now();
    let frame_count = (cli.duration * cli.fps) as usize;
    let mut anchor_samples = Vec::new();
    let mut model_samples = Vec::new();
    for i in 0..frame_count {
        let time = i as f64 / cli.fps;
        if let Some(anchor) = simulator.poll(time) {
            if session.is_tracking() {
                session.on_anchor_updated(anchor);
            } else {
                session
                    .on_image_detected(time, anchor, image_physical_size, model_bounding_box)
                    .unwrap();
            }
            anchor_samples.push((time, anchor));
        }
        if let Some(update) = session.advance(time).unwrap() {
            log_pose(
                &recording,
                "/model",
                time,
                &update.model_pose,
                (255, 255, 255, 255),
            );
            model_samples.push((time, update.model_pose));
        }
    }
    log_trajectory(&recording, "/anchor/trajectory", &anchor_samples);
    log_trajectory(&recording, "/model/trajectory", &model_samples);
    let duration_sec = now.elapsed().as_secs_f64();
    println!("simulated {} frames in {:.6} sec", frame_count, duration_sec);
    println!(
        "avg: {} sec",
        duration_sec / frame_count as f64
    );
}
