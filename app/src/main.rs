// Headless frame driver: runs the graph at a fixed frame rate and writes
// a top-down snapshot of every frame.

mod snapshot;

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use graph_core::{DisplayMetric, FrameStats, FunctionId, Graph, GraphConfig};
use log::{debug, info};

use crate::snapshot::SnapshotRenderer;

#[derive(Parser, Debug)]
#[command(name = "graph-frames", about = "Render animated surface frames to PNG")]
struct Args {
    /// JSON config file. Missing fields use defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of frames to simulate.
    #[arg(long, default_value_t = 120)]
    frames: u32,

    /// Simulated frames per second.
    #[arg(long, default_value_t = 60.0)]
    fps: f32,

    /// Grid resolution, overriding the config.
    #[arg(long)]
    resolution: Option<u32>,

    /// Function shown at start, overriding the config.
    #[arg(long)]
    function: Option<FunctionId>,

    /// Begin a transition to this function on the first frame.
    #[arg(long)]
    to: Option<FunctionId>,

    /// Transition duration in seconds, overriding the config.
    #[arg(long)]
    duration: Option<f32>,

    /// Write every n-th frame.
    #[arg(long, default_value_t = 1)]
    every: u32,

    /// Output directory for the PNG files.
    #[arg(long, default_value = "frames")]
    out: PathBuf,

    /// Edge length of the output images in pixels.
    #[arg(long, default_value_t = 512)]
    size: u32,

    /// Report frame statistics as frame durations instead of FPS.
    #[arg(long)]
    millis: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => GraphConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GraphConfig::default(),
    };
    if let Some(resolution) = args.resolution {
        config.resolution = resolution;
    }
    if let Some(function) = args.function {
        config.function = function;
    }
    if let Some(duration) = args.duration {
        config.transition_duration = duration;
    }
    let stats_window = config.stats_window;

    let mut graph = Graph::new(config).context("invalid graph configuration")?;
    if let Some(to) = args.to {
        graph.transition_to(to);
    }

    fs::create_dir_all(&args.out)
        .with_context(|| format!("creating output directory {}", args.out.display()))?;

    let renderer = SnapshotRenderer::new(args.size);
    let metric = if args.millis {
        DisplayMetric::FrameDuration
    } else {
        DisplayMetric::FrameRate
    };
    let mut stats = FrameStats::new(stats_window);
    let dt = 1.0 / args.fps.max(1.0);
    let every = args.every.max(1);
    let mut t = 0.0f32;
    let mut written = 0u32;

    info!(
        "rendering {} frames at {} fps into {}",
        args.frames,
        args.fps,
        args.out.display()
    );

    for index in 0..args.frames {
        let started = Instant::now();
        t += dt;
        let frame = graph.update(dt, t)?;
        debug!(
            "frame {index}: {} progress {:.3}",
            frame.function, frame.progress
        );

        if index % every == 0 {
            let img = renderer.render(&frame);
            let path = args.out.join(format!("frame_{index:05}.png"));
            img.save(&path)
                .with_context(|| format!("writing {}", path.display()))?;
            written += 1;
        }

        if let Some(report) = stats.record(started.elapsed().as_secs_f32()) {
            info!("{} over {} frames", report.format(metric), report.frames);
        }
    }

    info!(
        "wrote {written} frames, showing {}",
        graph.current_function()
    );
    Ok(())
}
