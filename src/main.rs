//! Flipbook command-line entry point.
//!
//! Loads a folder of frames, plays them headlessly in a one-sprite scene at a
//! fixed tick, and reports what the animation does.
//!
//! # Main Loop
//!
//! 1. Load `flipbook.ini` (or `--config`), then apply command-line overrides
//! 2. Decode the frame folder and build the animation
//! 3. Run `ticks` ticks of `tick_ms` milliseconds, or until the sprite
//!    despawns after a non-repeating animation ends
//! 4. Optionally print per-tick JSON and save a PNG of the final screen
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- assets/explosion --loop-type isolating --json
//! ```

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use log::{debug, error, info};

use flipbook::components::animatedsprite::Placement;
use flipbook::components::animation::{Animation, AnimationCallback, AnimationLoopType};
use flipbook::logging;
use flipbook::resources::config::{DEFAULT_CONFIG_PATH, FlipbookConfig};
use flipbook::scene::Scene;
use flipbook::Result;

/// Headless frame animation player
#[derive(Parser, Debug)]
#[command(version, about = "Play a folder of frames headlessly and report what the animation does.")]
struct Cli {
    /// Folder holding the frames.
    folder: PathBuf,

    /// INI configuration file (default: ./flipbook.ini if present).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// forward, backward, isolating, repeating or repeating_backward.
    #[arg(long, value_name = "TYPE")]
    loop_type: Option<AnimationLoopType>,

    /// Total animation time in milliseconds.
    #[arg(long, value_name = "MS")]
    time: Option<u32>,

    /// Uniform scale applied to the frame size.
    #[arg(long)]
    scale: Option<f32>,

    /// Frame width before scaling (defaults to the first frame's width).
    #[arg(long, requires = "height")]
    width: Option<u32>,

    /// Frame height before scaling (defaults to the first frame's height).
    #[arg(long, requires = "width")]
    height: Option<u32>,

    /// top_left, top_right, bottom_left, bottom_right or center.
    #[arg(long)]
    placement: Option<Placement>,

    /// Tag passed to the completion callback.
    #[arg(long)]
    tag: Option<String>,

    /// Number of ticks to simulate.
    #[arg(long)]
    ticks: Option<u32>,

    /// Milliseconds per tick.
    #[arg(long, value_name = "MS")]
    tick_ms: Option<u32>,

    /// Print the sprite state as one JSON object per tick.
    #[arg(long)]
    json: bool,

    /// Save the final screen to this image file.
    #[arg(long, value_name = "PATH")]
    snapshot: Option<PathBuf>,

    /// Keep the sprite still.
    #[arg(long)]
    no_oscillation: bool,

    /// Write the effective configuration to this INI file and exit.
    #[arg(long, value_name = "PATH")]
    write_config: Option<PathBuf>,
}

fn main() {
    logging::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn load_config(cli: &Cli) -> Result<FlipbookConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let mut config = FlipbookConfig::with_path(path);
            config.load_from_file()?;
            config
        }
        None => {
            let mut config = FlipbookConfig::new();
            if Path::new(DEFAULT_CONFIG_PATH).is_file() {
                config.load_from_file()?;
            } else {
                debug!("No {DEFAULT_CONFIG_PATH}, using defaults");
            }
            config
        }
    };

    if let Some(loop_type) = cli.loop_type {
        config.loop_type = loop_type;
    }
    if let Some(time) = cli.time {
        config.animation_time = time;
    }
    if let Some(scale) = cli.scale {
        config.scale = scale;
    }
    if let Some(placement) = cli.placement {
        config.placement = placement;
    }
    if let Some(tag) = &cli.tag {
        config.tag = tag.clone();
    }
    if let Some(ticks) = cli.ticks {
        config.ticks = ticks;
    }
    if let Some(tick_ms) = cli.tick_ms {
        config.tick_ms = tick_ms;
    }
    if cli.no_oscillation {
        config.oscillation_enabled = false;
    }
    Ok(config)
}

fn run(cli: Cli) -> Result<()> {
    let mut config = load_config(&cli)?;

    if let Some(path) = &cli.write_config {
        config.config_path = path.clone();
        return config.save_to_file();
    }

    let mut settings = config.animation_settings();
    if let (Some(width), Some(height)) = (cli.width, cli.height) {
        settings = settings.with_size(width, height);
    }
    let callback: AnimationCallback = Box::new(|tag: &str| info!("Callback fired for '{tag}'"));
    let animation = Animation::from_folder_path(
        &cli.folder,
        &config.frame_loader(),
        settings,
        callback,
    )?;
    info!(
        "Playing {} frames from {} as {} ({} ms per frame)",
        animation.frame_count(),
        cli.folder.display(),
        animation.loop_type(),
        animation.flip_interval()
    );

    let mut scene = Scene::new(&config, animation);
    scene.play();
    let started = Instant::now();

    for tick in 1..=config.ticks {
        scene.tick(config.tick_ms);
        if cli.json {
            if let Some(snapshot) = scene.snapshot() {
                println!("{}", serde_json::to_string(&snapshot)?);
            }
        }
        if scene.is_finished() {
            info!("Sprite finished after {tick} ticks");
            break;
        }
    }

    if let Some(snapshot) = scene.snapshot() {
        info!(
            "Stopped at frame {}/{} (playing={}, reversed={})",
            snapshot.index, snapshot.frame_count, snapshot.playing, snapshot.reversed
        );
    }

    logging::log_elapsed("Playback", started);

    if let Some(path) = &cli.snapshot {
        scene.screen().save(path)?;
    }

    Ok(())
}
