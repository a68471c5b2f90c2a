//! Maze Walker - headless demo.
//!
//! Loads a map, then walks it with a simple wall-following autopilot at a
//! fixed frame time, logging the camera pose as it goes. Run with
//! `RUST_LOG=info` (or `debug`) to see the output.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use glam::Vec3;
use maze_game::{PlayerInput, Simulation, SimulationConfig};

#[derive(Parser)]
#[command(name = "maze-walker")]
#[command(author, version, about = "Walk a tile maze headlessly and report the camera path")]
struct Cli {
    /// Map file (`WxH` header followed by rows of glyphs)
    #[arg(value_name = "MAP")]
    map: PathBuf,

    /// Number of frames to simulate
    #[arg(short, long, default_value_t = 600)]
    frames: u32,

    /// Seconds per frame
    #[arg(short = 't', long, default_value_t = 1.0 / 60.0)]
    frame_time: f32,

    /// JSON tuning file with `movement` and/or `items` sections
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the minimap around the final position
    #[arg(short, long)]
    minimap: bool,
}

/// Frames without progress before the autopilot turns.
const STUCK_FRAMES: u32 = 10;

/// Minimum distance per frame that counts as progress.
const PROGRESS_EPSILON: f32 = 1e-4;

/// Holds forward and turns right by 90° whenever it stops making progress.
struct Autopilot {
    turn_pixels: f32,
    last_position: Vec3,
    stuck: u32,
}

impl Autopilot {
    fn new(mouse_sensitivity: f32, start: Vec3) -> Self {
        Self {
            turn_pixels: 90.0 / mouse_sensitivity,
            last_position: start,
            stuck: 0,
        }
    }

    fn next_input(&mut self, position: Vec3) -> PlayerInput {
        let moved = Vec3::new(position.x - self.last_position.x, 0.0, position.z - self.last_position.z);
        self.last_position = position;

        if moved.length() < PROGRESS_EPSILON {
            self.stuck += 1;
        } else {
            self.stuck = 0;
        }

        let mut input = PlayerInput::default();
        input.movement.forward = true;
        if self.stuck >= STUCK_FRAMES {
            log::debug!("autopilot blocked, turning");
            input.mouse_delta.0 = self.turn_pixels;
            self.stuck = 0;
        }
        input
    }
}

fn load_config(path: &Path) -> Result<SimulationConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config '{}'", path.display()))?;
    let config: SimulationConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing config '{}'", path.display()))?;
    config
        .validate()
        .with_context(|| format!("invalid config '{}'", path.display()))?;
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => SimulationConfig::default(),
    };
    let sensitivity = config.movement.mouse_sensitivity;

    let mut sim = Simulation::load(&cli.map, config)
        .with_context(|| format!("loading map '{}'", cli.map.display()))?;
    let mut autopilot = Autopilot::new(sensitivity, sim.pose().position);

    log::info!(
        "walking {} frames at {:.4}s/frame from tile ({}, {})",
        cli.frames,
        cli.frame_time,
        sim.start().x,
        sim.start().y
    );

    for _ in 0..cli.frames {
        let input = autopilot.next_input(sim.pose().position);
        let report = sim.tick(&input, cli.frame_time);

        if report.exit_requested {
            break;
        }
        if sim.frame % 60 == 0 {
            let pose = report.pose;
            let tile = pose.tile();
            log::info!(
                "frame {:>5}: pos=({:.2}, {:.2}, {:.2}) yaw={:.1} pitch={:.1} tile=({}, {})",
                sim.frame,
                pose.position.x,
                pose.position.y,
                pose.position.z,
                pose.yaw,
                pose.pitch,
                tile.x,
                tile.y
            );
        }
    }

    let pose = sim.pose();
    println!(
        "{} frames, {:.1}s: final position ({:.2}, {:.2}, {:.2}), yaw {:.1}, {} collected, {} remaining",
        sim.frame,
        sim.elapsed(),
        pose.position.x,
        pose.position.y,
        pose.position.z,
        pose.yaw,
        sim.collected_count(),
        sim.remaining_items()
    );

    if cli.minimap {
        print_minimap(&sim);
    }

    Ok(())
}

fn print_minimap(sim: &Simulation) {
    use maze_game::{MinimapCell, MINIMAP_HALF_SIZE};

    let view = sim.minimap();
    let side = (2 * MINIMAP_HALF_SIZE + 1) as usize;
    let mut rows = vec![vec![' '; side]; side];
    for cell in view.visible() {
        let x = (cell.offset.x + MINIMAP_HALF_SIZE) as usize;
        let y = (cell.offset.y + MINIMAP_HALF_SIZE) as usize;
        rows[y][x] = match cell.class {
            MinimapCell::Wall => '#',
            MinimapCell::Door => 'D',
            MinimapCell::Item => '$',
            MinimapCell::Floor => '.',
        };
    }
    let center = MINIMAP_HALF_SIZE as usize;
    rows[center][center] = '@';

    for row in rows {
        println!("{}", row.into_iter().collect::<String>());
    }
}
