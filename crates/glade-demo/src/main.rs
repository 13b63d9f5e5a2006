//! Demo binary that streams a seeded world along a scripted observer walk.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI
//! flags. Run with `cargo run -p glade-demo -- --seed 42 --view-distance 4`
//! to see the streamer load and shed chunk columns as the observer moves.

use clap::Parser;
use glam::Vec3;
use tracing::{error, info};

use glade_chunk::{CHUNK_SIZE, ChunkCoord};
use glade_config::{CliArgs, Config, FloraSection};
use glade_terrain::{ChunkGenerator, FloraLibrary, FloraTemplate, GroundParams};
use glade_world::{StreamerConfig, WorldStreamer};

/// How many full chunk boundaries the scripted walk crosses.
const WALK_CHUNKS: i32 = 6;
/// Observer steps per chunk length, to exercise the movement gate.
const STEPS_PER_CHUNK: i32 = 4;

fn flora_library(section: &FloraSection) -> FloraLibrary {
    let table = |names: &[String]| names.iter().map(FloraTemplate::new).collect();
    FloraLibrary {
        trees: table(&section.trees),
        bushes: table(&section.bushes),
        mushrooms: table(&section.mushrooms),
        rocks: table(&section.rocks),
        flowers: table(&section.flowers),
        stumps: table(&section.stumps),
    }
}

fn main() {
    let args = CliArgs::parse();

    let config_dir = args
        .config
        .clone()
        .or_else(Config::default_dir);
    let mut config = match &config_dir {
        Some(dir) => match Config::load_or_create(dir) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("failed to load config from {}: {e}", dir.display());
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };
    config.apply_cli_overrides(&args);

    glade_log::init_logging(Some(&config));

    let generator = ChunkGenerator::new(
        config.world.seed,
        GroundParams {
            height_scale: config.terrain.height_scale,
            noise_scale: config.terrain.noise_scale,
        },
        flora_library(&config.flora),
    );
    let mut streamer = WorldStreamer::new(
        StreamerConfig {
            view_distance: config.world.view_distance,
            movement_threshold: config.world.movement_threshold,
        },
        generator,
    );

    // Explicit lifecycle: initialize, update per tick, shutdown.
    let mut observer = match streamer.initialize(Vec3::ZERO) {
        Ok(snapped) => snapped,
        Err(e) => {
            // Fatal to the streaming subsystem only; exit cleanly.
            error!(error = %e, "cannot start streaming");
            std::process::exit(1);
        }
    };
    info!(
        seed = config.world.seed,
        resident = streamer.chunks().len(),
        "world ready"
    );

    let stride = CHUNK_SIZE as f32 / STEPS_PER_CHUNK as f32;
    for _ in 0..(WALK_CHUNKS * STEPS_PER_CHUNK) {
        observer.x += stride;
        match streamer.update(observer) {
            Ok(tick) if !tick.skipped => {
                info!(
                    x = observer.x,
                    loaded = tick.loaded.len(),
                    unloaded = tick.unloaded.len(),
                    "tick"
                );
            }
            Ok(_) => {}
            Err(e) => {
                error!(error = %e, "streaming update failed");
                break;
            }
        }
    }

    // Probe the ground under the observer's final position.
    let coord = ChunkCoord::from_world(observer.x, observer.z);
    if let Some(chunk) = streamer.chunks().get(coord) {
        let origin = coord.world_origin();
        let height = chunk.height_at(observer.x - origin.x, observer.z - origin.y);
        info!(
            %coord,
            height,
            flora = chunk.flora().len(),
            "ground under observer"
        );
    }

    streamer.shutdown();
}
