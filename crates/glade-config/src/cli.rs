//! Command-line argument parsing for the Glade streamer.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Glade command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "glade", about = "Glade world streamer")]
pub struct CliArgs {
    /// World seed.
    #[arg(long)]
    pub seed: Option<i32>,

    /// View distance in chunks.
    #[arg(long)]
    pub view_distance: Option<i32>,

    /// Movement threshold in world units.
    #[arg(long)]
    pub movement_threshold: Option<f32>,

    /// Terrain height multiplier.
    #[arg(long)]
    pub height_scale: Option<f32>,

    /// Noise-domain scale.
    #[arg(long)]
    pub noise_scale: Option<f64>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(seed) = args.seed {
            self.world.seed = seed;
        }
        if let Some(vd) = args.view_distance {
            self.world.view_distance = vd;
        }
        if let Some(mt) = args.movement_threshold {
            self.world.movement_threshold = mt;
        }
        if let Some(hs) = args.height_scale {
            self.terrain.height_scale = hs;
        }
        if let Some(ns) = args.noise_scale {
            self.terrain.noise_scale = ns;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
