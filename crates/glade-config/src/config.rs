//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level streamer configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// World/streaming settings.
    pub world: WorldSection,
    /// Terrain shape settings.
    pub terrain: TerrainSection,
    /// Flora template tables.
    pub flora: FloraSection,
    /// Debug/development settings.
    pub debug: DebugSection,
}

/// World seed and streaming window settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WorldSection {
    /// World seed. The whole world is a pure function of this value.
    pub seed: i32,
    /// Radius of the resident chunk window, in chunks.
    pub view_distance: i32,
    /// World-units the observer must move before the window is re-evaluated.
    pub movement_threshold: f32,
}

/// Terrain shape settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TerrainSection {
    /// Height multiplier; ground heights land in `[0, height_scale]`.
    pub height_scale: f32,
    /// Noise-domain scale; smaller values stretch terrain features.
    pub noise_scale: f64,
}

/// Per-category flora template names.
///
/// An empty list disables that category; placement rolls fall through to
/// the next band.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FloraSection {
    /// Tree template names (trees also get a random scale).
    pub trees: Vec<String>,
    /// Bush template names.
    pub bushes: Vec<String>,
    /// Mushroom template names.
    pub mushrooms: Vec<String>,
    /// Rock template names.
    pub rocks: Vec<String>,
    /// Flower template names.
    pub flowers: Vec<String>,
    /// Stump template names.
    pub stumps: Vec<String>,
}

/// Debug/development settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugSection {
    /// Log level override (e.g. "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for WorldSection {
    fn default() -> Self {
        Self {
            seed: 12345,
            view_distance: 3,
            movement_threshold: 0.5,
        }
    }
}

impl Default for TerrainSection {
    fn default() -> Self {
        Self {
            height_scale: 2.0,
            noise_scale: 0.1,
        }
    }
}

impl Default for FloraSection {
    fn default() -> Self {
        let names = |list: &[&str]| list.iter().map(|s| s.to_string()).collect();
        Self {
            trees: names(&["oak", "birch", "pine"]),
            bushes: names(&["bramble", "fern"]),
            mushrooms: names(&["chanterelle", "porcini", "fly_agaric"]),
            rocks: names(&["boulder", "pebble_cluster"]),
            flowers: names(&["daisy", "poppy"]),
            stumps: names(&["mossy_stump"]),
        }
    }
}

impl Default for DebugSection {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save ---

/// File name inside the config directory.
const CONFIG_FILE: &str = "config.ron";

impl Config {
    /// Load `config.ron` from `dir`, writing a default file first when none
    /// exists yet so a fresh install starts with an editable config.
    pub fn load_or_create(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            let config = Config::default();
            config.save(dir)?;
            log::info!("wrote default config to {}", path.display());
            return Ok(config);
        }

        let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config = ron::from_str(&text).map_err(|source| ConfigError::Malformed {
            path: path.clone(),
            source,
        })?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Write this config to `dir/config.ron`, creating `dir` if needed.
    pub fn save(&self, dir: &Path) -> Result<(), ConfigError> {
        let pretty = ron::ser::PrettyConfig::new().depth_limit(4);
        let text = ron::ser::to_string_pretty(self, pretty)?;

        let path = dir.join(CONFIG_FILE);
        std::fs::create_dir_all(dir)
            .and_then(|()| std::fs::write(&path, text))
            .map_err(|source| ConfigError::Write { path, source })
    }

    /// Default per-user config directory, if one can be determined.
    pub fn default_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("glade"))
    }
}
