//! The streaming controller: decides which chunks must be resident and
//! reconciles the resident set against that window every update.
//!
//! Lifecycle is explicit: the embedding application calls
//! [`WorldStreamer::initialize`] once, [`WorldStreamer::update`] each control
//! tick with the observer's position, and [`WorldStreamer::shutdown`] when
//! done. There is no background generation; each update completes all of its
//! loads and unloads before returning.

use glam::{Vec2, Vec3};
use rustc_hash::FxHashSet;
use tracing::{debug, error, info};

use glade_chunk::ChunkCoord;
use glade_terrain::ChunkGenerator;

use crate::chunk_map::ChunkMap;
use crate::error::WorldError;

/// Streaming configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StreamerConfig {
    /// Radius of the resident window in chunks (Chebyshev distance), so
    /// `(2 * view_distance + 1)^2` chunks stay loaded.
    pub view_distance: i32,
    /// World-space distance the observer must move before the needed set is
    /// re-evaluated. Suppresses re-diffing on sub-chunk jitter.
    pub movement_threshold: f32,
}

impl Default for StreamerConfig {
    fn default() -> Self {
        Self {
            view_distance: 3,
            movement_threshold: 0.5,
        }
    }
}

/// What one update did: which coordinates were loaded and unloaded.
///
/// Both lists are empty on a skipped (gated) update.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StreamTick {
    /// Coordinates that transitioned absent -> resident this update.
    pub loaded: Vec<ChunkCoord>,
    /// Coordinates that transitioned resident -> absent this update.
    pub unloaded: Vec<ChunkCoord>,
    /// True when the movement gate skipped the window re-evaluation.
    pub skipped: bool,
}

impl StreamTick {
    fn skipped() -> Self {
        Self {
            skipped: true,
            ..Self::default()
        }
    }
}

/// Keeps a square window of chunks resident around a moving observer.
///
/// After every non-skipped update the resident set is exactly the Chebyshev
/// window of radius `view_distance` around the observer's chunk coordinate:
/// no duplicates, no stale entries, no missing entries.
pub struct WorldStreamer {
    config: StreamerConfig,
    generator: ChunkGenerator,
    chunks: ChunkMap,
    /// Observer position at the last window evaluation; `None` until
    /// initialized.
    last_observer: Option<Vec3>,
    enabled: bool,
}

impl WorldStreamer {
    /// Creates a streamer. It stays disabled until [`initialize`] succeeds.
    ///
    /// [`initialize`]: WorldStreamer::initialize
    pub fn new(config: StreamerConfig, generator: ChunkGenerator) -> Self {
        Self {
            config,
            generator,
            chunks: ChunkMap::new(),
            last_observer: None,
            enabled: false,
        }
    }

    /// Validates configuration, snaps the observer to the horizontal center
    /// of its starting chunk, and runs the first window pass.
    ///
    /// Returns the snapped observer position so the embedding application
    /// can reposition its observer; initial placement is then deterministic
    /// relative to chunk boundaries rather than wherever the observer
    /// happened to spawn. On failure the streamer disables itself and
    /// reports the error; the host decides whether to continue without
    /// streaming.
    pub fn initialize(&mut self, observer: Vec3) -> Result<Vec3, WorldError> {
        if let Err(e) = self.validate() {
            error!(error = %e, "world streamer configuration rejected, disabling");
            self.enabled = false;
            return Err(e);
        }

        let center = ChunkCoord::from_world(observer.x, observer.z).world_center();
        let snapped = Vec3::new(center.x, observer.y, center.y);

        self.enabled = true;
        let tick = self.window_pass(snapped);
        info!(
            loaded = tick.loaded.len(),
            observer = %format_args!("({:.1}, {:.1})", snapped.x, snapped.z),
            "world streamer initialized"
        );
        Ok(snapped)
    }

    /// Runs one streaming update for the observer's current position.
    ///
    /// Skips the window re-evaluation (cheap no-op) unless the observer has
    /// both crossed a chunk boundary and moved at least `movement_threshold`
    /// world units since the last evaluation.
    pub fn update(&mut self, observer: Vec3) -> Result<StreamTick, WorldError> {
        let Some(last) = self.last_observer.filter(|_| self.enabled) else {
            return Err(WorldError::NotInitialized);
        };

        let coord = ChunkCoord::from_world(observer.x, observer.z);
        let last_coord = ChunkCoord::from_world(last.x, last.z);
        let moved = Vec2::new(observer.x - last.x, observer.z - last.z).length();
        if coord == last_coord || moved < self.config.movement_threshold {
            debug!(%coord, moved, "streaming update skipped by movement gate");
            return Ok(StreamTick::skipped());
        }

        Ok(self.window_pass(observer))
    }

    /// Unloads every chunk and disables the streamer.
    pub fn shutdown(&mut self) {
        let dropped = self.chunks.len();
        self.chunks.clear();
        self.last_observer = None;
        self.enabled = false;
        info!(dropped, "world streamer shut down");
    }

    /// The resident-chunk map.
    pub fn chunks(&self) -> &ChunkMap {
        &self.chunks
    }

    /// The active configuration.
    pub fn config(&self) -> &StreamerConfig {
        &self.config
    }

    /// True after a successful [`initialize`](WorldStreamer::initialize)
    /// and before [`shutdown`](WorldStreamer::shutdown).
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn validate(&self) -> Result<(), WorldError> {
        if self.config.view_distance < 0 {
            return Err(WorldError::InvalidViewDistance(self.config.view_distance));
        }
        if !self.config.movement_threshold.is_finite() || self.config.movement_threshold < 0.0 {
            return Err(WorldError::InvalidMovementThreshold(
                self.config.movement_threshold,
            ));
        }
        let params = self.generator.params();
        if !params.noise_scale.is_finite() || params.noise_scale <= 0.0 {
            return Err(WorldError::InvalidNoiseScale(params.noise_scale));
        }
        if !params.height_scale.is_finite() || params.height_scale < 0.0 {
            return Err(WorldError::InvalidHeightScale(params.height_scale));
        }
        Ok(())
    }

    /// Rebuilds the needed set around the observer and reconciles the
    /// resident map against it.
    fn window_pass(&mut self, observer: Vec3) -> StreamTick {
        let center = ChunkCoord::from_world(observer.x, observer.z);
        let v = self.config.view_distance;

        let mut needed = FxHashSet::default();
        let mut loaded = Vec::new();
        for dx in -v..=v {
            for dz in -v..=v {
                let coord = center.offset(dx, dz);
                needed.insert(coord);
                if !self.chunks.contains(coord) {
                    self.chunks.insert(self.generator.generate(coord));
                    loaded.push(coord);
                }
            }
        }

        let stale: Vec<ChunkCoord> = self
            .chunks
            .coords()
            .filter(|c| !needed.contains(*c))
            .copied()
            .collect();
        let mut unloaded = Vec::with_capacity(stale.len());
        for coord in stale {
            // Dropping the chunk releases its mesh and flora with it.
            self.chunks.remove(coord);
            unloaded.push(coord);
        }

        self.last_observer = Some(observer);

        if !loaded.is_empty() || !unloaded.is_empty() {
            info!(
                %center,
                loaded = loaded.len(),
                unloaded = unloaded.len(),
                resident = self.chunks.len(),
                "chunk window updated"
            );
        }

        StreamTick {
            loaded,
            unloaded,
            skipped: false,
        }
    }
}
