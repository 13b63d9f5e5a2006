//! Continuous ground elevation sampling over seeded Perlin noise.

use noise::{NoiseFn, Perlin};

/// Parameters controlling the shape of the ground surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroundParams {
    /// Height multiplier applied to the normalized noise value.
    /// Ground heights land in `[0, height_scale]`. Default: 2.0.
    pub height_scale: f32,
    /// Noise-domain scale: world units are multiplied by this before
    /// sampling, so smaller values stretch terrain features. Default: 0.1.
    pub noise_scale: f64,
}

impl Default for GroundParams {
    fn default() -> Self {
        Self {
            height_scale: 2.0,
            noise_scale: 0.1,
        }
    }
}

/// Samples ground elevation at world coordinates.
///
/// One sampler serves every chunk of a world: the noise function is
/// continuous, so adjacent chunks that sample contiguous world coordinates
/// get matching heights along their shared edge. Seeding shifts the noise
/// domain by the world seed, giving different terrain per seed without
/// breaking that continuity.
#[derive(Clone, Debug)]
pub struct GroundSampler {
    perlin: Perlin,
    seed_offset: f64,
    params: GroundParams,
}

impl GroundSampler {
    /// Creates a sampler for the given world seed.
    pub fn new(world_seed: i32, params: GroundParams) -> Self {
        Self {
            perlin: Perlin::new(world_seed as u32),
            seed_offset: world_seed as f64,
            params,
        }
    }

    /// Ground height at a world-space (x, z) position.
    ///
    /// The raw Perlin value in `[-1, 1]` is remapped to `[0, 1]` before the
    /// height multiplier, so heights are non-negative.
    pub fn sample(&self, world_x: f64, world_z: f64) -> f32 {
        let n = self.perlin.get([
            (world_x + self.seed_offset) * self.params.noise_scale,
            (world_z + self.seed_offset) * self.params.noise_scale,
        ]);
        ((n + 1.0) * 0.5) as f32 * self.params.height_scale
    }

    /// The parameters this sampler was built with.
    pub fn params(&self) -> &GroundParams {
        &self.params
    }
}
