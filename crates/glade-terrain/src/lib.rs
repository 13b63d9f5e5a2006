//! Deterministic chunk generation: seeded noise terrain and flora scattering.

mod chunk;
mod flora;
mod generator;
mod ground;
mod seed;

pub use chunk::Chunk;
pub use flora::{FloraLibrary, FloraTemplate, scatter_flora};
pub use generator::ChunkGenerator;
pub use ground::{GroundParams, GroundSampler};
pub use seed::{chunk_rng, mix_chunk_seed};
