//! Per-chunk deterministic RNG derivation from the world seed.
//!
//! Regenerating the same coordinate with the same world seed must replay an
//! identical random stream, so each generation call gets its own local RNG
//! derived from `(coord, seed)` instead of sharing a global generator.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use glade_chunk::ChunkCoord;

/// Mixes a chunk coordinate and the world seed into a chunk-local seed.
///
/// Multiplies each axis by a large odd prime and XORs with the world seed,
/// using wrapping 32-bit arithmetic. The result is widened zero-extended so
/// negative mixes stay stable across platforms.
pub fn mix_chunk_seed(coord: ChunkCoord, world_seed: i32) -> u64 {
    let mixed = coord.x.wrapping_mul(73_856_093) ^ coord.z.wrapping_mul(19_349_663) ^ world_seed;
    mixed as u32 as u64
}

/// Derives the deterministic random stream for one chunk generation call.
///
/// The returned RNG yields an identical sequence of float and integer draws
/// for the same `(coord, world_seed)` pair, on every platform.
pub fn chunk_rng(coord: ChunkCoord, world_seed: i32) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(mix_chunk_seed(coord, world_seed))
}
