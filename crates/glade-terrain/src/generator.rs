//! The chunk generation pipeline: height-field, mesh, then flora.

use glade_chunk::{CHUNK_SIZE, ChunkCoord, HeightField};
use glade_mesh::build_ground_mesh;

use crate::chunk::Chunk;
use crate::flora::{FloraLibrary, scatter_flora};
use crate::ground::{GroundParams, GroundSampler};
use crate::seed::chunk_rng;

/// Deterministically generates chunks from `(coordinate, world seed)`.
///
/// Generation is pure with respect to external state: the same generator
/// configuration produces bit-identical chunks for the same coordinate, no
/// matter when or how often it runs. There are no error outcomes; defects
/// like an empty flora library degrade to emptier chunks.
#[derive(Clone, Debug)]
pub struct ChunkGenerator {
    world_seed: i32,
    sampler: GroundSampler,
    library: FloraLibrary,
}

impl ChunkGenerator {
    /// Creates a generator for one world.
    pub fn new(world_seed: i32, params: GroundParams, library: FloraLibrary) -> Self {
        Self {
            world_seed,
            sampler: GroundSampler::new(world_seed, params),
            library,
        }
    }

    /// The world seed this generator was configured with.
    pub fn world_seed(&self) -> i32 {
        self.world_seed
    }

    /// The ground parameters in effect.
    pub fn params(&self) -> &GroundParams {
        self.sampler.params()
    }

    /// Generates the chunk at `coord`.
    ///
    /// Runs synchronously to completion: height-field sampling, mesh
    /// construction, and flora scattering all finish before this returns,
    /// so a caller's frame cost is bounded by calls-per-frame.
    pub fn generate(&self, coord: ChunkCoord) -> Chunk {
        let origin = coord.world_origin();

        let field = HeightField::from_fn(|i, j| {
            let world_x = (coord.x * CHUNK_SIZE + i as i32) as f64;
            let world_z = (coord.z * CHUNK_SIZE + j as i32) as f64;
            self.sampler.sample(world_x, world_z)
        });

        let mesh = build_ground_mesh(&field);

        let mut rng = chunk_rng(coord, self.world_seed);
        let flora = scatter_flora(&mut rng, &self.library, &field, origin);

        Chunk::new(coord, field, mesh, flora)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flora::FloraTemplate;
    use glade_chunk::VERTS_PER_EDGE;

    fn test_library() -> FloraLibrary {
        FloraLibrary {
            trees: vec![FloraTemplate::new("oak")],
            bushes: vec![FloraTemplate::new("bramble")],
            mushrooms: vec![FloraTemplate::new("porcini")],
            rocks: vec![FloraTemplate::new("boulder")],
            flowers: vec![FloraTemplate::new("poppy")],
            stumps: vec![FloraTemplate::new("stump")],
        }
    }

    fn generator(seed: i32) -> ChunkGenerator {
        ChunkGenerator::new(seed, GroundParams::default(), test_library())
    }

    #[test]
    fn test_generate_twice_is_bit_identical() {
        let generator = generator(12345);
        let coord = ChunkCoord::new(3, -7);

        let a = generator.generate(coord);
        let b = generator.generate(coord);

        assert_eq!(a.height_field(), b.height_field());
        assert_eq!(a.flora(), b.flora());
        assert_eq!(a.mesh(), b.mesh());
    }

    #[test]
    fn test_two_generators_same_seed_agree() {
        let coord = ChunkCoord::new(-2, 9);
        let a = generator(42).generate(coord);
        let b = generator(42).generate(coord);
        assert_eq!(a.height_field(), b.height_field());
        assert_eq!(a.flora(), b.flora());
    }

    #[test]
    fn test_different_seeds_change_terrain_and_flora() {
        let coord = ChunkCoord::new(0, 0);
        let a = generator(1).generate(coord);
        let b = generator(2).generate(coord);
        assert_ne!(a.height_field(), b.height_field());
    }

    #[test]
    fn test_horizontal_neighbors_share_edge_heights() {
        let generator = generator(12345);
        let left = generator.generate(ChunkCoord::new(0, 0));
        let right = generator.generate(ChunkCoord::new(1, 0));

        // Column x=S of the left chunk is the same world line as column x=0
        // of the right chunk.
        for j in 0..VERTS_PER_EDGE {
            let a = left.height_field().sample(VERTS_PER_EDGE - 1, j);
            let b = right.height_field().sample(0, j);
            assert_eq!(a, b, "seam mismatch at row {j}: {a} vs {b}");
        }
    }

    #[test]
    fn test_vertical_neighbors_share_edge_heights() {
        let generator = generator(98765);
        let near = generator.generate(ChunkCoord::new(-4, -1));
        let far = generator.generate(ChunkCoord::new(-4, 0));

        for i in 0..VERTS_PER_EDGE {
            let a = near.height_field().sample(i, VERTS_PER_EDGE - 1);
            let b = far.height_field().sample(i, 0);
            assert_eq!(a, b, "seam mismatch at column {i}: {a} vs {b}");
        }
    }

    #[test]
    fn test_flora_sits_on_the_ground() {
        let generator = generator(555);
        let coord = ChunkCoord::new(6, 6);
        let chunk = generator.generate(coord);
        let origin = coord.world_origin();

        assert!(!chunk.flora().is_empty());
        for obj in chunk.flora() {
            let local_x = obj.position.x - origin.x;
            let local_z = obj.position.z - origin.y;
            let ground = chunk.height_at(local_x, local_z);
            assert!(
                (obj.position.y - ground).abs() < 1e-5,
                "object floats at {} over ground {ground}",
                obj.position.y
            );
        }
    }

    #[test]
    fn test_empty_library_still_generates_terrain() {
        let generator = ChunkGenerator::new(7, GroundParams::default(), FloraLibrary::default());
        let chunk = generator.generate(ChunkCoord::new(1, 1));
        assert!(chunk.flora().is_empty());
        assert!(chunk.mesh().triangle_count() > 0);
    }
}
