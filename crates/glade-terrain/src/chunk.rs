//! The immutable per-chunk record produced by generation.

use glade_chunk::{ChunkCoord, FloraInstance, HeightField};
use glade_mesh::TerrainMesh;

/// One generated world cell: height-field, ground mesh, and placed flora.
///
/// Created only by [`ChunkGenerator::generate`](crate::ChunkGenerator) and
/// immutable afterwards; the resident-chunk map owns it exclusively and
/// destroys it whole when the coordinate leaves the streaming window.
#[derive(Clone, Debug)]
pub struct Chunk {
    coord: ChunkCoord,
    height_field: HeightField,
    mesh: TerrainMesh,
    flora: Vec<FloraInstance>,
}

impl Chunk {
    /// Assembles a chunk. Crate-internal: only the generator builds chunks.
    pub(crate) fn new(
        coord: ChunkCoord,
        height_field: HeightField,
        mesh: TerrainMesh,
        flora: Vec<FloraInstance>,
    ) -> Self {
        Self {
            coord,
            height_field,
            mesh,
            flora,
        }
    }

    /// The grid cell this chunk occupies.
    pub fn coord(&self) -> ChunkCoord {
        self.coord
    }

    /// The elevation grid backing the mesh and height queries.
    pub fn height_field(&self) -> &HeightField {
        &self.height_field
    }

    /// The renderable/collidable ground mesh.
    pub fn mesh(&self) -> &TerrainMesh {
        &self.mesh
    }

    /// Placed decorative objects, in generation order.
    pub fn flora(&self) -> &[FloraInstance] {
        &self.flora
    }

    /// Ground height at a chunk-local position (bilinear, clamped).
    ///
    /// See [`HeightField::height_at`] for boundary semantics.
    pub fn height_at(&self, local_x: f32, local_z: f32) -> f32 {
        self.height_field.height_at(local_x, local_z)
    }
}
