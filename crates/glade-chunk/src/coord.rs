//! Chunk grid coordinates and world-space conversions.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Edge length of a chunk in world units. Also the number of quads per side
/// of the ground mesh.
pub const CHUNK_SIZE: i32 = 16;

/// Number of height samples along one chunk edge (`CHUNK_SIZE + 1`).
pub const VERTS_PER_EDGE: usize = CHUNK_SIZE as usize + 1;

/// Identifies a chunk's cell in the infinite 2D chunk grid.
///
/// Equality and hashing are by value; this is the unique key in the
/// resident-chunk mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChunkCoord {
    /// Chunk-grid X coordinate.
    pub x: i32,
    /// Chunk-grid Z coordinate.
    pub z: i32,
}

impl ChunkCoord {
    /// Creates a new chunk coordinate.
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Returns the coordinate offset by `(dx, dz)` grid cells.
    pub fn offset(self, dx: i32, dz: i32) -> Self {
        Self {
            x: self.x + dx,
            z: self.z + dz,
        }
    }

    /// Coordinate of the chunk containing the given world-space point.
    ///
    /// Floor division, so points with negative coordinates map to the
    /// correct (negative) chunk rather than rounding toward zero.
    pub fn from_world(world_x: f32, world_z: f32) -> Self {
        Self {
            x: (world_x / CHUNK_SIZE as f32).floor() as i32,
            z: (world_z / CHUNK_SIZE as f32).floor() as i32,
        }
    }

    /// World-space position of the chunk's minimum (x, z) corner.
    pub fn world_origin(self) -> Vec2 {
        Vec2::new(
            (self.x * CHUNK_SIZE) as f32,
            (self.z * CHUNK_SIZE) as f32,
        )
    }

    /// World-space position of the chunk's horizontal center.
    pub fn world_center(self) -> Vec2 {
        self.world_origin() + Vec2::splat(CHUNK_SIZE as f32 * 0.5)
    }

    /// Chebyshev (chessboard) distance to another coordinate, in chunks.
    pub fn chebyshev(self, other: Self) -> i32 {
        (self.x - other.x).abs().max((self.z - other.z).abs())
    }
}

impl std::fmt::Display for ChunkCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}
