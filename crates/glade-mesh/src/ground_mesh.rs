//! Triangulated ground mesh built from a chunk's height-field.
//!
//! Produces one vertex per height sample and two triangles per grid quad,
//! wound so that every face normal points up without a post-hoc index fixup.
//! Normals are recomputed from triangle geometry, matching what a renderer's
//! recalculate-normals pass would produce.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use glade_chunk::{CHUNK_SIZE, HeightField, VERTS_PER_EDGE};

/// A single vertex of the ground mesh.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    /// Position in chunk-local coordinates (x, height, z).
    pub position: [f32; 3],
    /// Smooth vertex normal, unit length.
    pub normal: [f32; 3],
    /// Texture coordinates mapped linearly to `[0, 1]` across the chunk.
    pub uv: [f32; 2],
}

/// The renderable (and collidable) ground mesh of one chunk.
///
/// Interleaved vertex data plus triangle indices, ready for GPU upload or
/// for building a collision surface from the same triangles.
#[derive(Clone, Debug, PartialEq)]
pub struct TerrainMesh {
    /// Vertex buffer, `(CHUNK_SIZE + 1)^2` entries in row-major grid order.
    pub vertices: Vec<MeshVertex>,
    /// Index buffer, 3 indices per triangle, 2 triangles per grid quad.
    pub indices: Vec<u32>,
}

impl TerrainMesh {
    /// Number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// The three corner positions of triangle `t`.
    pub fn triangle(&self, t: usize) -> [Vec3; 3] {
        let i = t * 3;
        [
            Vec3::from(self.vertices[self.indices[i] as usize].position),
            Vec3::from(self.vertices[self.indices[i + 1] as usize].position),
            Vec3::from(self.vertices[self.indices[i + 2] as usize].position),
        ]
    }

    /// Geometric (non-normalized) normal of triangle `t` from vertex order.
    pub fn face_normal(&self, t: usize) -> Vec3 {
        let [a, b, c] = self.triangle(t);
        (b - a).cross(c - a)
    }
}

/// Builds the ground mesh for one chunk from its height-field.
///
/// Vertices sit at chunk-local `(i, height, j)` for each grid point, so two
/// adjacent chunks share boundary vertex heights by construction (seam
/// continuity comes from the height-field, not from stitching).
pub fn build_ground_mesh(field: &HeightField) -> TerrainMesh {
    let res = VERTS_PER_EDGE;
    let size = CHUNK_SIZE as usize;

    let mut vertices = Vec::with_capacity(res * res);
    for j in 0..res {
        for i in 0..res {
            vertices.push(MeshVertex {
                position: [i as f32, field.sample(i, j), j as f32],
                normal: [0.0, 1.0, 0.0],
                uv: [i as f32 / size as f32, j as f32 / size as f32],
            });
        }
    }

    let mut indices = Vec::with_capacity(size * size * 6);
    let stride = res as u32;
    for j in 0..size {
        for i in 0..size {
            let v = (j * res + i) as u32;
            // Both triangles wound counter-clockwise seen from above (+Y),
            // so the front face points up.
            indices.extend_from_slice(&[v, v + stride, v + stride + 1]);
            indices.extend_from_slice(&[v, v + stride + 1, v + 1]);
        }
    }

    let mut mesh = TerrainMesh { vertices, indices };
    recompute_normals(&mut mesh);
    mesh
}

/// Recomputes smooth vertex normals from triangle geometry.
///
/// Accumulates the cross product of each triangle's edges into its three
/// vertices (area-weighted) and normalizes. Degenerate vertices fall back
/// to straight up.
fn recompute_normals(mesh: &mut TerrainMesh) {
    let mut accum = vec![Vec3::ZERO; mesh.vertices.len()];
    for t in 0..mesh.triangle_count() {
        let n = mesh.face_normal(t);
        for k in 0..3 {
            accum[mesh.indices[t * 3 + k] as usize] += n;
        }
    }
    for (vertex, n) in mesh.vertices.iter_mut().zip(accum) {
        let n = n.normalize_or(Vec3::Y);
        vertex.normal = n.to_array();
    }
}
