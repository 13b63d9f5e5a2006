//! Ground mesh construction from per-chunk height-fields.

mod ground_mesh;

pub use ground_mesh::{MeshVertex, TerrainMesh, build_ground_mesh};
