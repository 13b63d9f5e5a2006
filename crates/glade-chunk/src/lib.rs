//! Chunk data model: grid coordinates, height-fields, and flora records.

mod coord;
mod flora;
mod height_field;

pub use coord::{CHUNK_SIZE, ChunkCoord, VERTS_PER_EDGE};
pub use flora::{FloraCategory, FloraInstance};
pub use height_field::HeightField;
