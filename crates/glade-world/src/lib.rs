//! World streaming: a sliding window of resident chunks around an observer.

mod chunk_map;
mod error;
mod streamer;

pub use chunk_map::ChunkMap;
pub use error::WorldError;
pub use streamer::{StreamTick, StreamerConfig, WorldStreamer};
