//! Central owner for all resident chunks, keyed by [`ChunkCoord`].
//!
//! Uses an [`FxHashMap`](rustc_hash::FxHashMap) for fast hashing of the
//! small fixed-size coordinate key. This is the single authority for which
//! chunks are loaded; height queries and flora lookups go through it.

use rustc_hash::FxHashMap;

use glade_chunk::ChunkCoord;
use glade_terrain::Chunk;

/// Owns every currently-resident chunk.
///
/// Invariant: a coordinate appears at most once. Inserting over an existing
/// entry is a programming-contract violation (the streamer diffs before
/// loading), so it fails fast in debug builds.
#[derive(Debug, Default)]
pub struct ChunkMap {
    chunks: FxHashMap<ChunkCoord, Chunk>,
}

impl ChunkMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self {
            chunks: FxHashMap::default(),
        }
    }

    /// Inserts a freshly generated chunk.
    ///
    /// # Panics
    /// Debug builds panic on duplicate coordinates; release builds replace
    /// the entry (the duplicate chunk is identical by determinism anyway).
    pub fn insert(&mut self, chunk: Chunk) {
        let coord = chunk.coord();
        let previous = self.chunks.insert(coord, chunk);
        debug_assert!(
            previous.is_none(),
            "duplicate chunk insertion at {coord}"
        );
    }

    /// Removes and returns the chunk at `coord`, if resident.
    pub fn remove(&mut self, coord: ChunkCoord) -> Option<Chunk> {
        self.chunks.remove(&coord)
    }

    /// Immutable access to a resident chunk.
    pub fn get(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.chunks.get(&coord)
    }

    /// True if `coord` is resident.
    pub fn contains(&self, coord: ChunkCoord) -> bool {
        self.chunks.contains_key(&coord)
    }

    /// Number of resident chunks.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// True when no chunks are resident.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Iterates over all resident coordinates.
    pub fn coords(&self) -> impl Iterator<Item = &ChunkCoord> {
        self.chunks.keys()
    }

    /// Iterates over all resident `(coord, chunk)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&ChunkCoord, &Chunk)> {
        self.chunks.iter()
    }

    /// Drops every resident chunk.
    pub fn clear(&mut self) {
        self.chunks.clear();
    }
}
