//! Streaming configuration errors.

/// Errors that disable the streaming subsystem at startup.
///
/// These are fatal to the streamer (it disables itself and reports loudly)
/// but never to the host process. Per-item generation degradations are not
/// errors at all.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// View distance must be non-negative.
    #[error("view distance must be non-negative, got {0}")]
    InvalidViewDistance(i32),

    /// Movement threshold must be finite and non-negative.
    #[error("movement threshold must be finite and non-negative, got {0}")]
    InvalidMovementThreshold(f32),

    /// The generator's noise scale would poison every height sample.
    #[error("noise scale must be positive and finite, got {0}")]
    InvalidNoiseScale(f64),

    /// The generator's height scale would poison every height sample.
    #[error("height scale must be finite and non-negative, got {0}")]
    InvalidHeightScale(f32),

    /// `update` was called before a successful `initialize`.
    #[error("streamer used before successful initialization")]
    NotInitialized,
}
