//! Configuration for the Glade world streamer.
//!
//! Settings persist to disk as RON files and can be overridden from the
//! command line via clap. Unknown or missing fields fall back to defaults,
//! so configs stay forward/backward compatible.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugSection, FloraSection, TerrainSection, WorldSection};
pub use error::ConfigError;
