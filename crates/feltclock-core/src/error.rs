//! Core error types for feltclock-core.
//!
//! The clock engine itself is total over its documented input domain:
//! navigation clamps, missing payout brackets are `None`, rake is floored
//! at the pool. Errors only arise at the structure-file boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Structure-file loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the structure file.
    #[error("failed to read structure file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or has the wrong shape.
    #[error("structure file does not parse: {0}")]
    Parse(#[from] toml::de::Error),

    /// A session cannot start with zero timeblocks.
    #[error("structure file defines no levels or breaks")]
    EmptySchedule,
}

/// Result type alias for ConfigError.
pub type Result<T, E = ConfigError> = std::result::Result<T, E>;
