//! Error types returned while configuring movers.
use std::path::PathBuf;

use thiserror::Error;

/// Rejections raised when constructing a [`Mover`](crate::Mover).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MoverError {
    /// The traversal time of one grid step must be finite and positive.
    #[error("move time must be a positive number of seconds, got {0}")]
    InvalidMoveTime(f32),
}

/// Failures while loading a [`MoverConfig`](crate::MoverConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read mover config {path}")]
    Read {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The configuration text is not valid JSON for a mover.
    #[error("failed to parse mover config")]
    Parse(#[from] serde_json::Error),
    /// The configuration parsed but describes an unusable mover.
    #[error(transparent)]
    Invalid(#[from] MoverError),
}
