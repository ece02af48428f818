//! Serialisable mover configuration.
//!
//! Actors are usually authored in data files. `MoverConfig` mirrors the two
//! tunables of a [`Mover`](crate::Mover) and falls back to
//! [`DEFAULT_MOVE_TIME`] and an empty blocking mask for missing fields.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::collision::LayerMask;
use crate::error::ConfigError;
use crate::mover::MoveTime;
use crate::DEFAULT_MOVE_TIME;

/// Tunables for a single mover.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoverConfig {
    /// Seconds needed to traverse one grid step.
    pub move_time: f32,
    /// Layers that obstruct this actor.
    pub blocking_layer: LayerMask,
}

impl Default for MoverConfig {
    fn default() -> Self {
        Self {
            move_time: DEFAULT_MOVE_TIME,
            blocking_layer: LayerMask::NONE,
        }
    }
}

impl MoverConfig {
    /// Parses and validates a configuration from JSON text.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] when the move time is not positive.
    ///
    /// # Examples
    /// ```
    /// use tilestep::{LayerMask, MoverConfig};
    /// let config = MoverConfig::from_json_str(r#"{ "blocking_layer": 256 }"#).unwrap();
    /// assert_eq!(config.blocking_layer, LayerMask::layer(8));
    /// assert!((config.move_time - 0.1).abs() < f32::EPSILON);
    /// ```
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a JSON configuration file.
    ///
    /// # Errors
    /// Returns [`ConfigError::Read`] if the file is unreadable, otherwise the
    /// same errors as [`MoverConfig::from_json_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Checks the move time, returning it in validated form.
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] when the move time is not positive.
    pub fn validate(&self) -> Result<MoveTime, ConfigError> {
        Ok(MoveTime::new(self.move_time)?)
    }
}
