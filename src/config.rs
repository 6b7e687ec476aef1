//! # Configuration
//!
//! Startup settings of the Villa system, read from JSON:
//!
//! ```json
//! {
//!   "channelCapacity": 64,
//!   "seed": [
//!     {"id": 1, "name": "Pool View", "occupancy": 4, "squareFootage": 750}
//!   ]
//! }
//! ```
//!
//! Every key is optional. [`VillaConfig::from_env`] reads the file named by
//! `VILLA_API_CONFIG` (if set) and then applies `VILLA_API_CHANNEL_CAPACITY`.

use crate::model::{Villa, VillaId};
use crate::villa_actor::validator;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Names a JSON config file.
pub const CONFIG_PATH_VAR: &str = "VILLA_API_CONFIG";
/// Overrides the request channel capacity.
pub const CHANNEL_CAPACITY_VAR: &str = "VILLA_API_CHANNEL_CAPACITY";

pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidEnv { var: &'static str, value: String },

    #[error("channel capacity must be at least 1")]
    ZeroCapacity,

    #[error("invalid seed villa {id}: {reason}")]
    InvalidSeed { id: VillaId, reason: String },
}

/// Settings used by [`VillaSystem::start`](crate::lifecycle::VillaSystem::start).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VillaConfig {
    /// Capacity of the request channel in front of the Villa actor.
    pub channel_capacity: usize,
    /// Villas the collection starts with, in order.
    pub seed: Vec<Villa>,
}

impl Default for VillaConfig {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            seed: Vec::new(),
        }
    }
}

impl VillaConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Builds the config from the process environment, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = match lookup(CONFIG_PATH_VAR) {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        if let Some(value) = lookup(CHANNEL_CAPACITY_VAR) {
            config.channel_capacity = value
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|capacity| *capacity > 0)
                .ok_or(ConfigError::InvalidEnv {
                    var: CHANNEL_CAPACITY_VAR,
                    value,
                })?;
        }
        Ok(config)
    }

    /// Rejects settings the system cannot start with.
    ///
    /// Seed villas must satisfy the collection invariants: positive, unique ids, names
    /// unique ignoring case, and valid fields.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.channel_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }

        let mut ids = HashSet::new();
        let mut names = HashSet::new();
        for villa in &self.seed {
            let invalid = |reason: String| ConfigError::InvalidSeed {
                id: villa.id,
                reason,
            };
            if villa.id.0 <= 0 {
                return Err(invalid("id must be positive".into()));
            }
            if !ids.insert(villa.id) {
                return Err(invalid("duplicate id".into()));
            }
            if !names.insert(villa.name.to_lowercase()) {
                return Err(invalid(format!("duplicate name {:?}", villa.name)));
            }
            validator::validate(villa).map_err(|e| invalid(e.to_string()))?;
        }
        Ok(())
    }
}
