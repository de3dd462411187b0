//! Opponent configuration.
//!
//! The difficulty-to-depth mapping lives here and nowhere else. It can be
//! overridden from TOML:
//!
//! ```toml
//! positional = true
//!
//! [depths]
//! easy = 2
//! hard = 3
//! master = 4
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::difficulty::Difficulty;

/// Deepest search any difficulty may be configured for.
pub const MAX_DEPTH: u8 = 8;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("depth {depth} for {difficulty} is outside 1..={max}", max = MAX_DEPTH)]
    InvalidDepth { difficulty: Difficulty, depth: u8 },

    #[error("depths must not decrease from easy to hard to master")]
    NotMonotonic,
}

/// Search depth in plies for each difficulty. Beginner never searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DepthTable {
    pub easy: u8,
    pub hard: u8,
    pub master: u8,
}

impl Default for DepthTable {
    fn default() -> Self {
        Self {
            easy: 2,
            hard: 3,
            master: 4,
        }
    }
}

impl DepthTable {
    pub fn depth(&self, difficulty: Difficulty) -> u8 {
        match difficulty {
            Difficulty::Beginner => 0,
            Difficulty::Easy => self.easy,
            Difficulty::Hard => self.hard,
            Difficulty::Master => self.master,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for difficulty in [Difficulty::Easy, Difficulty::Hard, Difficulty::Master] {
            let depth = self.depth(difficulty);
            if !(1..=MAX_DEPTH).contains(&depth) {
                return Err(ConfigError::InvalidDepth { difficulty, depth });
            }
        }
        if self.easy > self.hard || self.hard > self.master {
            return Err(ConfigError::NotMonotonic);
        }
        Ok(())
    }
}

/// Opponent configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OpponentConfig {
    pub depths: DepthTable,
    /// Use piece-square tables on top of material.
    pub positional: bool,
}

impl Default for OpponentConfig {
    fn default() -> Self {
        Self {
            depths: DepthTable::default(),
            positional: true,
        }
    }
}

impl OpponentConfig {
    /// Parse and validate a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: OpponentConfig = toml::from_str(text)?;
        config.depths.validate()?;
        Ok(config)
    }

    /// Load config from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn depth(&self, difficulty: Difficulty) -> u8 {
        self.depths.depth(difficulty)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
