use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Largest supported number of cells per side
pub const MAX_GRID_DIMENSION: usize = 256;

/// Problems detected while loading or validating a [`GameConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("tile size must be greater than zero")]
    ZeroTileSize,
    #[error("canvas size {canvas_size} is not a multiple of tile size {tile_size}")]
    UnevenTiling { canvas_size: u32, tile_size: u32 },
    #[error("grid of {0}x{0} cells is too small to play on")]
    GridTooSmall(usize),
    #[error("grid of {0}x{0} cells exceeds the {max}x{max} limit", max = MAX_GRID_DIMENSION)]
    GridTooLarge(usize),
    #[error("tick interval must be greater than zero")]
    ZeroTickInterval,
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Configuration for the game, fixed for the lifetime of a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square play area, in canvas units
    pub canvas_size: u32,
    /// Side length of one cell, in canvas units
    pub tile_size: u32,
    /// Delay between two simulation ticks
    pub tick_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_size: 400,
            tile_size: 20,
            tick_interval_ms: 125,
        }
    }
}

impl GameConfig {
    /// Create a configuration for a square grid of `cells` tiles per side
    pub fn with_grid(cells: u32) -> Self {
        let defaults = Self::default();
        Self {
            canvas_size: cells * defaults.tile_size,
            ..defaults
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::with_grid(10)
    }

    /// Number of cells along each axis
    pub fn grid_dimension(&self) -> usize {
        if self.tile_size == 0 {
            return 0;
        }
        (self.canvas_size / self.tile_size) as usize
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Check the startup preconditions the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tile_size == 0 {
            return Err(ConfigError::ZeroTileSize);
        }
        if self.canvas_size % self.tile_size != 0 {
            return Err(ConfigError::UnevenTiling {
                canvas_size: self.canvas_size,
                tile_size: self.tile_size,
            });
        }
        let dimension = self.grid_dimension();
        if dimension < 2 {
            return Err(ConfigError::GridTooSmall(dimension));
        }
        if dimension > MAX_GRID_DIMENSION {
            return Err(ConfigError::GridTooLarge(dimension));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(())
    }

    /// Load a configuration from a JSON file; missing fields fall back to defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
