//! Game configuration: which board to play and where the hole starts.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use solitaire_engine::{Board, Shape, ShapeKind, SolitaireError};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Board selection for one game.
///
/// Loaded from TOML, for example:
///
/// ```toml
/// shape = "european"
/// size = 5
/// hole = [6, 6]
/// ```
///
/// Missing values fall back to the standard board of the shape and its
/// default hole.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board shape.
    shape: ShapeKind,

    /// Arm thickness (English, European) or side length (triangle).
    #[serde(default)]
    size: Option<i32>,

    /// Zero-based `(row, col)` of the starting hole.
    #[serde(default)]
    hole: Option<(i32, i32)>,
}

impl GameConfig {
    /// Creates a configuration for the standard board of `shape`.
    #[instrument]
    pub fn new(shape: ShapeKind) -> Self {
        Self {
            shape,
            size: None,
            hole: None,
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(shape = %config.shape, "Config loaded successfully");
        Ok(config)
    }

    /// Overrides file values with the ones given on the command line.
    #[instrument(skip(self))]
    pub fn merge_cli(
        mut self,
        shape: Option<ShapeKind>,
        size: Option<i32>,
        hole: Option<(i32, i32)>,
    ) -> Self {
        if let Some(shape) = shape {
            self.shape = shape;
        }
        if size.is_some() {
            self.size = size;
        }
        if hole.is_some() {
            self.hole = hole;
        }
        self
    }

    /// Builds the board this configuration describes.
    ///
    /// The default hole is computed from the final size, so a larger
    /// English board still starts with its centre empty.
    #[instrument(skip(self), fields(shape = %self.shape, size = ?self.size, hole = ?self.hole))]
    pub fn build_board(&self) -> Result<Board, ConfigError> {
        let shape = match self.size {
            Some(parameter) => Shape::new(self.shape, parameter)?,
            None => Shape::standard(self.shape),
        };

        let board = match self.hole {
            Some((row, col)) => Board::new(shape, row, col)?,
            None => Board::centered(shape),
        };

        debug!(board_size = board.board_size(), "Board built from config");
        Ok(board)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<SolitaireError> for ConfigError {
    #[track_caller]
    fn from(err: SolitaireError) -> Self {
        Self::new(err.to_string())
    }
}
