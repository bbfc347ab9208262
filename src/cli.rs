//! Command-line interface for marble_solitaire.

use crate::config::{ConfigError, GameConfig};
use clap::Parser;
use solitaire_engine::ShapeKind;
use std::path::PathBuf;
use tracing::instrument;

/// Marble Solitaire - peg solitaire in the terminal
#[derive(Parser, Debug)]
#[command(name = "marble_solitaire")]
#[command(about = "Play peg solitaire on English, European or triangular boards", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board shape: english, european or triangle
    pub shape: Option<ShapeKind>,

    /// Arm thickness (english, european) or side length (triangle)
    #[arg(short, long, allow_negative_numbers = true)]
    pub size: Option<i32>,

    /// Zero-based row and column of the starting hole
    #[arg(long, num_args = 2, value_names = ["ROW", "COL"], allow_negative_numbers = true)]
    pub hole: Option<Vec<i32>>,

    /// TOML file with shape, size and hole; command-line values win
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Resolves the game configuration from the config file and flags.
    #[instrument(skip(self))]
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        let hole = match self.hole.as_deref() {
            Some(&[row, col]) => Some((row, col)),
            _ => None,
        };

        let base = match (&self.config, self.shape) {
            (Some(path), _) => GameConfig::from_file(path)?,
            (None, Some(shape)) => GameConfig::new(shape),
            (None, None) => {
                return Err(ConfigError::new(
                    "A board shape is required: english, european or triangle",
                ));
            }
        };

        Ok(base.merge_cli(self.shape, self.size, hole))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shape_only() {
        let cli = Cli::try_parse_from(["marble_solitaire", "triangle"]).unwrap();
        let config = cli.game_config().unwrap();
        assert_eq!(*config.shape(), ShapeKind::Triangle);
        assert_eq!(*config.size(), None);
    }

    #[test]
    fn test_parse_size_and_hole() {
        let cli = Cli::try_parse_from([
            "marble_solitaire",
            "european",
            "--size",
            "5",
            "--hole",
            "6",
            "2",
        ])
        .unwrap();
        let config = cli.game_config().unwrap();
        assert_eq!(*config.size(), Some(5));
        assert_eq!(*config.hole(), Some((6, 2)));
    }

    #[test]
    fn test_negative_size_reaches_engine() {
        let cli = Cli::try_parse_from(["marble_solitaire", "english", "-s", "-3"]).unwrap();
        assert!(cli.game_config().unwrap().build_board().is_err());
    }

    #[test]
    fn test_unknown_shape_rejected() {
        assert!(Cli::try_parse_from(["marble_solitaire", "hexagon"]).is_err());
    }

    #[test]
    fn test_hole_needs_two_values() {
        assert!(Cli::try_parse_from(["marble_solitaire", "english", "--hole", "3"]).is_err());
    }

    #[test]
    fn test_shape_required_without_config() {
        let cli = Cli::try_parse_from(["marble_solitaire"]).unwrap();
        assert!(cli.game_config().is_err());
    }
}
