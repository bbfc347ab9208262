//! Tests for loading game configuration from TOML files.

use clap::Parser;
use marble_solitaire::{CellState, Cli, GameConfig, ShapeKind};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Temp file");
    file.write_all(content.as_bytes()).expect("Write config");
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config("shape = \"european\"\nsize = 5\nhole = [0, 6]\n");
    let config = GameConfig::from_file(file.path()).expect("Valid config");

    assert_eq!(*config.shape(), ShapeKind::European);
    let board = config.build_board().expect("Valid board");
    assert_eq!(board.board_size(), 13);
    assert_eq!(board.cell_at(0, 6), Ok(CellState::Empty));
}

#[test]
fn test_missing_file_is_config_error() {
    let err = GameConfig::from_file("/nonexistent/solitaire.toml").unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_config_error() {
    let file = write_config("shape = \"hexagon\"\n");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_command_line_overrides_file() {
    let file = write_config("shape = \"english\"\nsize = 5\n");
    let path = file.path().to_str().expect("UTF-8 path");
    let cli = Cli::try_parse_from(["marble_solitaire", "--config", path, "--size", "3"])
        .expect("Valid arguments");

    let board = cli
        .game_config()
        .expect("Valid config")
        .build_board()
        .expect("Valid board");
    assert_eq!(board.board_size(), 7);
    assert_eq!(board.remaining_marble_count(), 32);
}
