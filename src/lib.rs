//! Marble Solitaire library - peg solitaire over a text interface
//!
//! This library wires the pure [`solitaire_engine`] rules to a text
//! session: configuration, rendering and the input loop.
//!
//! # Architecture
//!
//! - **Engine**: board geometry and jump rules (re-exported from `solitaire_engine`)
//! - **Config**: board selection from TOML and command-line flags
//! - **View**: ASCII rendering of a board
//! - **Session**: reads moves, applies them, reports results
//!
//! # Example
//!
//! ```no_run
//! use marble_solitaire::{GameConfig, GameSession, ShapeKind};
//! use std::io;
//!
//! # fn example() -> anyhow::Result<()> {
//! let board = GameConfig::new(ShapeKind::English).build_board()?;
//! let stdin = io::stdin();
//! let mut session = GameSession::new(board, stdin.lock(), io::stdout());
//! let outcome = session.play()?;
//! println!("Finished with {} marbles", outcome.score());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod session;
mod view;

// Crate-level exports - Command line
pub use cli::Cli;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Session
pub use session::{GameSession, Outcome, SessionError};

// Crate-level exports - Rendering
pub use view::TextView;

// Crate-level exports - Engine types
pub use solitaire_engine::{Board, Cell, CellState, Jump, Shape, ShapeKind, SolitaireError};
