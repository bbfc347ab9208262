//! Pure peg solitaire rules.
//!
//! This crate holds the board-state and move-validation engine shared by
//! every board shape. It performs no I/O and installs no logging
//! subscriber; callers drive it through [`Board`].
//!
//! # Architecture
//!
//! - **Geometry**: pure predicates deciding which grid cells belong to a shape
//! - **Shape**: tagged variant over English, European and triangular boards
//! - **Board**: the grid of [`CellState`] plus the jump engine
//! - **Contracts/Invariants**: pre- and postconditions checked around jumps
//!
//! # Example
//!
//! ```
//! use solitaire_engine::{Board, CellState, Shape, ShapeKind};
//!
//! # fn example() -> Result<(), solitaire_engine::SolitaireError> {
//! let mut board = Board::centered(Shape::standard(ShapeKind::English));
//! assert_eq!(board.remaining_marble_count(), 32);
//!
//! board.apply_move(3, 1, 3, 3)?;
//! assert_eq!(board.cell_at(3, 3)?, CellState::Marble);
//! # Ok(())
//! # }
//! ```
//!
//! A [`Board`] has no internal synchronization. Mutation goes through
//! `&mut self`, so sharing one across threads needs external locking.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod contracts;
mod error;
pub mod geometry;
pub mod invariants;
mod shape;
mod types;

pub use action::{Cell, Jump};
pub use board::Board;
pub use contracts::{Contract, EndpointsOnGrid, JumpContract, LegalJump};
pub use error::SolitaireError;
pub use invariants::{BoardInvariants, Invariant, InvariantSet, InvariantViolation};
pub use shape::{Shape, ShapeKind};
pub use types::CellState;
