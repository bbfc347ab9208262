//! Core domain types for peg solitaire.

use serde::{Deserialize, Serialize};

/// State of a single cell in the board grid.
///
/// `Invalid` cells are allocated in the grid but are not part of the
/// playable region. They never become `Marble` or `Empty`, and playable
/// cells never become `Invalid`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum CellState {
    /// A marble occupies the cell.
    Marble,
    /// The cell is playable but vacant.
    Empty,
    /// The cell is outside the playable region.
    Invalid,
}

impl CellState {
    /// Returns true for cells that belong to the playable region.
    pub fn is_playable(self) -> bool {
        !matches!(self, CellState::Invalid)
    }
}
