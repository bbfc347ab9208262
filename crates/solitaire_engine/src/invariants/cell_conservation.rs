//! Cell conservation invariant: the grid never gains or loses cells.

use super::Invariant;
use crate::{Board, CellState};

/// Invariant: marbles, holes and invalid cells add up to `size * size`.
pub struct CellConservationInvariant;

impl Invariant<Board> for CellConservationInvariant {
    fn holds(board: &Board) -> bool {
        let size = board.board_size();
        let total = board.count(CellState::Marble)
            + board.count(CellState::Empty)
            + board.count(CellState::Invalid);
        total == size * size && board.rows().count() == size
    }

    fn description() -> &'static str {
        "Marble, empty and invalid cells fill the whole grid"
    }
}
