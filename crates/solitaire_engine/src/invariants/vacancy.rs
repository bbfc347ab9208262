//! Vacancy invariant: a board always has at least one hole.

use super::Invariant;
use crate::{Board, CellState};

/// Invariant: at least one playable cell is `Empty`.
///
/// Boards start with one hole and every jump leaves its origin empty.
pub struct VacancyInvariant;

impl Invariant<Board> for VacancyInvariant {
    fn holds(board: &Board) -> bool {
        board.count(CellState::Empty) >= 1
    }

    fn description() -> &'static str {
        "At least one playable cell is empty"
    }
}
