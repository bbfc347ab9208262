//! Fixed geometry invariant: invalid cells are exactly the shape's cut-outs.

use super::Invariant;
use crate::{Board, CellState};

/// Invariant: a cell is `Invalid` if and only if the shape excludes it.
///
/// Jumps only ever swap `Marble` and `Empty`, so this holds from
/// construction onward.
pub struct FixedGeometryInvariant;

impl Invariant<Board> for FixedGeometryInvariant {
    fn holds(board: &Board) -> bool {
        let shape = board.shape();
        board.rows().enumerate().all(|(row, cells)| {
            cells.iter().enumerate().all(|(col, state)| {
                let excluded = shape.is_non_playable(row as i32, col as i32);
                excluded == (*state == CellState::Invalid)
            })
        })
    }

    fn description() -> &'static str {
        "Invalid cells match the board shape"
    }
}
