//! Contract-based validation for jumps.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P(board, jump)} apply {Q(before, after)}.

use crate::action::Jump;
use crate::board::Board;
use crate::error::SolitaireError;
use crate::invariants::{BoardInvariants, InvariantSet};
use crate::types::CellState;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), SolitaireError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), SolitaireError>;
}

// ─────────────────────────────────────────────────────────────
//  Jump Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: both endpoints lie on the grid.
pub struct EndpointsOnGrid;

impl EndpointsOnGrid {
    /// Returns `OutOfBounds` for the first endpoint off the grid.
    #[instrument(skip(board))]
    pub fn check(jump: &Jump, board: &Board) -> Result<(), SolitaireError> {
        for cell in [jump.from, jump.to] {
            if board.shape().is_out_of_bounds(cell.row, cell.col) {
                return Err(SolitaireError::OutOfBounds {
                    row: cell.row,
                    col: cell.col,
                });
            }
        }
        Ok(())
    }
}

/// Precondition: marble at `from`, marble in between, hole at `to`, and a
/// jump offset the shape allows.
pub struct LegalJump;

impl LegalJump {
    /// Returns `IllegalMove` unless the jump is legal on this board.
    #[instrument(skip(board))]
    pub fn check(jump: &Jump, board: &Board) -> Result<(), SolitaireError> {
        if board.is_legal(jump) {
            Ok(())
        } else {
            Err(SolitaireError::IllegalMove(*jump))
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Jump Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for jumps.
///
/// Preconditions, first failure wins:
/// - Both endpoints on the grid
/// - The jump is legal
///
/// Postconditions:
/// - Board invariants hold
/// - Exactly three cells changed and exactly one marble was removed
pub struct JumpContract;

impl Contract<Board, Jump> for JumpContract {
    fn pre(board: &Board, jump: &Jump) -> Result<(), SolitaireError> {
        EndpointsOnGrid::check(jump, board)?;
        LegalJump::check(jump, board)
    }

    fn post(before: &Board, after: &Board) -> Result<(), SolitaireError> {
        BoardInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            SolitaireError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        if !SingleJumpTransition::holds(before, after) {
            return Err(SolitaireError::InvariantViolation(
                "Postcondition failed: a jump must change exactly three cells".to_string(),
            ));
        }
        Ok(())
    }
}

/// Transition property: two marbles became holes and one hole became a
/// marble, nothing else changed.
pub(crate) struct SingleJumpTransition;

impl SingleJumpTransition {
    #[instrument(skip_all)]
    pub(crate) fn holds(before: &Board, after: &Board) -> bool {
        if before.board_size() != after.board_size() {
            return false;
        }

        let mut emptied = 0;
        let mut filled = 0;
        let mut other = 0;
        for (b, a) in before.rows().flatten().zip(after.rows().flatten()) {
            match (b, a) {
                (x, y) if x == y => {}
                (CellState::Marble, CellState::Empty) => emptied += 1,
                (CellState::Empty, CellState::Marble) => filled += 1,
                _ => other += 1,
            }
        }

        let valid = emptied == 2 && filled == 1 && other == 0;
        if !valid {
            warn!(emptied, filled, other, "Single jump transition violated");
        }
        valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Shape, ShapeKind};

    fn english() -> Board {
        Board::centered(Shape::standard(ShapeKind::English))
    }

    #[test]
    fn test_precondition_legal_jump() {
        let board = english();
        assert!(JumpContract::pre(&board, &Jump::new(3, 1, 3, 3)).is_ok());
    }

    #[test]
    fn test_precondition_off_grid_wins_over_illegal() {
        let board = english();
        let jump = Jump::new(0, 0, 0, -2);
        assert_eq!(
            JumpContract::pre(&board, &jump),
            Err(SolitaireError::OutOfBounds { row: 0, col: -2 })
        );
    }

    #[test]
    fn test_precondition_reports_from_before_to() {
        let board = english();
        assert_eq!(
            EndpointsOnGrid::check(&Jump::new(9, 3, 11, 3), &board),
            Err(SolitaireError::OutOfBounds { row: 9, col: 3 })
        );
    }

    #[test]
    fn test_precondition_illegal_jump() {
        let board = english();
        let jump = Jump::new(3, 0, 3, 3);
        assert_eq!(
            JumpContract::pre(&board, &jump),
            Err(SolitaireError::IllegalMove(jump))
        );
    }

    #[test]
    fn test_postcondition_holds_after_jump() {
        let before = english();
        let mut after = before.clone();
        after.apply_move(3, 5, 3, 3).unwrap();
        assert!(JumpContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_unchanged_board() {
        let before = english();
        let after = before.clone();
        assert!(matches!(
            JumpContract::post(&before, &after),
            Err(SolitaireError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = english();
        let mut after = before.clone();
        after.apply_move(1, 3, 3, 3).unwrap();
        after.set_cell(0, 0, CellState::Empty);
        assert!(JumpContract::post(&before, &after).is_err());
    }
}
