//! Error types for the solitaire engine.

use crate::action::Jump;
use crate::shape::ShapeKind;

/// Error raised by board construction, queries or jumps.
///
/// Construction errors are fatal to the board being built. Query and jump
/// errors leave the board untouched, so callers can report and re-prompt.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SolitaireError {
    /// The shape parameter violates the shape's arithmetic constraint.
    #[display("Invalid {kind} board parameter {parameter}")]
    InvalidShapeParameter {
        /// Kind of board requested.
        kind: ShapeKind,
        /// Rejected arm thickness or side length.
        parameter: i32,
    },

    /// The requested hole is off the grid or outside the playable region.
    #[display("Invalid empty cell position ({row},{col})")]
    InvalidHolePosition {
        /// Requested hole row.
        row: i32,
        /// Requested hole column.
        col: i32,
    },

    /// A coordinate falls outside the grid.
    #[display("Cell ({row},{col}) is beyond the dimensions of the board")]
    OutOfBounds {
        /// Offending row.
        row: i32,
        /// Offending column.
        col: i32,
    },

    /// The jump breaks the marble, vacancy or adjacency rules.
    #[display("Illegal move {_0}")]
    IllegalMove(Jump),

    /// A postcondition failed after a jump (debug builds only).
    #[display("Invariant violation: {_0}")]
    InvariantViolation(String),
}

impl SolitaireError {
    /// Returns true for errors after which the board is still usable.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            SolitaireError::OutOfBounds { .. } | SolitaireError::IllegalMove(_)
        )
    }
}

impl std::error::Error for SolitaireError {}
