//! First-class jump actions for peg solitaire.
//!
//! A jump is a request, not a side effect: it can be validated against a
//! board before it is applied, logged, and reported back on failure.

use serde::{Deserialize, Serialize};

/// A grid coordinate, zero-based.
///
/// Coordinates are signed so that off-grid requests stay representable
/// and can be rejected with a proper error.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("({row},{col})")]
pub struct Cell {
    /// Row index, top to bottom.
    pub row: i32,
    /// Column index, left to right.
    pub col: i32,
}

impl Cell {
    /// Creates a new cell coordinate.
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns this cell moved by `(d_row, d_col)`, or `None` on overflow.
    pub fn offset(self, d_row: i32, d_col: i32) -> Option<Self> {
        Some(Self::new(
            self.row.checked_add(d_row)?,
            self.col.checked_add(d_col)?,
        ))
    }
}

/// A request to jump the marble at `from` over a neighbour into `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Jump {
    /// Cell the marble leaves.
    pub from: Cell,
    /// Cell the marble lands in.
    pub to: Cell,
}

impl Jump {
    /// Creates a jump from raw coordinates.
    pub fn new(from_row: i32, from_col: i32, to_row: i32, to_col: i32) -> Self {
        Self {
            from: Cell::new(from_row, from_col),
            to: Cell::new(to_row, to_col),
        }
    }

    /// Creates a jump from `from` by the offset `(d_row, d_col)`.
    ///
    /// Returns `None` if the landing cell is not representable.
    pub fn by_offset(from: Cell, d_row: i32, d_col: i32) -> Option<Self> {
        Some(Self {
            from,
            to: from.offset(d_row, d_col)?,
        })
    }

    /// Returns `(to.row - from.row, to.col - from.col)`, or `None` if the
    /// distance does not fit in an `i32`.
    pub fn delta(&self) -> Option<(i32, i32)> {
        Some((
            self.to.row.checked_sub(self.from.row)?,
            self.to.col.checked_sub(self.from.col)?,
        ))
    }

    /// The cell jumped over.
    ///
    /// Only meaningful for two-step jumps, but defined for any pair. The
    /// average always lies between the endpoints, so it never overflows.
    pub fn midpoint(&self) -> Cell {
        Cell::new(
            average(self.from.row, self.to.row),
            average(self.from.col, self.to.col),
        )
    }
}

/// Mean of two coordinates, rounded toward zero.
fn average(a: i32, b: i32) -> i32 {
    ((i64::from(a) + i64::from(b)) / 2) as i32
}

impl std::fmt::Display for Jump {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
