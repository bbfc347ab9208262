//! Board state and the jump engine shared by every shape.

use crate::action::{Cell, Jump};
use crate::contracts::{Contract, JumpContract};
use crate::error::SolitaireError;
use crate::shape::{Shape, ShapeKind};
use crate::types::CellState;
use tracing::{debug, instrument, trace};

/// A peg solitaire board: a square grid of [`CellState`] for one shape.
///
/// The board is built once, then mutated in place by [`Board::apply`].
/// Cells never appear or disappear; jumps only swap `Marble` and `Empty`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    shape: Shape,
    size: usize,
    /// Cells in row-major order.
    cells: Vec<CellState>,
}

impl Board {
    /// Creates a board with the hole at `(hole_row, hole_col)`.
    ///
    /// # Errors
    ///
    /// Returns [`SolitaireError::InvalidHolePosition`] if the hole is off
    /// the grid or outside the playable region.
    #[instrument]
    pub fn new(shape: Shape, hole_row: i32, hole_col: i32) -> Result<Self, SolitaireError> {
        if !shape.is_playable(hole_row, hole_col) {
            debug!("Rejected hole position");
            return Err(SolitaireError::InvalidHolePosition {
                row: hole_row,
                col: hole_col,
            });
        }
        Ok(Self::fill(shape, Cell::new(hole_row, hole_col)))
    }

    /// Validates the shape parameter, then creates the board.
    ///
    /// # Errors
    ///
    /// Returns [`SolitaireError::InvalidShapeParameter`] before checking the
    /// hole, then [`SolitaireError::InvalidHolePosition`].
    #[instrument]
    pub fn build(
        kind: ShapeKind,
        parameter: i32,
        hole_row: i32,
        hole_col: i32,
    ) -> Result<Self, SolitaireError> {
        let shape = Shape::new(kind, parameter)?;
        Self::new(shape, hole_row, hole_col)
    }

    /// Creates a board with the hole at the shape's default position.
    #[instrument]
    pub fn centered(shape: Shape) -> Self {
        let (row, col) = shape.default_hole();
        Self::fill(shape, Cell::new(row, col))
    }

    fn fill(shape: Shape, hole: Cell) -> Self {
        let size = shape.board_size();
        let cells = (0..size)
            .flat_map(|row| (0..size).map(move |col| (row, col)))
            .map(|(row, col)| {
                if shape.is_non_playable(row, col) {
                    CellState::Invalid
                } else if hole == Cell::new(row, col) {
                    CellState::Empty
                } else {
                    CellState::Marble
                }
            })
            .collect();

        let board = Self {
            shape,
            size: size as usize,
            cells,
        };
        debug!(%shape, %hole, marbles = board.remaining_marble_count(), "Board created");
        board
    }

    /// Returns the shape of this board.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Side length of the grid.
    pub fn board_size(&self) -> usize {
        self.size
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        if self.shape.is_out_of_bounds(cell.row, cell.col) {
            None
        } else {
            Some(cell.row as usize * self.size + cell.col as usize)
        }
    }

    fn state(&self, cell: Cell) -> Option<CellState> {
        self.index(cell).map(|i| self.cells[i])
    }

    /// Returns the state of the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`SolitaireError::OutOfBounds`] if the cell is off the grid.
    pub fn cell_at(&self, row: i32, col: i32) -> Result<CellState, SolitaireError> {
        self.state(Cell::new(row, col))
            .ok_or(SolitaireError::OutOfBounds { row, col })
    }

    /// Iterates the grid row by row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks(self.size)
    }

    /// Number of cells in the given state.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }

    /// Number of marbles left on the board; doubles as the score.
    pub fn remaining_marble_count(&self) -> usize {
        self.count(CellState::Marble)
    }

    /// Checks whether a jump could be applied right now.
    ///
    /// Off-grid endpoints are simply not legal here; [`Board::apply`]
    /// distinguishes them as `OutOfBounds`.
    pub fn is_legal(&self, jump: &Jump) -> bool {
        if self.index(jump.from).is_none() || self.index(jump.to).is_none() {
            return false;
        }

        match jump.delta() {
            Some((d_row, d_col)) if self.shape.allows_jump(d_row, d_col) => {}
            _ => return false,
        }

        self.state(jump.from) == Some(CellState::Marble)
            && self.state(jump.midpoint()) == Some(CellState::Marble)
            && self.state(jump.to) == Some(CellState::Empty)
    }

    fn jumps_from(&self, from: Cell) -> impl Iterator<Item = Jump> + '_ {
        self.shape
            .jump_directions()
            .iter()
            .filter_map(move |&(d_row, d_col)| Jump::by_offset(from, d_row, d_col))
            .filter(move |jump| self.is_legal(jump))
    }

    fn marble_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, state)| **state == CellState::Marble)
            .map(move |(i, _)| Cell::new((i / size) as i32, (i % size) as i32))
    }

    /// Every legal jump, ordered by origin cell in row-major order.
    #[instrument(skip(self))]
    pub fn legal_moves(&self) -> Vec<Jump> {
        self.marble_cells()
            .flat_map(move |from| self.jumps_from(from))
            .collect()
    }

    /// Returns true once no marble has a legal jump left.
    #[instrument(skip(self))]
    pub fn is_game_over(&self) -> bool {
        let over = !self
            .marble_cells()
            .any(|from| self.jumps_from(from).next().is_some());
        trace!(over, "Scanned for remaining jumps");
        over
    }

    /// Applies the jump `(from_row, from_col) -> (to_row, to_col)`.
    ///
    /// # Errors
    ///
    /// See [`Board::apply`].
    pub fn apply_move(
        &mut self,
        from_row: i32,
        from_col: i32,
        to_row: i32,
        to_col: i32,
    ) -> Result<(), SolitaireError> {
        self.apply(Jump::new(from_row, from_col, to_row, to_col))
    }

    /// Applies a jump atomically: all three cells change or none do.
    ///
    /// # Errors
    ///
    /// Returns [`SolitaireError::OutOfBounds`] if either endpoint is off the
    /// grid, otherwise [`SolitaireError::IllegalMove`] if the jump breaks
    /// the rules. The board is unchanged on error.
    #[instrument(skip(self, jump), fields(jump = %jump))]
    pub fn apply(&mut self, jump: Jump) -> Result<(), SolitaireError> {
        JumpContract::pre(self, &jump)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.set(jump.from, CellState::Empty);
        self.set(jump.midpoint(), CellState::Empty);
        self.set(jump.to, CellState::Marble);

        #[cfg(debug_assertions)]
        self.verify_jump(before)?;

        debug!(marbles = self.remaining_marble_count(), "Jump applied");
        Ok(())
    }

    /// Checks jump postconditions, rolling back to `before` on failure.
    #[cfg(debug_assertions)]
    fn verify_jump(&mut self, before: Board) -> Result<(), SolitaireError> {
        if let Err(e) = JumpContract::post(&before, self) {
            *self = before;
            return Err(e);
        }
        Ok(())
    }

    fn set(&mut self, cell: Cell, state: CellState) {
        if let Some(i) = self.index(cell) {
            self.cells[i] = state;
        }
    }

    #[cfg(test)]
    pub(crate) fn set_cell(&mut self, row: i32, col: i32, state: CellState) {
        self.set(Cell::new(row, col), state);
    }
}
