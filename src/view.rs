//! Text rendering of solitaire boards.
//!
//! The view reads the board through its accessors each time it draws and
//! never holds on to it.

use solitaire_engine::{Board, CellState, ShapeKind};
use std::io::Write;
use tracing::instrument;

/// Renders boards as rows of `O` (marble), `_` (hole) and blanks.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextView;

impl TextView {
    /// Creates a new text view.
    pub fn new() -> Self {
        Self
    }

    /// Formats the board as a human-readable string.
    ///
    /// Rows are separated by `\n` with trailing spaces stripped and no
    /// newline after the last row. Triangles are indented so the apex is
    /// centred over the base.
    #[instrument(skip_all)]
    pub fn render(&self, board: &Board) -> String {
        let size = board.board_size();
        let triangular = board.shape().kind() == ShapeKind::Triangle;

        board
            .rows()
            .enumerate()
            .map(|(i, cells)| {
                let mut row = if triangular {
                    " ".repeat(size - i - 1)
                } else {
                    String::new()
                };
                for cell in cells {
                    row.push_str(match cell {
                        CellState::Invalid => "  ",
                        CellState::Empty => "_ ",
                        CellState::Marble => "O ",
                    });
                }
                row.trim_end().to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Writes the rendered board to `out`.
    pub fn render_board(&self, out: &mut impl Write, board: &Board) -> std::io::Result<()> {
        out.write_all(self.render(board).as_bytes())
    }

    /// Writes a message to `out` verbatim.
    pub fn render_message(&self, out: &mut impl Write, message: &str) -> std::io::Result<()> {
        out.write_all(message.as_bytes())
    }
}
