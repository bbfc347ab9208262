//! Board geometry for peg solitaire.
//!
//! This module contains pure functions classifying grid cells per board
//! shape. Geometry is separated from board storage so the engine can
//! swap predicates per shape while keeping one jump engine.

pub mod cross;
pub mod octagon;
pub mod triangle;

pub use cross::is_outside_cross;
pub use octagon::is_outside_octagon;
pub use triangle::is_outside_triangle;

/// Returns true if `(row, col)` is not on a `size` x `size` grid at all.
pub fn is_off_grid(row: i32, col: i32, size: i32) -> bool {
    row < 0 || row >= size || col < 0 || col >= size
}

/// Grid side length for cross and octagon boards.
///
/// Returns `None` if the size does not fit in an `i32`.
pub fn arm_board_size(arm_thickness: i32) -> Option<i32> {
    arm_thickness.checked_mul(3)?.checked_sub(2)
}

/// Orthogonal two-step jump offsets: left, right, up, down.
pub const ORTHOGONAL_JUMPS: [(i32, i32); 4] = [(0, -2), (0, 2), (-2, 0), (2, 0)];

/// Jump offsets on a triangular board.
///
/// Only the top-left/bottom-right diagonal is added. The anti-diagonal
/// does not correspond to a lattice neighbour once the triangle is packed
/// into the lower-left half of a square grid.
pub const TRIANGLE_JUMPS: [(i32, i32); 6] = [(0, -2), (0, 2), (-2, 0), (2, 0), (-2, -2), (2, 2)];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_off_grid_edges() {
        assert!(!is_off_grid(0, 0, 7));
        assert!(!is_off_grid(6, 6, 7));
        assert!(is_off_grid(-1, 0, 7));
        assert!(is_off_grid(0, -1, 7));
        assert!(is_off_grid(7, 0, 7));
        assert!(is_off_grid(0, 7, 7));
    }

    #[test]
    fn test_arm_board_size() {
        assert_eq!(arm_board_size(3), Some(7));
        assert_eq!(arm_board_size(5), Some(13));
        assert_eq!(arm_board_size(i32::MAX), None);
    }

    #[test]
    fn test_triangle_jumps_extend_orthogonal() {
        assert_eq!(&TRIANGLE_JUMPS[..4], &ORTHOGONAL_JUMPS[..]);
        assert!(!TRIANGLE_JUMPS.contains(&(2, -2)));
        assert!(!TRIANGLE_JUMPS.contains(&(-2, 2)));
    }
}
