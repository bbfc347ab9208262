//! Triangular board geometry.

/// Checks if a cell lies above the main diagonal.
///
/// The triangle is packed into the lower-left half of its grid, so row
/// `r` holds `r + 1` playable cells.
pub fn is_outside_triangle(row: i32, col: i32) -> bool {
    col > row
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagonal_is_inside() {
        for i in 0..5 {
            assert!(!is_outside_triangle(i, i));
        }
    }

    #[test]
    fn test_upper_right_is_outside() {
        assert!(is_outside_triangle(0, 1));
        assert!(is_outside_triangle(2, 4));
        assert!(!is_outside_triangle(4, 0));
    }

    #[test]
    fn test_row_lengths() {
        for row in 0..6 {
            let len = (0..6).filter(|&c| !is_outside_triangle(row, c)).count();
            assert_eq!(len, row as usize + 1);
        }
    }
}
