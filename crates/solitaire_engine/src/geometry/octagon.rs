//! Octagon-shaped (European) board geometry.

/// Checks if a cell lies in one of the four triangular corner cuts of an
/// octagon.
///
/// The cuts are steeper than the square corners of a cross: the top row
/// keeps `arm_thickness` cells and every row toward the middle gains one
/// cell on each side.
pub fn is_outside_octagon(row: i32, col: i32, arm_thickness: i32) -> bool {
    let a = arm_thickness;
    let top = row <= a - 2;
    let bottom = row >= 2 * a - 1;

    (top && col <= a - row - 2)
        || (bottom && col >= 5 * a - row - 4)
        || (top && col >= 2 * a + row - 1)
        || (bottom && col <= row - 2 * a + 1)
}
