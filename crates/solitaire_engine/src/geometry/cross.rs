//! Cross-shaped (English) board geometry.

/// Checks if a cell lies in one of the four cut-away corners of a cross.
///
/// Each corner is an `(arm_thickness - 1)` square, so the arms are
/// `arm_thickness` cells wide.
pub fn is_outside_cross(row: i32, col: i32, arm_thickness: i32) -> bool {
    let near = arm_thickness - 2;
    let far = 2 * arm_thickness - 1;
    (row <= near || row >= far) && (col <= near || col >= far)
}
