//! Board shapes and their parameters.

use crate::error::SolitaireError;
use crate::geometry::{self, ORTHOGONAL_JUMPS, TRIANGLE_JUMPS};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Kind of board, without its size parameter.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ShapeKind {
    /// Cross-shaped board ('+').
    English,
    /// Octagon-shaped board.
    European,
    /// Triangular board.
    Triangle,
}

/// A validated board shape carrying its size parameter.
///
/// Geometry and jump rules are dispatched on the variant, so every shape
/// shares one engine in [`crate::Board`]. Deserialization goes through
/// [`Shape::new`], so a decoded shape is as valid as a constructed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ShapeSpec", into = "ShapeSpec")]
pub enum Shape {
    /// Cross board with arms `arm_thickness` cells wide.
    English {
        /// Width of each arm; odd and at least 3.
        arm_thickness: i32,
    },
    /// Octagon board with edges `arm_thickness` cells long.
    European {
        /// Length of each straight edge; odd and at least 3.
        arm_thickness: i32,
    },
    /// Triangle board with `side` cells along the bottom row.
    Triangle {
        /// Number of rows; positive.
        side: i32,
    },
}

/// Serialized form of a [`Shape`]: its kind and raw size parameter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ShapeSpec {
    kind: ShapeKind,
    parameter: i32,
}

impl TryFrom<ShapeSpec> for Shape {
    type Error = SolitaireError;

    fn try_from(spec: ShapeSpec) -> Result<Self, Self::Error> {
        Shape::new(spec.kind, spec.parameter)
    }
}

impl From<Shape> for ShapeSpec {
    fn from(shape: Shape) -> Self {
        Self {
            kind: shape.kind(),
            parameter: shape.parameter(),
        }
    }
}

impl Shape {
    /// Arm thickness of the standard English and European boards.
    pub const STANDARD_ARM_THICKNESS: i32 = 3;

    /// Side length of the standard triangular board.
    pub const STANDARD_TRIANGLE_SIDE: i32 = 5;

    /// Largest grid side any shape may occupy.
    ///
    /// Keeps the cell grid at a million cells or fewer.
    pub const MAX_BOARD_SIZE: i32 = 1000;

    /// Creates a shape, validating the parameter for its kind.
    ///
    /// # Errors
    ///
    /// Returns [`SolitaireError::InvalidShapeParameter`] if a cross or
    /// octagon arm thickness is even or below 3, if a triangle side is not
    /// positive, or if the grid side would exceed [`Shape::MAX_BOARD_SIZE`].
    #[instrument]
    pub fn new(kind: ShapeKind, parameter: i32) -> Result<Self, SolitaireError> {
        let size = match kind {
            ShapeKind::English | ShapeKind::European => {
                let odd_and_wide = parameter >= 3 && parameter % 2 == 1;
                geometry::arm_board_size(parameter).filter(|_| odd_and_wide)
            }
            ShapeKind::Triangle => Some(parameter).filter(|&side| side > 0),
        };
        let valid = size.is_some_and(|size| size <= Self::MAX_BOARD_SIZE);

        if !valid {
            debug!("Rejected shape parameter");
            return Err(SolitaireError::InvalidShapeParameter { kind, parameter });
        }

        Ok(match kind {
            ShapeKind::English => Shape::English {
                arm_thickness: parameter,
            },
            ShapeKind::European => Shape::European {
                arm_thickness: parameter,
            },
            ShapeKind::Triangle => Shape::Triangle { side: parameter },
        })
    }

    /// Returns the standard board of the given kind.
    pub fn standard(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::English => Shape::English {
                arm_thickness: Self::STANDARD_ARM_THICKNESS,
            },
            ShapeKind::European => Shape::European {
                arm_thickness: Self::STANDARD_ARM_THICKNESS,
            },
            ShapeKind::Triangle => Shape::Triangle {
                side: Self::STANDARD_TRIANGLE_SIDE,
            },
        }
    }

    /// Returns the kind of this shape.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::English { .. } => ShapeKind::English,
            Shape::European { .. } => ShapeKind::European,
            Shape::Triangle { .. } => ShapeKind::Triangle,
        }
    }

    /// Returns the size parameter (arm thickness or side length).
    pub fn parameter(&self) -> i32 {
        match *self {
            Shape::English { arm_thickness } | Shape::European { arm_thickness } => arm_thickness,
            Shape::Triangle { side } => side,
        }
    }

    /// Side length of the square grid holding this board.
    pub fn board_size(&self) -> i32 {
        match *self {
            Shape::English { arm_thickness } | Shape::European { arm_thickness } => {
                3 * arm_thickness - 2
            }
            Shape::Triangle { side } => side,
        }
    }

    /// Hole position used when none is requested.
    ///
    /// The centre cell for cross and octagon boards, the apex for
    /// triangles.
    pub fn default_hole(&self) -> (i32, i32) {
        match *self {
            Shape::English { arm_thickness } | Shape::European { arm_thickness } => {
                let centre = (arm_thickness - 1) / 2 * 3;
                (centre, centre)
            }
            Shape::Triangle { .. } => (0, 0),
        }
    }

    /// Returns true if `(row, col)` is not on this shape's grid at all.
    pub fn is_out_of_bounds(&self, row: i32, col: i32) -> bool {
        geometry::is_off_grid(row, col, self.board_size())
    }

    /// Returns true if an on-grid `(row, col)` lies outside the playable
    /// region.
    pub fn is_non_playable(&self, row: i32, col: i32) -> bool {
        match *self {
            Shape::English { arm_thickness } => geometry::is_outside_cross(row, col, arm_thickness),
            Shape::European { arm_thickness } => {
                geometry::is_outside_octagon(row, col, arm_thickness)
            }
            Shape::Triangle { .. } => geometry::is_outside_triangle(row, col),
        }
    }

    /// Returns true if `(row, col)` is on the grid and part of the board.
    pub fn is_playable(&self, row: i32, col: i32) -> bool {
        !self.is_out_of_bounds(row, col) && !self.is_non_playable(row, col)
    }

    /// Two-step jump offsets `(d_row, d_col)` this shape allows.
    pub fn jump_directions(&self) -> &'static [(i32, i32)] {
        match self {
            Shape::English { .. } | Shape::European { .. } => &ORTHOGONAL_JUMPS,
            Shape::Triangle { .. } => &TRIANGLE_JUMPS,
        }
    }

    /// Returns true if a jump by `(d_row, d_col)` has the right geometry.
    pub fn allows_jump(&self, d_row: i32, d_col: i32) -> bool {
        self.jump_directions().contains(&(d_row, d_col))
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.kind(), self.parameter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_rejects_even_arm_thickness() {
        assert_eq!(
            Shape::new(ShapeKind::English, 4),
            Err(SolitaireError::InvalidShapeParameter {
                kind: ShapeKind::English,
                parameter: 4
            })
        );
        assert!(Shape::new(ShapeKind::European, 6).is_err());
    }

    #[test]
    fn test_rejects_small_arm_thickness() {
        for p in [-3, -1, 0, 1, 2] {
            assert!(Shape::new(ShapeKind::English, p).is_err(), "arm {p}");
            assert!(Shape::new(ShapeKind::European, p).is_err(), "arm {p}");
        }
    }

    #[test]
    fn test_rejects_unrepresentable_grid() {
        assert!(Shape::new(ShapeKind::English, i32::MAX).is_err());
    }

    #[test]
    fn test_rejects_oversized_grid() {
        // 3 * 333 - 2 = 997 fits, 3 * 335 - 2 = 1003 does not.
        assert!(Shape::new(ShapeKind::English, 333).is_ok());
        assert!(Shape::new(ShapeKind::European, 335).is_err());
        assert!(Shape::new(ShapeKind::English, 99999).is_err());
        assert!(Shape::new(ShapeKind::Triangle, Shape::MAX_BOARD_SIZE).is_ok());
        assert_eq!(
            Shape::new(ShapeKind::Triangle, Shape::MAX_BOARD_SIZE + 1),
            Err(SolitaireError::InvalidShapeParameter {
                kind: ShapeKind::Triangle,
                parameter: 1001
            })
        );
    }

    #[test]
    fn test_deserialize_validates_parameter() {
        let shape: Shape = toml::from_str("kind = \"european\"\nparameter = 5\n").unwrap();
        assert_eq!(shape, Shape::European { arm_thickness: 5 });

        assert!(toml::from_str::<Shape>("kind = \"english\"\nparameter = 4\n").is_err());
        assert!(toml::from_str::<Shape>("kind = \"triangle\"\nparameter = 0\n").is_err());
        assert!(toml::from_str::<Shape>("[English]\narm_thickness = 4\n").is_err());
    }

    #[test]
    fn test_serialize_round_trips_through_new() {
        let text = toml::to_string(&Shape::Triangle { side: 4 }).unwrap();
        assert_eq!(toml::from_str::<Shape>(&text).unwrap(), Shape::Triangle { side: 4 });
    }

    #[test]
    fn test_triangle_accepts_positive_side() {
        assert!(Shape::new(ShapeKind::Triangle, 0).is_err());
        assert!(Shape::new(ShapeKind::Triangle, -5).is_err());
        assert_eq!(
            Shape::new(ShapeKind::Triangle, 1),
            Ok(Shape::Triangle { side: 1 })
        );
        assert_eq!(
            Shape::new(ShapeKind::Triangle, 4),
            Ok(Shape::Triangle { side: 4 })
        );
    }

    #[test]
    fn test_board_size() {
        assert_eq!(Shape::standard(ShapeKind::English).board_size(), 7);
        assert_eq!(Shape::standard(ShapeKind::European).board_size(), 7);
        assert_eq!(Shape::standard(ShapeKind::Triangle).board_size(), 5);
        assert_eq!(Shape::new(ShapeKind::English, 5).unwrap().board_size(), 13);
        assert_eq!(Shape::new(ShapeKind::Triangle, 8).unwrap().board_size(), 8);
    }

    #[test]
    fn test_default_hole_is_playable() {
        for kind in ShapeKind::iter() {
            for p in [3, 5, 7, 9] {
                let shape = Shape::new(kind, p).unwrap();
                let (r, c) = shape.default_hole();
                assert!(shape.is_playable(r, c), "{shape}");
            }
        }
        assert_eq!(Shape::standard(ShapeKind::English).default_hole(), (3, 3));
        assert_eq!(Shape::new(ShapeKind::European, 5).unwrap().default_hole(), (6, 6));
        assert_eq!(Shape::standard(ShapeKind::Triangle).default_hole(), (0, 0));
    }

    #[test]
    fn test_playable_excludes_off_grid() {
        let shape = Shape::standard(ShapeKind::English);
        assert!(!shape.is_playable(-1, 3));
        assert!(!shape.is_playable(3, 7));
        assert!(!shape.is_playable(0, 0));
        assert!(shape.is_playable(0, 3));
    }

    #[test]
    fn test_triangle_allows_one_diagonal() {
        let tri = Shape::standard(ShapeKind::Triangle);
        assert!(tri.allows_jump(2, 2));
        assert!(tri.allows_jump(-2, -2));
        assert!(!tri.allows_jump(2, -2));
        assert!(!tri.allows_jump(-2, 2));

        let cross = Shape::standard(ShapeKind::English);
        assert!(cross.allows_jump(0, 2));
        assert!(cross.allows_jump(-2, 0));
        assert!(!cross.allows_jump(2, 2));
        assert!(!cross.allows_jump(0, 4));
        assert!(!cross.allows_jump(1, 0));
    }

    #[test]
    fn test_kind_parses_case_insensitively() {
        assert_eq!(ShapeKind::from_str("english"), Ok(ShapeKind::English));
        assert_eq!(ShapeKind::from_str("European"), Ok(ShapeKind::European));
        assert_eq!(ShapeKind::from_str("TRIANGLE"), Ok(ShapeKind::Triangle));
        assert!(ShapeKind::from_str("hexagon").is_err());
        assert_eq!(ShapeKind::Triangle.to_string(), "triangle");
    }
}
