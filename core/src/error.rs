//! Errors

use crate::base::Float;
use std::error::Error;
use std::fmt;

/// Errors raised when a geometric value is constructed or used outside of its
/// contract.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GeometryError {
    /// The matrix has no inverse.
    SingularMatrix {
        /// Determinant of the rejected matrix.
        determinant: Float,
    },

    /// Matrix element access outside of `[0, 3] x [0, 3]`.
    IndexOutOfBounds { row: usize, col: usize },

    /// A ray was given `t_min > t_max` or a NaN bound.
    InvalidInterval { t_min: Float, t_max: Float },

    /// Radius must be positive and finite.
    InvalidRadius(Float),

    /// The vectors given cannot span an orthonormal basis.
    DegenerateBasis,
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SingularMatrix { determinant } => {
                write!(f, "singular matrix (determinant = {determinant})")
            }
            Self::IndexOutOfBounds { row, col } => {
                write!(f, "matrix index ({row}, {col}) not in [0, 3]")
            }
            Self::InvalidInterval { t_min, t_max } => {
                write!(f, "invalid ray interval [{t_min}, {t_max})")
            }
            Self::InvalidRadius(r) => write!(f, "invalid radius {r}"),
            Self::DegenerateBasis => write!(f, "vectors do not span a basis"),
        }
    }
}

impl Error for GeometryError {}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_offending_values() {
        let e = GeometryError::IndexOutOfBounds { row: 4, col: 1 };
        assert_eq!(e.to_string(), "matrix index (4, 1) not in [0, 3]");

        let e = GeometryError::InvalidInterval {
            t_min: 2.0,
            t_max: 1.0,
        };
        assert_eq!(e.to_string(), "invalid ray interval [2, 1)");
    }
}
