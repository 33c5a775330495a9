//! Error types for engine operations.
//!
//! Errors are detected eagerly at the start of the offending call, so a
//! rejected operation never leaves the weight matrix partially updated.

use std::fmt;

/// Result type alias for engine operations.
pub type RbmResult<T> = Result<T, RbmError>;

#[derive(Debug, Clone, PartialEq)]
pub enum RbmError {
    /// Construction was given a non-positive unit count or learning rate.
    InvalidDimension { parameter: &'static str, value: f64 },

    /// A training, inference, or loaded-weights row whose length does not
    /// match the expected width. `row` is the first offending row index.
    ShapeMismatch {
        expected: usize,
        got: usize,
        row: usize,
    },
}

impl fmt::Display for RbmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RbmError::InvalidDimension { parameter, value } => {
                write!(f, "Invalid dimension: '{}' must be positive, got {}", parameter, value)
            }
            RbmError::ShapeMismatch { expected, got, row } => {
                write!(
                    f,
                    "Shape mismatch: row {} has {} entries, expected {}",
                    row, got, expected
                )
            }
        }
    }
}

impl std::error::Error for RbmError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_parameter() {
        let err = RbmError::InvalidDimension { parameter: "num_visible", value: 0.0 };
        assert_eq!(
            err.to_string(),
            "Invalid dimension: 'num_visible' must be positive, got 0"
        );
    }

    #[test]
    fn display_reports_row_and_widths() {
        let err = RbmError::ShapeMismatch { expected: 6, got: 4, row: 2 };
        assert_eq!(err.to_string(), "Shape mismatch: row 2 has 4 entries, expected 6");
    }
}
