//! Error types for polynomial regression
//!
//! This module defines the failure modes encountered when parsing input, fitting a
//! polynomial, or automatically selecting its degree, along with a convenient `Result` alias.

/// Errors that can occur during polynomial regression.
///
/// No variant carries a partial result; any failure aborts the fit.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A line of raw input could not be read as an `x,y` point.
    #[error("Invalid point on line {line} (`{content}`): {reason}")]
    Parse {
        /// 1-based line number of the offending line
        line: usize,
        /// The offending line, trimmed
        content: String,
        /// What was wrong with it
        reason: String,
    },

    /// The normal-equations matrix (XᵀX) cannot be inverted at the requested degree.
    ///
    /// Usually, degree is too high, or the data has too many repeated x-values.
    #[error(
        "Normal equations (X^T X) are singular; the data may be insufficient, collinear, or overfitted. [n: {n}, k: {k}]"
    )]
    SingularMatrix {
        /// Number of data points.
        ///
        /// When raised by [`crate::linalg::SquareMatrix::solve`] itself, there are no data points
        /// and this is the matrix size.
        n: usize,
        /// Number of coefficients (the matrix size)
        k: usize,
    },

    /// Not enough points to fit the requested model.
    ///
    /// An explicit fit needs `degree + 1` points; automatic selection needs 2.
    #[error("Not enough data: {points} point(s) given, at least {required} required")]
    InsufficientData {
        /// Number of points supplied
        points: usize,
        /// Minimum number of points needed
        required: usize,
    },

    /// Automatic selection found no usable degree
    ///
    /// Every candidate degree produced a singular system. Try choosing a degree manually to test
    #[error("None of the candidate degrees produced a usable model")]
    NoModelFound,

    /// An explicit degree was outside `1..=MAX_DEGREE`.
    #[error("Polynomial degree `{0}` is out of range (1..={max})", max = crate::MAX_DEGREE)]
    InvalidDegree(usize),

    /// The sizes of a linear system do not agree.
    #[error("Dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Size implied by the matrix
        expected: usize,
        /// Size of the offending operand
        found: usize,
    },
}

/// Result type for polynomial regression
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_human_readable() {
        let e = Error::Parse {
            line: 3,
            content: "1,abc".to_string(),
            reason: "y is not a number".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Invalid point on line 3 (`1,abc`): y is not a number"
        );

        let e = Error::InsufficientData {
            points: 1,
            required: 2,
        };
        assert_eq!(
            e.to_string(),
            "Not enough data: 1 point(s) given, at least 2 required"
        );

        assert_eq!(
            Error::InvalidDegree(21).to_string(),
            "Polynomial degree `21` is out of range (1..=20)"
        );
    }
}
