//! Error types for system construction and validation.

use thiserror::Error;

/// Errors raised when a system or configuration violates the solver
/// preconditions.
///
/// Reaching the iteration cap without meeting tolerance is *not* an error;
/// it is reported through `SolverResult::converged`.
#[derive(Debug, Error)]
pub enum Error {
    /// The coefficient matrix has no rows.
    #[error("Coefficient matrix is empty")]
    EmptySystem,

    /// The coefficient matrix is not square.
    #[error("Coefficient matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// A diagonal entry is zero or too close to zero to divide by.
    #[error("Diagonal entry A[{row}][{row}] is zero or near zero")]
    ZeroDiagonal { row: usize },

    /// The right-hand side length does not match the matrix dimension.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Tolerance outside the accepted open interval (0, 1).
    #[error("Tolerance must lie in (0, 1), got {0}")]
    InvalidTolerance(f64),

    /// Iteration cap outside the accepted range.
    #[error("Iteration cap must lie in 1..={max}, got {actual}")]
    InvalidIterationCap { actual: usize, max: usize },

    /// Initial guess length does not match the matrix dimension.
    #[error("Initial guess length {actual} does not match system dimension {expected}")]
    InitialGuessLength { expected: usize, actual: usize },
}

/// Result type for fallible operations in this workspace.
pub type Result<T> = std::result::Result<T, Error>;
