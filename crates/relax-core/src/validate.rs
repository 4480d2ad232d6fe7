//! Input validation and conditioning warnings.
//!
//! The checks here run once, before a system reaches the solvers. The
//! solver loops themselves do not re-verify preconditions; invoking them
//! with unvalidated input is outside the documented contract.

use nalgebra::{DMatrix, DVector};

use crate::error::{Error, Result};
use crate::numeric::infinity_norm;

/// Diagonal entries below this magnitude are rejected as effectively zero.
pub const DIAGONAL_EPS: f64 = 1e-15;

/// Upper bound on the iteration cap accepted by [`check_parameters`].
pub const MAX_ITERATION_CAP: usize = 10_000;

/// Infinity-norm threshold for the "well conditioned" heuristic.
const CONDITIONING_THRESHOLD: f64 = 100.0;

/// Outcome of validating a full system: the hard checks passed, and any
/// advisory warnings about conditioning are collected here.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// Infinity norm of the matrix, the conditioning heuristic's input.
    pub infinity_norm: f64,
    /// True when the infinity norm is below the conditioning threshold.
    pub well_conditioned: bool,
    /// Advisory warnings; never block a solve.
    pub warnings: Vec<String>,
}

/// Check that the matrix is square and non-empty.
pub fn check_square(a: &DMatrix<f64>) -> Result<()> {
    if a.nrows() == 0 {
        return Err(Error::EmptySystem);
    }
    if a.nrows() != a.ncols() {
        return Err(Error::NotSquare {
            rows: a.nrows(),
            cols: a.ncols(),
        });
    }
    Ok(())
}

/// Check that every diagonal entry is usable as a divisor.
pub fn check_diagonal(a: &DMatrix<f64>) -> Result<()> {
    for i in 0..a.nrows() {
        if a[(i, i)].abs() < DIAGONAL_EPS {
            return Err(Error::ZeroDiagonal { row: i });
        }
    }
    Ok(())
}

/// Check that the right-hand side matches the matrix dimension.
pub fn check_rhs(a: &DMatrix<f64>, b: &DVector<f64>) -> Result<()> {
    if b.len() != a.nrows() {
        return Err(Error::DimensionMismatch {
            expected: a.nrows(),
            actual: b.len(),
        });
    }
    Ok(())
}

/// Check the stopping parameters: tolerance in (0, 1), cap in 1..=10_000.
pub fn check_parameters(tolerance: f64, max_iterations: usize) -> Result<()> {
    if !(tolerance > 0.0 && tolerance < 1.0) {
        return Err(Error::InvalidTolerance(tolerance));
    }
    if max_iterations < 1 || max_iterations > MAX_ITERATION_CAP {
        return Err(Error::InvalidIterationCap {
            actual: max_iterations,
            max: MAX_ITERATION_CAP,
        });
    }
    Ok(())
}

/// Run every precondition check and gather conditioning warnings.
pub fn validate_system(
    a: &DMatrix<f64>,
    b: &DVector<f64>,
    tolerance: f64,
    max_iterations: usize,
) -> Result<ValidationReport> {
    check_square(a)?;
    check_diagonal(a)?;
    check_rhs(a, b)?;
    check_parameters(tolerance, max_iterations)?;

    let norm = infinity_norm(a);
    let mut warnings = Vec::new();

    let max_entry = a.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
    if max_entry > 1000.0 {
        warnings.push(
            "Matrix contains very large entries; results may be numerically unstable".to_string(),
        );
    }

    let min_entry = a
        .iter()
        .filter(|v| **v != 0.0)
        .fold(f64::MAX, |m, v| m.min(v.abs()));
    if min_entry < 1e-3 && min_entry > 0.0 {
        warnings.push("Matrix contains very small entries; precision may suffer".to_string());
    }

    if norm >= CONDITIONING_THRESHOLD {
        warnings.push(format!(
            "Infinity norm {norm:.1} suggests poor conditioning (heuristic threshold {CONDITIONING_THRESHOLD})"
        ));
    }

    Ok(ValidationReport {
        infinity_norm: norm,
        well_conditioned: norm < CONDITIONING_THRESHOLD,
        warnings,
    })
}
