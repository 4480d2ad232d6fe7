//! Linear system and solver configuration types.

use nalgebra::{DMatrix, DVector};

use crate::error::{Error, Result};
use crate::validate;

/// A validated square linear system `Ax = b`.
///
/// Immutable after construction: the solvers and the analysis layer only
/// ever borrow it. Construction enforces the solver preconditions (square
/// matrix, usable diagonal, compatible right-hand side); once built, the
/// solvers do not re-check them.
#[derive(Debug, Clone)]
pub struct LinearSystem {
    a: DMatrix<f64>,
    b: DVector<f64>,
}

impl LinearSystem {
    /// Build a system from its coefficient matrix and right-hand side.
    pub fn new(a: DMatrix<f64>, b: DVector<f64>) -> Result<Self> {
        validate::check_square(&a)?;
        validate::check_diagonal(&a)?;
        validate::check_rhs(&a, &b)?;
        Ok(Self { a, b })
    }

    /// Build a system from row-major literals.
    ///
    /// Convenience for fixtures and tests; same validation as [`Self::new`].
    pub fn from_rows(rows: &[&[f64]], b: &[f64]) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.len());
        let a = DMatrix::from_fn(nrows, ncols, |i, j| rows[i][j]);
        Self::new(a, DVector::from_row_slice(b))
    }

    /// System dimension n (the matrix is n x n).
    pub fn dim(&self) -> usize {
        self.b.len()
    }

    /// Coefficient matrix A.
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.a
    }

    /// Right-hand side vector b.
    pub fn rhs(&self) -> &DVector<f64> {
        &self.b
    }
}

/// Configuration for a single solver run.
///
/// `tolerance` is the relative-error stopping threshold, `max_iterations`
/// the only bound on runtime (there is no cancellation mechanism), and
/// `initial_guess` defaults to the zero vector when absent.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Relative-error stopping threshold, in (0, 1).
    pub tolerance: f64,
    /// Maximum number of full sweeps.
    pub max_iterations: usize,
    /// Starting iterate; zero vector if `None`.
    pub initial_guess: Option<DVector<f64>>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-4,
            max_iterations: 100,
            initial_guess: None,
        }
    }
}

impl SolverConfig {
    /// Config with the given tolerance and iteration cap, zero initial guess.
    pub fn new(tolerance: f64, max_iterations: usize) -> Self {
        Self {
            tolerance,
            max_iterations,
            initial_guess: None,
        }
    }

    /// Resolve the starting iterate for a system of dimension `n`.
    ///
    /// Returns an error if an explicit guess has the wrong length.
    pub fn resolve_initial_guess(&self, n: usize) -> Result<DVector<f64>> {
        match &self.initial_guess {
            None => Ok(DVector::zeros(n)),
            Some(x0) if x0.len() == n => Ok(x0.clone()),
            Some(x0) => Err(Error::InitialGuessLength {
                expected: n,
                actual: x0.len(),
            }),
        }
    }
}
