//! Solver identification and result types.

use nalgebra::DVector;

/// Which stationary method produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Simultaneous update: every component of the new iterate is computed
    /// from the previous iterate only.
    Jacobi,
    /// Sequential in-place update: components with smaller index already
    /// hold new values when a component is computed.
    GaussSeidel,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::Jacobi => write!(f, "Jacobi"),
            Method::GaussSeidel => write!(f, "Gauss-Seidel"),
        }
    }
}

/// Outcome of a single solver run.
///
/// Produced exactly once per `solve` call and never mutated afterwards.
/// Reaching the iteration cap is reported through `converged = false`, not
/// as an error.
#[derive(Debug, Clone)]
pub struct SolverResult {
    /// Which method produced this result.
    pub method: Method,
    /// Last computed iterate (the solution when `converged`).
    pub solution: DVector<f64>,
    /// Number of full sweeps executed, in `1..=max_iterations`.
    pub iterations: usize,
    /// True iff the relative-error criterion was met before the cap.
    pub converged: bool,
    /// Relative error after each sweep; one entry per executed iteration.
    pub error_history: Vec<f64>,
    /// Wall time of the run in milliseconds. Advisory telemetry only.
    pub elapsed_ms: f64,
    /// Working-set estimate in KiB (iterate buffers plus error history).
    /// Advisory telemetry only; never feeds a convergence decision.
    pub memory_kb: f64,
}

impl SolverResult {
    /// Relative error recorded by the last sweep, or 0 for an empty history.
    pub fn final_error(&self) -> f64 {
        self.error_history.last().copied().unwrap_or(0.0)
    }
}
