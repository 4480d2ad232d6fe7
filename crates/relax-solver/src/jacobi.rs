//! Jacobi iteration: simultaneous updates from the previous iterate.

use std::time::Instant;

use log::debug;
use relax_core::{LinearSystem, Result, SolverConfig, relative_error};

use crate::result::{Method, SolverResult};

/// Solve `Ax = b` with the Jacobi method.
///
/// Each sweep computes the entire new iterate from the previous one:
///
/// ```text
/// x_new[i] = (b[i] - sum_{j != i} a[i][j] * x_old[j]) / a[i][i]
/// ```
///
/// No component of `x_new` ever reads another component of `x_new` within
/// the same sweep, which is what makes the row updates order-independent.
/// After each sweep the relative error against the previous iterate is
/// appended to the history; the run stops when it drops below
/// `config.tolerance` or the iteration cap is reached. Hitting the cap is a
/// reported outcome (`converged = false`), not an error.
///
/// The system is assumed validated (square, non-zero diagonal); the loop
/// does not re-check those preconditions.
pub fn solve_jacobi(system: &LinearSystem, config: &SolverConfig) -> Result<SolverResult> {
    let start = Instant::now();
    let n = system.dim();
    let a = system.matrix();
    let b = system.rhs();

    let mut x_old = config.resolve_initial_guess(n)?;
    let mut x_new = x_old.clone();
    let mut error_history = Vec::new();
    let mut converged = false;
    let mut iterations = config.max_iterations;

    for k in 0..config.max_iterations {
        for i in 0..n {
            let mut sum = 0.0;
            for j in 0..n {
                if i != j {
                    sum += a[(i, j)] * x_old[j];
                }
            }
            x_new[i] = (b[i] - sum) / a[(i, i)];
        }

        let error = relative_error(&x_new, &x_old);
        error_history.push(error);

        if error < config.tolerance {
            converged = true;
            iterations = k + 1;
            break;
        }

        // The next sweep overwrites every component, so the buffers can
        // trade places instead of copying.
        std::mem::swap(&mut x_old, &mut x_new);
    }

    // When the loop ran out, the last computed iterate sits in x_old after
    // the final swap; on convergence it is still in x_new.
    let solution = if converged { x_new } else { x_old };

    debug!(
        "Jacobi: {} sweeps on {}x{} system, converged={}",
        iterations, n, n, converged
    );

    let memory_kb = ((2 * n + error_history.len()) * size_of::<f64>()) as f64 / 1024.0;
    Ok(SolverResult {
        method: Method::Jacobi,
        solution,
        iterations,
        converged,
        error_history,
        elapsed_ms: start.elapsed().as_secs_f64() * 1e3,
        memory_kb,
    })
}
