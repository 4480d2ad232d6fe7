//! Numeric primitives shared by the solvers and the analysis layer.

use nalgebra::{DMatrix, DVector};

/// Tolerance for the symmetry check: |a_ij - a_ji| above this breaks symmetry.
pub const SYMMETRY_TOL: f64 = 1e-4;

/// Relative Euclidean error between two successive iterates.
///
/// Returns `||x_new - x_old||_2 / ||x_new||_2`, the per-sweep stopping
/// metric. When the new iterate has zero norm there is no further change to
/// measure, so 0 is returned rather than dividing by zero.
pub fn relative_error(x_new: &DVector<f64>, x_old: &DVector<f64>) -> f64 {
    let mut num = 0.0;
    let mut den = 0.0;
    for i in 0..x_new.len() {
        let diff = x_new[i] - x_old[i];
        num += diff * diff;
        den += x_new[i] * x_new[i];
    }
    if den == 0.0 {
        return 0.0;
    }
    (num / den).sqrt()
}

/// Residual norm `||Ax - b||_2` of a candidate solution.
///
/// Independent check of solution quality against the original equations;
/// used only by diagnostics, never by the stopping criterion.
pub fn residual_norm(a: &DMatrix<f64>, x: &DVector<f64>, b: &DVector<f64>) -> f64 {
    let n = b.len();
    let mut sum_sq = 0.0;
    for i in 0..n {
        let mut ax_i = 0.0;
        for j in 0..n {
            ax_i += a[(i, j)] * x[j];
        }
        let diff = ax_i - b[i];
        sum_sq += diff * diff;
    }
    sum_sq.sqrt()
}

/// Strict row-wise diagonal dominance: `|a_ii| > sum_{j != i} |a_ij|` for
/// every row.
///
/// This is a sufficient condition for both Jacobi and Gauss-Seidel to
/// converge, not a necessary one; either method may still converge on a
/// matrix that fails it.
pub fn is_diagonally_dominant(a: &DMatrix<f64>) -> bool {
    let n = a.nrows();
    for i in 0..n {
        let mut off_diag = 0.0;
        for j in 0..n {
            if i != j {
                off_diag += a[(i, j)].abs();
            }
        }
        if a[(i, i)].abs() <= off_diag {
            return false;
        }
    }
    true
}

/// Symmetry up to [`SYMMETRY_TOL`]: `|a_ij - a_ji| <= 1e-4` for all i < j.
pub fn is_symmetric(a: &DMatrix<f64>) -> bool {
    let n = a.nrows();
    for i in 0..n {
        for j in (i + 1)..n {
            if (a[(i, j)] - a[(j, i)]).abs() > SYMMETRY_TOL {
                return false;
            }
        }
    }
    true
}

/// Infinity norm (maximum absolute row sum) of a matrix.
///
/// Used as a cheap conditioning heuristic by the validator.
pub fn infinity_norm(a: &DMatrix<f64>) -> f64 {
    let n = a.nrows();
    let mut norm = 0.0_f64;
    for i in 0..n {
        let mut row_sum = 0.0;
        for j in 0..a.ncols() {
            row_sum += a[(i, j)].abs();
        }
        norm = norm.max(row_sum);
    }
    norm
}
