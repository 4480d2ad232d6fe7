//! Convergence diagnostics derived from recorded error histories.
//!
//! The estimated linear rate doubles as a spectral radius proxy for the
//! iteration matrix: for a stationary method the error contracts by roughly
//! rho per sweep once the dominant mode takes over, so the tail-averaged
//! ratio of consecutive errors approximates rho.

use nalgebra::{DMatrix, DVector};
use relax_core::{is_diagonally_dominant, residual_norm};
use relax_solver::{Method, SolverResult};
use serde::Serialize;

use crate::report::{MethodPair, method_name, round_to};

/// Ratios below this floor are skipped as numerical noise.
const RATE_FLOOR: f64 = 1e-10;
/// Number of trailing ratios averaged into the rate estimate.
const RATE_TAIL: usize = 5;

/// Iteration-count comparison between the two methods.
#[derive(Debug, Clone, Serialize)]
pub struct SpeedComparison {
    /// Jacobi iterations over Gauss-Seidel iterations, rounded to 2 places.
    pub ratio: Option<f64>,
    /// Method with strictly fewer iterations; ties go to Jacobi.
    #[serde(serialize_with = "method_name")]
    pub faster: Option<Method>,
    /// Iteration savings as a percentage of the Jacobi count, 2 places.
    pub improvement_pct: Option<f64>,
}

/// Tail-averaged linear convergence rate per method, with a one-line read.
#[derive(Debug, Clone, Serialize)]
pub struct RateEstimate {
    pub jacobi: f64,
    pub gauss_seidel: f64,
    pub interpretation: String,
}

/// Shape of a single error history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stability {
    /// True when the errors never rise by more than 1% between sweeps.
    pub monotone: bool,
    /// Sign changes in the sequence of consecutive differences.
    pub oscillations: usize,
    /// True when the final error is below the first.
    pub stable: bool,
}

/// Rate estimates reinterpreted as spectral radius proxies.
#[derive(Debug, Clone, Serialize)]
pub struct SpectralRadiusEstimate {
    pub jacobi: f64,
    pub gauss_seidel: f64,
    /// True when both estimates sit strictly below 1.
    pub guarantees_convergence: bool,
}

/// Full diagnostic bundle for a Jacobi/Gauss-Seidel pair of runs.
#[derive(Debug, Clone, Serialize)]
pub struct ConvergenceDiagnostics {
    pub speed: SpeedComparison,
    pub linear_rate: RateEstimate,
    pub stability: MethodPair<Stability>,
    pub spectral_radius: SpectralRadiusEstimate,
    /// Ordered verdicts: dominance first, then one iteration-count tier
    /// per method.
    pub predictions: Vec<String>,
    /// Final residual norms, when the right-hand side is available.
    pub residuals: Option<MethodPair<f64>>,
}

/// Build the diagnostics for a pair of completed runs.
///
/// `b` is optional so callers holding only the matrix still get the
/// history-based diagnostics; residuals are reported only when it is given.
pub fn diagnose(
    jacobi: &SolverResult,
    gauss_seidel: &SolverResult,
    a: &DMatrix<f64>,
    b: Option<&DVector<f64>>,
) -> ConvergenceDiagnostics {
    let rate_j = linear_rate(&jacobi.error_history);
    let rate_gs = linear_rate(&gauss_seidel.error_history);

    ConvergenceDiagnostics {
        speed: compare_speed(jacobi.iterations, gauss_seidel.iterations),
        linear_rate: RateEstimate {
            jacobi: rate_j,
            gauss_seidel: rate_gs,
            interpretation: interpret_rates(rate_j, rate_gs),
        },
        stability: MethodPair::new(
            stability(&jacobi.error_history),
            stability(&gauss_seidel.error_history),
        ),
        spectral_radius: SpectralRadiusEstimate {
            jacobi: rate_j,
            gauss_seidel: rate_gs,
            guarantees_convergence: rate_j < 1.0 && rate_gs < 1.0,
        },
        predictions: predictions(a, jacobi, gauss_seidel),
        residuals: b.map(|b| {
            MethodPair::new(
                residual_norm(a, &jacobi.solution, b),
                residual_norm(a, &gauss_seidel.solution, b),
            )
        }),
    }
}

/// Estimate the linear convergence rate from an error history.
///
/// Averages the last [`RATE_TAIL`] ratios e[k+1]/e[k] whose denominator
/// exceeds [`RATE_FLOOR`]. Returns 0 when no usable ratio exists, which
/// callers read as "converged too fast to measure".
pub fn linear_rate(history: &[f64]) -> f64 {
    let mut ratios = Vec::new();
    for pair in history.windows(2) {
        if pair[0] > RATE_FLOOR {
            ratios.push(pair[1] / pair[0]);
        }
    }
    if ratios.is_empty() {
        return 0.0;
    }
    let tail = &ratios[ratios.len().saturating_sub(RATE_TAIL)..];
    round_to(tail.iter().sum::<f64>() / tail.len() as f64, 4)
}

/// Count sign changes in the consecutive differences of a history.
pub fn oscillation_count(history: &[f64]) -> usize {
    let mut count = 0;
    for triple in history.windows(3) {
        let d1 = triple[1] - triple[0];
        let d2 = triple[2] - triple[1];
        if d1 * d2 < 0.0 {
            count += 1;
        }
    }
    count
}

fn compare_speed(iter_j: usize, iter_gs: usize) -> SpeedComparison {
    if iter_j == 0 || iter_gs == 0 {
        return SpeedComparison { ratio: None, faster: None, improvement_pct: None };
    }
    let faster = if iter_gs < iter_j { Method::GaussSeidel } else { Method::Jacobi };
    SpeedComparison {
        ratio: Some(round_to(iter_j as f64 / iter_gs as f64, 2)),
        faster: Some(faster),
        improvement_pct: Some(round_to(
            iter_j.abs_diff(iter_gs) as f64 / iter_j as f64 * 100.0,
            2,
        )),
    }
}

fn interpret_rates(rate_j: f64, rate_gs: f64) -> String {
    // Ties go to Jacobi.
    let better = if rate_gs < rate_j { Method::GaussSeidel } else { Method::Jacobi };
    if rate_j < 0.5 && rate_gs < 0.5 {
        format!("Fast linear convergence; {better} slightly better")
    } else if rate_j < 0.9 && rate_gs < 0.9 {
        format!("Moderate linear convergence; {better} has the edge")
    } else {
        "Slow convergence; reconsider the tolerance or the matrix".to_string()
    }
}

fn predictions(a: &DMatrix<f64>, jacobi: &SolverResult, gauss_seidel: &SolverResult) -> Vec<String> {
    let mut out = Vec::new();
    if is_diagonally_dominant(a) {
        out.push("Diagonally dominant matrix: both methods are guaranteed to converge.".to_string());
    } else {
        out.push(
            "Matrix is not diagonally dominant: convergence is not guaranteed.".to_string(),
        );
    }
    for result in [jacobi, gauss_seidel] {
        let tier = if result.iterations < 20 {
            "fast"
        } else if result.iterations < 100 {
            "moderate"
        } else {
            "slow"
        };
        out.push(format!(
            "{}: {tier} ({} iterations)",
            result.method, result.iterations
        ));
    }
    out
}

fn stability(history: &[f64]) -> Stability {
    // A 1% rise between sweeps still counts as monotone; fewer than two
    // points are trivially monotone.
    let monotone = history.windows(2).all(|pair| pair[1] <= pair[0] * 1.01);
    // Strict: a history that never dropped below its first entry is not
    // stable, and that includes single-entry histories.
    let stable = match (history.first(), history.last()) {
        (Some(first), Some(last)) => last < first,
        _ => false,
    };
    Stability {
        monotone,
        oscillations: oscillation_count(history),
        stable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{dmatrix, dvector};
    use relax_core::{LinearSystem, SolverConfig};
    use relax_solver::solve_both;

    #[test]
    fn linear_rate_averages_tail_ratios() {
        // Constant ratio 0.5 throughout.
        let history = [1.0, 0.5, 0.25, 0.125, 0.0625];
        assert!((linear_rate(&history) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn linear_rate_skips_tiny_denominators() {
        let history = [1e-12, 0.5, 0.25];
        // Only the 0.25/0.5 ratio survives the floor.
        assert!((linear_rate(&history) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn linear_rate_zero_when_unmeasurable() {
        assert_eq!(linear_rate(&[]), 0.0);
        assert_eq!(linear_rate(&[0.3]), 0.0);
        assert_eq!(linear_rate(&[1e-12, 1e-13]), 0.0);
    }

    #[test]
    fn oscillation_count_detects_sign_changes() {
        assert_eq!(oscillation_count(&[1.0, 0.5, 0.6, 0.1]), 1);
        assert_eq!(oscillation_count(&[1.0, 0.5, 0.25]), 0);
        assert_eq!(oscillation_count(&[1.0, 0.5, 0.6, 0.4, 0.7]), 3);
        assert_eq!(oscillation_count(&[1.0, 0.5]), 0);
    }

    #[test]
    fn stability_of_decreasing_history() {
        let s = stability(&[1.0, 0.5, 0.25, 0.125]);
        assert!(s.monotone);
        assert_eq!(s.oscillations, 0);
        assert!(s.stable);
    }

    #[test]
    fn stability_tolerates_one_percent_rise() {
        let s = stability(&[1.0, 0.5, 0.503, 0.1]);
        assert!(s.monotone);
    }

    #[test]
    fn stability_flags_large_rise() {
        let s = stability(&[1.0, 0.5, 0.8, 0.1]);
        assert!(!s.monotone);
        assert_eq!(s.oscillations, 2);
        assert!(s.stable);
    }

    #[test]
    fn stability_of_empty_and_single_point_histories() {
        let empty = stability(&[]);
        assert!(empty.monotone);
        assert!(!empty.stable);

        // One point shows no decrease, so it is monotone but not stable.
        let single = stability(&[0.3]);
        assert!(single.monotone);
        assert!(!single.stable);
        assert_eq!(single.oscillations, 0);
    }

    #[test]
    fn speed_comparison_ties_favor_jacobi() {
        let s = compare_speed(10, 10);
        assert_eq!(s.faster, Some(Method::Jacobi));
        assert_eq!(s.ratio, Some(1.0));
        assert_eq!(s.improvement_pct, Some(0.0));
    }

    #[test]
    fn speed_comparison_with_zero_count_reports_nothing() {
        let s = compare_speed(0, 10);
        assert_eq!(s.ratio, None);
        assert_eq!(s.faster, None);
        assert_eq!(s.improvement_pct, None);
    }

    #[test]
    fn diagnose_full_run_on_dominant_system() {
        let a = dmatrix![5.0, 1.0; 1.0, 3.0];
        let b = dvector![10.0, 8.0];
        let system = LinearSystem::new(a.clone(), b.clone()).unwrap();
        let (jacobi, gs) = solve_both(&system, &SolverConfig::new(1e-8, 200)).unwrap();

        let diag = diagnose(&jacobi, &gs, &a, Some(&b));

        assert_eq!(diag.speed.faster, Some(Method::GaussSeidel));
        assert!(diag.spectral_radius.guarantees_convergence);
        assert!(diag.linear_rate.gauss_seidel < diag.linear_rate.jacobi);
        assert_eq!(diag.predictions.len(), 3);
        assert!(diag.predictions[0].contains("Diagonally dominant"));
        assert!(diag.predictions[1].starts_with("Jacobi: fast"));

        let residuals = diag.residuals.unwrap();
        assert!(residuals.jacobi < 1e-6);
        assert!(residuals.gauss_seidel < 1e-6);
    }

    #[test]
    fn diagnose_without_rhs_omits_residuals() {
        let a = dmatrix![5.0, 1.0; 1.0, 3.0];
        let system = LinearSystem::new(a.clone(), dvector![10.0, 8.0]).unwrap();
        let (jacobi, gs) = solve_both(&system, &SolverConfig::default()).unwrap();

        let diag = diagnose(&jacobi, &gs, &a, None);
        assert!(diag.residuals.is_none());
    }
}
