//! Head-to-head comparison of two completed solver runs.

use relax_core::{LinearSystem, is_diagonally_dominant, is_symmetric};
use relax_solver::{Method, SolverResult};
use serde::Serialize;

use crate::report::{MethodPair, method_name, round_to};

/// Efficiency scoring: one point each for fewer iterations (strict), less
/// wall time (strict), and convergence. Ties award no point to either side.
#[derive(Debug, Clone, Serialize)]
pub struct EfficiencyScore {
    /// Points per method, 0..=3.
    pub points: MethodPair<u8>,
    /// Higher total wins; `None` when the totals are equal ("similar").
    #[serde(serialize_with = "method_name")]
    pub more_efficient: Option<Method>,
}

/// Read-only comparison of two completed runs on the same system.
///
/// Derived entirely from its inputs at construction; never mutates them.
/// Time and memory rows are advisory telemetry carried for display, not
/// decision inputs; convergence and iteration counts drive the verdicts.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    /// Convergence flag per method.
    pub converged: MethodPair<bool>,
    /// Sweep count per method.
    pub iterations: MethodPair<usize>,
    /// Absolute difference of the sweep counts.
    pub iteration_gap: usize,
    /// Wall time per method (ms).
    pub elapsed_ms: MethodPair<f64>,
    /// Method with strictly less wall time; `None` on an exact tie.
    #[serde(serialize_with = "method_name")]
    pub faster_by_time: Option<Method>,
    /// Working-set estimate per method (KiB).
    pub memory_kb: MethodPair<f64>,
    /// Absolute difference of the memory estimates.
    pub memory_gap_kb: f64,
    /// Last recorded relative error per method (0 for an empty history).
    pub final_error: MethodPair<f64>,
    /// Three-criterion efficiency score.
    pub efficiency: EfficiencyScore,
    /// Ordered qualitative recommendations.
    pub recommendations: Vec<String>,
    /// One-line structural classification of the matrix.
    pub matrix_class: String,
}

/// Compare two completed runs against the system they both solved.
pub fn compare(
    jacobi: &SolverResult,
    gauss_seidel: &SolverResult,
    system: &LinearSystem,
) -> ComparisonReport {
    ComparisonReport {
        converged: MethodPair::new(jacobi.converged, gauss_seidel.converged),
        iterations: MethodPair::new(jacobi.iterations, gauss_seidel.iterations),
        iteration_gap: jacobi.iterations.abs_diff(gauss_seidel.iterations),
        elapsed_ms: MethodPair::new(jacobi.elapsed_ms, gauss_seidel.elapsed_ms),
        faster_by_time: strictly_less(jacobi.elapsed_ms, gauss_seidel.elapsed_ms),
        memory_kb: MethodPair::new(jacobi.memory_kb, gauss_seidel.memory_kb),
        memory_gap_kb: (jacobi.memory_kb - gauss_seidel.memory_kb).abs(),
        final_error: MethodPair::new(jacobi.final_error(), gauss_seidel.final_error()),
        efficiency: score_efficiency(jacobi, gauss_seidel),
        recommendations: recommend(jacobi, gauss_seidel, system),
        matrix_class: classify_matrix(system),
    }
}

fn strictly_less(jacobi: f64, gauss_seidel: f64) -> Option<Method> {
    if jacobi < gauss_seidel {
        Some(Method::Jacobi)
    } else if gauss_seidel < jacobi {
        Some(Method::GaussSeidel)
    } else {
        None
    }
}

fn score_efficiency(jacobi: &SolverResult, gauss_seidel: &SolverResult) -> EfficiencyScore {
    let mut j = 0u8;
    let mut gs = 0u8;

    if jacobi.iterations < gauss_seidel.iterations {
        j += 1;
    } else if gauss_seidel.iterations < jacobi.iterations {
        gs += 1;
    }

    if jacobi.elapsed_ms < gauss_seidel.elapsed_ms {
        j += 1;
    } else if gauss_seidel.elapsed_ms < jacobi.elapsed_ms {
        gs += 1;
    }

    if jacobi.converged {
        j += 1;
    }
    if gauss_seidel.converged {
        gs += 1;
    }

    let more_efficient = if j > gs {
        Some(Method::Jacobi)
    } else if gs > j {
        Some(Method::GaussSeidel)
    } else {
        None
    };

    EfficiencyScore {
        points: MethodPair::new(j, gs),
        more_efficient,
    }
}

fn recommend(
    jacobi: &SolverResult,
    gauss_seidel: &SolverResult,
    system: &LinearSystem,
) -> Vec<String> {
    let mut out = Vec::new();

    if is_diagonally_dominant(system.matrix()) {
        out.push(
            "Matrix is strictly diagonally dominant; both methods should converge.".to_string(),
        );
    } else {
        out.push("Matrix is not diagonally dominant; convergence is not guaranteed.".to_string());
    }

    let (iter_j, iter_gs) = (jacobi.iterations, gauss_seidel.iterations);
    match (jacobi.converged, gauss_seidel.converged) {
        (true, true) => {
            if iter_gs < iter_j {
                // Improvement relative to the slower method's count.
                let pct = round_to((iter_j - iter_gs) as f64 / iter_j as f64 * 100.0, 2);
                out.push(format!(
                    "Gauss-Seidel converged {pct}% faster than Jacobi."
                ));
                out.push("Prefer Gauss-Seidel for this kind of matrix.".to_string());
            } else if iter_j < iter_gs {
                let pct = round_to((iter_gs - iter_j) as f64 / iter_gs as f64 * 100.0, 2);
                out.push(format!(
                    "Jacobi converged {pct}% faster than Gauss-Seidel (uncommon)."
                ));
                out.push("Prefer Jacobi for this kind of matrix.".to_string());
            } else {
                out.push("Both methods converged in the same number of iterations.".to_string());
            }
        }
        (false, false) => {
            out.push(
                "Neither method converged; raise the iteration cap or revisit the matrix."
                    .to_string(),
            );
        }
        (false, true) => {
            out.push("Only Gauss-Seidel converged.".to_string());
            out.push("Prefer Gauss-Seidel for this system.".to_string());
        }
        (true, false) => {
            out.push("Only Jacobi converged (unusual).".to_string());
            out.push("Prefer Jacobi for this system.".to_string());
        }
    }

    if system.dim() > 10 {
        out.push(
            "For large systems (n > 10) the Jacobi sweep parallelizes across rows.".to_string(),
        );
    }

    out
}

fn classify_matrix(system: &LinearSystem) -> String {
    let a = system.matrix();
    let n = system.dim();
    let mut parts = Vec::new();

    if is_diagonally_dominant(a) {
        parts.push("Diagonally dominant".to_string());
    } else {
        parts.push("Not diagonally dominant".to_string());
    }

    if is_symmetric(a) {
        parts.push("Symmetric".to_string());
    }

    parts.push(
        if n <= 5 {
            "Small (n <= 5)"
        } else if n <= 20 {
            "Medium (5 < n <= 20)"
        } else {
            "Large (n > 20)"
        }
        .to_string(),
    );

    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::dvector;
    use relax_core::SolverConfig;
    use relax_solver::solve_both;

    fn result(method: Method, iterations: usize, converged: bool, history: &[f64]) -> SolverResult {
        SolverResult {
            method,
            solution: dvector![0.0, 0.0],
            iterations,
            converged,
            error_history: history.to_vec(),
            elapsed_ms: iterations as f64 * 0.1,
            memory_kb: 1.0,
        }
    }

    fn simple_2x2() -> LinearSystem {
        LinearSystem::from_rows(&[&[5.0, 1.0], &[1.0, 3.0]], &[10.0, 8.0]).unwrap()
    }

    #[test]
    fn efficiency_scores_three_criteria() {
        // GS: fewer iterations (and thus less synthetic time) and converged.
        let jacobi = result(Method::Jacobi, 20, true, &[0.5, 0.1]);
        let gs = result(Method::GaussSeidel, 10, true, &[0.4, 0.05]);
        let report = compare(&jacobi, &gs, &simple_2x2());

        assert_eq!(report.efficiency.points.jacobi, 1); // converged
        assert_eq!(report.efficiency.points.gauss_seidel, 3);
        assert_eq!(report.efficiency.more_efficient, Some(Method::GaussSeidel));
        assert_eq!(report.iteration_gap, 10);
    }

    #[test]
    fn equal_totals_report_similar() {
        let jacobi = result(Method::Jacobi, 10, true, &[0.1]);
        let gs = result(Method::GaussSeidel, 10, true, &[0.1]);
        let report = compare(&jacobi, &gs, &simple_2x2());

        assert_eq!(report.efficiency.points.jacobi, 1);
        assert_eq!(report.efficiency.points.gauss_seidel, 1);
        assert_eq!(report.efficiency.more_efficient, None);
        assert_eq!(report.faster_by_time, None);
    }

    #[test]
    fn recommendations_lead_with_dominance_verdict() {
        let jacobi = result(Method::Jacobi, 20, true, &[0.1]);
        let gs = result(Method::GaussSeidel, 10, true, &[0.1]);
        let report = compare(&jacobi, &gs, &simple_2x2());

        assert!(report.recommendations[0].contains("diagonally dominant"));
        // 50% fewer iterations relative to Jacobi's 20.
        assert!(report.recommendations[1].contains("50%"));
        assert!(report.recommendations[2].contains("Prefer Gauss-Seidel"));
    }

    #[test]
    fn neither_converged_verdict() {
        let jacobi = result(Method::Jacobi, 100, false, &[0.9; 100]);
        let gs = result(Method::GaussSeidel, 100, false, &[0.9; 100]);
        let report = compare(&jacobi, &gs, &simple_2x2());

        assert!(
            report
                .recommendations
                .iter()
                .any(|r| r.contains("Neither method converged"))
        );
    }

    #[test]
    fn only_one_converged_verdict() {
        let jacobi = result(Method::Jacobi, 100, false, &[0.9; 100]);
        let gs = result(Method::GaussSeidel, 30, true, &[0.1]);
        let report = compare(&jacobi, &gs, &simple_2x2());

        assert!(
            report
                .recommendations
                .iter()
                .any(|r| r.contains("Only Gauss-Seidel converged"))
        );
    }

    #[test]
    fn parallelization_note_only_for_large_systems() {
        let small = compare(
            &result(Method::Jacobi, 5, true, &[0.1]),
            &result(Method::GaussSeidel, 3, true, &[0.1]),
            &simple_2x2(),
        );
        assert!(!small.recommendations.iter().any(|r| r.contains("parallelizes")));

        // 12x12 identity-like dominant system.
        let n = 12;
        let a = nalgebra::DMatrix::from_fn(n, n, |i, j| if i == j { 4.0 } else { 0.1 });
        let b = nalgebra::DVector::from_element(n, 1.0);
        let system = LinearSystem::new(a, b).unwrap();
        let large = compare(
            &result(Method::Jacobi, 5, true, &[0.1]),
            &result(Method::GaussSeidel, 3, true, &[0.1]),
            &system,
        );
        assert!(large.recommendations.iter().any(|r| r.contains("parallelizes")));
    }

    #[test]
    fn matrix_classification_string() {
        let report = compare(
            &result(Method::Jacobi, 5, true, &[0.1]),
            &result(Method::GaussSeidel, 3, true, &[0.1]),
            &simple_2x2(),
        );
        assert_eq!(
            report.matrix_class,
            "Diagonally dominant, Symmetric, Small (n <= 5)"
        );

        let asymmetric = LinearSystem::from_rows(
            &[&[1.0, 2.0, 3.0], &[4.0, 1.0, 2.0], &[3.0, 4.0, 1.0]],
            &[14.0, 11.0, 16.0],
        )
        .unwrap();
        let report = compare(
            &result(Method::Jacobi, 5, true, &[0.1]),
            &result(Method::GaussSeidel, 3, true, &[0.1]),
            &asymmetric,
        );
        assert_eq!(report.matrix_class, "Not diagonally dominant, Small (n <= 5)");
    }

    #[test]
    fn report_from_real_runs_is_serializable() {
        let system = simple_2x2();
        let (jacobi, gs) = solve_both(&system, &SolverConfig::new(1e-4, 100)).unwrap();
        let report = compare(&jacobi, &gs, &system);

        assert_eq!(report.converged, MethodPair::new(true, true));
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["efficiency"]["points"]["jacobi"].is_number());
        assert_eq!(json["matrix_class"], "Diagonally dominant, Symmetric, Small (n <= 5)");
    }
}
