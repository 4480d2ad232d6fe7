//! Text rendering for solver runs and reports.

use relax_analysis::{ComparisonReport, ConvergenceDiagnostics};
use relax_core::TestCase;
use relax_solver::SolverResult;

/// Print a fixture header with its matrix and parameters.
pub fn print_case_header(case: &TestCase) {
    println!("{}", case.name);
    println!("  {}", case.description);
    println!("  note: {}", case.properties.note);
    println!();

    let a = case.system.matrix();
    let b = case.system.rhs();
    println!("System ({}x{}):", case.system.dim(), case.system.dim());
    for i in 0..case.system.dim() {
        let row: Vec<String> = (0..case.system.dim())
            .map(|j| format!("{:8.3}", a[(i, j)]))
            .collect();
        println!("  [ {} ] [x{}] = {:8.3}", row.join(" "), i, b[i]);
    }
    println!();
}

/// Print one method's run as a block.
pub fn print_result(result: &SolverResult) {
    println!("{}:", result.method);
    let status = if result.converged { "converged" } else { "did not converge" };
    println!("  {} after {} iterations", status, result.iterations);
    println!("  final error:  {:.3e}", result.final_error());
    println!("  elapsed:      {:.3} ms", result.elapsed_ms);
    println!("  working set:  {:.2} KiB", result.memory_kb);

    let x = &result.solution;
    let values: Vec<String> = x.iter().map(|v| format!("{v:.6}")).collect();
    println!("  solution:     [{}]", values.join(", "));
    println!();
}

/// Print the head-to-head comparison block.
pub fn print_comparison(report: &ComparisonReport) {
    println!("Comparison:");
    println!("  matrix:          {}", report.matrix_class);
    println!(
        "  iterations:      Jacobi {} vs Gauss-Seidel {} (gap {})",
        report.iterations.jacobi, report.iterations.gauss_seidel, report.iteration_gap
    );
    println!(
        "  efficiency:      Jacobi {} pts vs Gauss-Seidel {} pts",
        report.efficiency.points.jacobi, report.efficiency.points.gauss_seidel
    );
    match report.efficiency.more_efficient {
        Some(method) => println!("  more efficient:  {method}"),
        None => println!("  more efficient:  similar"),
    }
    println!();
    println!("Recommendations:");
    for line in &report.recommendations {
        println!("  - {line}");
    }
    println!();
}

/// Print the convergence diagnostics block.
pub fn print_diagnostics(diag: &ConvergenceDiagnostics) {
    println!("Convergence diagnostics:");
    match (diag.speed.ratio, diag.speed.improvement_pct) {
        (Some(ratio), Some(pct)) => {
            println!("  speed ratio:     {ratio} (improvement {pct}%)");
        }
        _ => println!("  speed ratio:     n/a"),
    }
    println!(
        "  linear rate:     Jacobi {:.4}, Gauss-Seidel {:.4}",
        diag.linear_rate.jacobi, diag.linear_rate.gauss_seidel
    );
    println!("  interpretation:  {}", diag.linear_rate.interpretation);
    println!(
        "  spectral radius: Jacobi {:.4}, Gauss-Seidel {:.4} (guaranteed: {})",
        diag.spectral_radius.jacobi,
        diag.spectral_radius.gauss_seidel,
        diag.spectral_radius.guarantees_convergence
    );
    for (method, s) in [
        ("Jacobi", &diag.stability.jacobi),
        ("Gauss-Seidel", &diag.stability.gauss_seidel),
    ] {
        println!(
            "  stability:       {method}: monotone={}, oscillations={}, stable={}",
            s.monotone, s.oscillations, s.stable
        );
    }
    if let Some(residuals) = &diag.residuals {
        println!(
            "  residual norm:   Jacobi {:.3e}, Gauss-Seidel {:.3e}",
            residuals.jacobi, residuals.gauss_seidel
        );
    }
    for line in &diag.predictions {
        println!("  {line}");
    }
    println!();
}
