//! relax CLI.
//!
//! Runs the Jacobi and Gauss-Seidel solvers over the bundled example
//! systems and prints comparison reports.

use std::process::ExitCode;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use relax_analysis::{compare, diagnose};
use relax_core::{SolverConfig, all_cases, case, relative_error, validate_system};
use relax_solver::solve_both;

mod output;

#[derive(Parser)]
#[command(name = "relax")]
#[command(about = "Jacobi vs Gauss-Seidel iterative solver comparison")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the bundled example systems
    List,

    /// Solve one example system with both methods and compare them
    Run {
        /// Case slug (see `relax list`)
        case: String,

        /// Override the case's relative error tolerance
        #[arg(long)]
        tolerance: Option<f64>,

        /// Override the case's iteration cap
        #[arg(long)]
        max_iterations: Option<usize>,

        /// Output results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run every example system and verify against the known solutions
    Suite {
        /// Only run cases whose slug matches this pattern
        #[arg(long)]
        filter: Option<String>,

        /// Output results as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::List => cmd_list(),
        Commands::Run { case, tolerance, max_iterations, json } => {
            cmd_run(&case, tolerance, max_iterations, json)
        }
        Commands::Suite { filter, json } => cmd_suite(filter, json),
    }
}

fn cmd_list() -> ExitCode {
    println!("Available cases:");
    for (slug, tc) in all_cases() {
        println!("  {slug:<18} {} ({}x{})", tc.name, tc.system.dim(), tc.system.dim());
        println!("  {:<18} {}", "", tc.description);
    }
    ExitCode::SUCCESS
}

fn cmd_run(
    slug: &str,
    tolerance: Option<f64>,
    max_iterations: Option<usize>,
    json: bool,
) -> ExitCode {
    match run_case(slug, tolerance, max_iterations, json) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run_case(
    slug: &str,
    tolerance: Option<f64>,
    max_iterations: Option<usize>,
    json: bool,
) -> anyhow::Result<ExitCode> {
    let Some(tc) = case(slug) else {
        bail!("unknown case '{slug}' (see `relax list`)");
    };

    let config = SolverConfig::new(
        tolerance.unwrap_or(tc.config.tolerance),
        max_iterations.unwrap_or(tc.config.max_iterations),
    );
    let validation = validate_system(
        tc.system.matrix(),
        tc.system.rhs(),
        config.tolerance,
        config.max_iterations,
    )
    .with_context(|| format!("case '{slug}' failed validation"))?;

    let (jacobi, gauss_seidel) =
        solve_both(&tc.system, &config).with_context(|| format!("solving case '{slug}'"))?;

    let report = compare(&jacobi, &gauss_seidel, &tc.system);
    let diagnostics = diagnose(
        &jacobi,
        &gauss_seidel,
        tc.system.matrix(),
        Some(tc.system.rhs()),
    );

    if json {
        let value = serde_json::json!({
            "case": slug,
            "tolerance": config.tolerance,
            "max_iterations": config.max_iterations,
            "comparison": report,
            "diagnostics": diagnostics,
        });
        println!("{}", serde_json::to_string_pretty(&value).context("serializing report")?);
    } else {
        output::print_case_header(tc);

        for warning in &validation.warnings {
            println!("Warning: {warning}");
        }
        if !validation.warnings.is_empty() {
            println!();
        }

        output::print_result(&jacobi);
        output::print_result(&gauss_seidel);
        output::print_comparison(&report);
        output::print_diagnostics(&diagnostics);
    }

    Ok(if jacobi.converged || gauss_seidel.converged {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn cmd_suite(filter: Option<String>, json: bool) -> ExitCode {
    let mut total = 0;
    let mut passed = 0;
    let mut failures = Vec::new();

    for (slug, tc) in all_cases() {
        if let Some(ref pattern) = filter {
            if !slug.contains(pattern.as_str()) {
                continue;
            }
        }

        total += 1;

        let (jacobi, gauss_seidel) = match solve_both(&tc.system, &tc.config) {
            Ok(pair) => pair,
            Err(e) => {
                failures.push((slug.to_string(), format!("Error: {e}")));
                if !json {
                    println!("  ERROR: {slug} - {e}");
                }
                continue;
            }
        };

        // A case passes when every converged run also lands on the known
        // solution. Non-convergence alone is a pass for the cases whose note
        // says it is expected.
        let mut mismatch = None;
        for result in [&jacobi, &gauss_seidel] {
            if !result.converged {
                continue;
            }
            let drift = relative_error(&result.solution, &tc.exact_solution);
            if drift > tc.config.tolerance * 10.0 {
                mismatch = Some(format!(
                    "{} converged but drifted {:.3e} from the known solution",
                    result.method, drift
                ));
            }
        }

        if tc.properties.diagonally_dominant && !(jacobi.converged && gauss_seidel.converged) {
            mismatch = Some("a dominant case failed to converge".to_string());
        }

        match mismatch {
            None => {
                passed += 1;
                if !json {
                    println!(
                        "  PASS: {slug} (Jacobi {} it, Gauss-Seidel {} it)",
                        jacobi.iterations, gauss_seidel.iterations
                    );
                }
            }
            Some(message) => {
                if !json {
                    println!("  FAIL: {slug} - {message}");
                }
                failures.push((slug.to_string(), message));
            }
        }
    }

    if json {
        let value = serde_json::json!({
            "total": total,
            "passed": passed,
            "failed": failures.len(),
            "failures": failures.iter().map(|(name, msg)| {
                serde_json::json!({"name": name, "message": msg})
            }).collect::<Vec<_>>()
        });
        match serde_json::to_string_pretty(&value) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Error serializing summary: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("\nSummary: {passed}/{total} cases passed");
        if !failures.is_empty() {
            println!("\nFailures:");
            for (name, msg) in &failures {
                println!("  {name}: {msg}");
            }
        }
    }

    if failures.is_empty() && total > 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
