//! Named example systems with known exact solutions.
//!
//! Seven predefined (matrix, rhs, parameters, exact solution) fixtures used
//! for round-trip verification and demos. The registry is built once and
//! never mutated; iteration order is the definition order.

use std::sync::OnceLock;

use indexmap::IndexMap;
use nalgebra::DVector;

use crate::system::{LinearSystem, SolverConfig};

/// Structural properties of a fixture, stated up front rather than derived.
#[derive(Debug, Clone)]
pub struct CaseProperties {
    /// Strictly diagonally dominant row-wise.
    pub diagonally_dominant: bool,
    /// Symmetric within the comparator's tolerance band.
    pub symmetric: bool,
    /// Expected behavior, for display.
    pub note: &'static str,
}

/// A predefined example system.
#[derive(Debug, Clone)]
pub struct TestCase {
    /// Human-readable title.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// The system to solve.
    pub system: LinearSystem,
    /// Per-case stopping parameters.
    pub config: SolverConfig,
    /// Known exact solution for round-trip checks.
    pub exact_solution: DVector<f64>,
    /// Stated structural properties.
    pub properties: CaseProperties,
}

impl TestCase {
    fn new(
        name: &'static str,
        description: &'static str,
        rows: &[&[f64]],
        b: &[f64],
        tolerance: f64,
        max_iterations: usize,
        exact: &[f64],
        properties: CaseProperties,
    ) -> Self {
        Self {
            name,
            description,
            // Fixture data is literal and known-valid.
            system: LinearSystem::from_rows(rows, b).expect("fixture system must be valid"),
            config: SolverConfig::new(tolerance, max_iterations),
            exact_solution: DVector::from_row_slice(exact),
            properties,
        }
    }
}

/// All fixtures, keyed by slug, in definition order.
pub fn all_cases() -> &'static IndexMap<&'static str, TestCase> {
    static CASES: OnceLock<IndexMap<&'static str, TestCase>> = OnceLock::new();
    CASES.get_or_init(build_cases)
}

/// Look up a single fixture by slug.
pub fn case(slug: &str) -> Option<&'static TestCase> {
    all_cases().get(slug)
}

fn build_cases() -> IndexMap<&'static str, TestCase> {
    let mut cases = IndexMap::new();

    cases.insert(
        "dominant_3x3",
        TestCase::new(
            "3x3 diagonally dominant",
            "Strong diagonal dominance, guaranteed fast convergence",
            &[&[10.0, -1.0, 2.0], &[-1.0, 11.0, -1.0], &[2.0, -1.0, 10.0]],
            &[6.0, 25.0, -11.0],
            1e-4,
            100,
            &[217.0 / 208.0, 59.0 / 26.0, -225.0 / 208.0],
            CaseProperties {
                diagonally_dominant: true,
                symmetric: true,
                note: "Fast convergence expected",
            },
        ),
    );

    cases.insert(
        "moderate_4x4",
        TestCase::new(
            "4x4 moderately dominant",
            "Moderate diagonal dominance, asymmetric",
            &[
                &[4.0, 1.0, -1.0, 0.0],
                &[1.0, 4.0, -1.0, -1.0],
                &[-1.0, -1.0, 5.0, 1.0],
                &[0.0, -1.0, 1.0, 3.0],
            ],
            &[8.0, 7.0, 4.0, -5.0],
            1e-4,
            150,
            &[387.0 / 179.0, 215.0 / 179.0, 331.0 / 179.0, -337.0 / 179.0],
            CaseProperties {
                diagonally_dominant: true,
                symmetric: false,
                note: "Moderate convergence",
            },
        ),
    );

    cases.insert(
        "simple_2x2",
        TestCase::new(
            "2x2 simple",
            "Small system for basic walkthroughs",
            &[&[5.0, 1.0], &[1.0, 3.0]],
            &[10.0, 8.0],
            1e-3,
            50,
            &[11.0 / 7.0, 15.0 / 7.0],
            CaseProperties {
                diagonally_dominant: true,
                symmetric: true,
                note: "Very fast convergence",
            },
        ),
    );

    cases.insert(
        "weak_5x5",
        TestCase::new(
            "5x5 weakly dominant",
            "Weak dominance; the gap between the two methods shows clearly",
            &[
                &[8.0, -1.0, 0.0, -1.0, 0.0],
                &[-1.0, 8.0, -1.0, 0.0, -1.0],
                &[0.0, -1.0, 8.0, -1.0, 0.0],
                &[-1.0, 0.0, -1.0, 8.0, -1.0],
                &[0.0, -1.0, 0.0, -1.0, 8.0],
            ],
            &[10.0, 15.0, 20.0, 15.0, 10.0],
            1e-5,
            200,
            &[225.0 / 116.0, 80.0 / 29.0, 185.0 / 58.0, 80.0 / 29.0, 225.0 / 116.0],
            CaseProperties {
                diagonally_dominant: true,
                symmetric: true,
                note: "Gauss-Seidel roughly halves the Jacobi iteration count",
            },
        ),
    );

    cases.insert(
        "non_dominant_3x3",
        TestCase::new(
            "3x3 not diagonally dominant",
            "No convergence guarantee; divergence is an acceptable outcome",
            &[&[1.0, 2.0, 3.0], &[4.0, 1.0, 2.0], &[3.0, 4.0, 1.0]],
            &[14.0, 11.0, 16.0],
            1e-4,
            100,
            &[7.0 / 9.0, 25.0 / 9.0, 23.0 / 9.0],
            CaseProperties {
                diagonally_dominant: false,
                symmetric: false,
                note: "Convergence not guaranteed; may diverge",
            },
        ),
    );

    cases.insert(
        "medium_6x6",
        TestCase::new(
            "6x6 medium",
            "Medium-size system for efficiency comparison",
            &[
                &[10.0, 1.0, 0.0, 0.0, 1.0, 0.0],
                &[1.0, 10.0, 1.0, 0.0, 0.0, 1.0],
                &[0.0, 1.0, 10.0, 1.0, 0.0, 0.0],
                &[0.0, 0.0, 1.0, 10.0, 1.0, 0.0],
                &[1.0, 0.0, 0.0, 1.0, 10.0, 1.0],
                &[0.0, 1.0, 0.0, 0.0, 1.0, 10.0],
            ],
            &[12.0, 13.0, 12.0, 12.0, 13.0, 12.0],
            1e-4,
            200,
            &[1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
            CaseProperties {
                diagonally_dominant: true,
                symmetric: true,
                note: "Efficiency behavior on medium matrices",
            },
        ),
    );

    cases.insert(
        "tridiagonal_5x5",
        TestCase::new(
            "5x5 tridiagonal",
            "Tridiagonal matrix typical of finite-difference discretizations",
            &[
                &[4.0, -1.0, 0.0, 0.0, 0.0],
                &[-1.0, 4.0, -1.0, 0.0, 0.0],
                &[0.0, -1.0, 4.0, -1.0, 0.0],
                &[0.0, 0.0, -1.0, 4.0, -1.0],
                &[0.0, 0.0, 0.0, -1.0, 4.0],
            ],
            &[5.0, 0.0, 0.0, 0.0, 5.0],
            1e-4,
            100,
            &[35.0 / 26.0, 5.0 / 13.0, 5.0 / 26.0, 5.0 / 13.0, 35.0 / 26.0],
            CaseProperties {
                diagonally_dominant: true,
                symmetric: true,
                note: "Guaranteed convergence, banded structure",
            },
        ),
    );

    cases
}
