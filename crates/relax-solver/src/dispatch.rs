//! Method dispatch and paired execution of the two solvers.

use relax_core::{LinearSystem, Result, SolverConfig};

use crate::gauss_seidel::solve_gauss_seidel;
use crate::jacobi::solve_jacobi;
use crate::result::{Method, SolverResult};

/// Solve with the given method.
pub fn solve(
    method: Method,
    system: &LinearSystem,
    config: &SolverConfig,
) -> Result<SolverResult> {
    match method {
        Method::Jacobi => solve_jacobi(system, config),
        Method::GaussSeidel => solve_gauss_seidel(system, config),
    }
}

/// Run both methods on the same system and return (Jacobi, Gauss-Seidel).
///
/// The two runs are independent and share only read-only inputs. With the
/// `parallel` feature they execute on separate rayon threads; this is a
/// throughput optimization only and never changes either result. The
/// Gauss-Seidel sweep itself stays sequential either way, since its
/// in-place updates are order-dependent by definition.
pub fn solve_both(
    system: &LinearSystem,
    config: &SolverConfig,
) -> Result<(SolverResult, SolverResult)> {
    #[cfg(feature = "parallel")]
    {
        let (jacobi, gauss_seidel) = rayon::join(
            || solve_jacobi(system, config),
            || solve_gauss_seidel(system, config),
        );
        Ok((jacobi?, gauss_seidel?))
    }

    #[cfg(not(feature = "parallel"))]
    {
        Ok((
            solve_jacobi(system, config)?,
            solve_gauss_seidel(system, config)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dominant_3x3() -> LinearSystem {
        LinearSystem::from_rows(
            &[&[10.0, -1.0, 2.0], &[-1.0, 11.0, -1.0], &[2.0, -1.0, 10.0]],
            &[6.0, 25.0, -11.0],
        )
        .unwrap()
    }

    #[test]
    fn dispatch_matches_direct_calls() {
        let system = dominant_3x3();
        let config = SolverConfig::default();

        let via_dispatch = solve(Method::Jacobi, &system, &config).unwrap();
        let direct = solve_jacobi(&system, &config).unwrap();
        assert_eq!(via_dispatch.iterations, direct.iterations);
        assert_eq!(via_dispatch.solution, direct.solution);

        let via_dispatch = solve(Method::GaussSeidel, &system, &config).unwrap();
        let direct = solve_gauss_seidel(&system, &config).unwrap();
        assert_eq!(via_dispatch.iterations, direct.iterations);
        assert_eq!(via_dispatch.solution, direct.solution);
    }

    #[test]
    fn solve_both_returns_methods_in_order() {
        let system = dominant_3x3();
        let (jacobi, gauss_seidel) = solve_both(&system, &SolverConfig::default()).unwrap();

        assert_eq!(jacobi.method, Method::Jacobi);
        assert_eq!(gauss_seidel.method, Method::GaussSeidel);
        assert!(jacobi.converged && gauss_seidel.converged);
    }
}
