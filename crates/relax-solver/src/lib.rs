//! Stationary iterative solvers for relax.
//!
//! Two classical methods with identical termination machinery:
//! - [`solve_jacobi`]: simultaneous updates, order-independent sweep
//! - [`solve_gauss_seidel`]: sequential in-place updates
//!
//! Both take a validated [`relax_core::LinearSystem`] plus a
//! [`relax_core::SolverConfig`] and produce a [`SolverResult`] carrying the
//! last iterate, the per-sweep relative-error history, and advisory timing
//! telemetry. [`solve_both`] runs the pair for comparison (in parallel with
//! the `parallel` feature).

pub mod dispatch;
pub mod gauss_seidel;
pub mod jacobi;
pub mod result;

pub use dispatch::{solve, solve_both};
pub use gauss_seidel::solve_gauss_seidel;
pub use jacobi::solve_jacobi;
pub use result::{Method, SolverResult};
