//! Core types for the relax stationary-solver workspace.
//!
//! This crate provides:
//! - [`LinearSystem`] and [`SolverConfig`], the immutable inputs to a solve
//! - Numeric primitives shared by the solvers and the analysis layer
//! - Input validation with advisory conditioning warnings
//! - A registry of named example systems with known exact solutions

pub mod cases;
pub mod error;
pub mod numeric;
pub mod system;
pub mod validate;

pub use cases::{CaseProperties, TestCase, all_cases, case};
pub use error::{Error, Result};
pub use numeric::{
    infinity_norm, is_diagonally_dominant, is_symmetric, relative_error, residual_norm,
};
pub use system::{LinearSystem, SolverConfig};
pub use validate::{ValidationReport, validate_system};
