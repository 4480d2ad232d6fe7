//! Post-run analysis for Jacobi/Gauss-Seidel pairs.
//!
//! [`compare`] scores two completed runs against each other and the system
//! they solved; [`diagnose`] reads the recorded error histories for rate,
//! stability, and spectral radius estimates.

pub mod compare;
pub mod convergence;
pub mod report;

pub use compare::{ComparisonReport, EfficiencyScore, compare};
pub use convergence::{
    ConvergenceDiagnostics, RateEstimate, SpectralRadiusEstimate, SpeedComparison, Stability,
    diagnose, linear_rate, oscillation_count,
};
pub use report::MethodPair;
