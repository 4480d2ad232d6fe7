//! Shared building blocks for the report types.

use relax_solver::Method;
use serde::{Serialize, Serializer};

/// A value recorded once per method.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MethodPair<T> {
    pub jacobi: T,
    pub gauss_seidel: T,
}

impl<T> MethodPair<T> {
    pub fn new(jacobi: T, gauss_seidel: T) -> Self {
        Self {
            jacobi,
            gauss_seidel,
        }
    }

    /// The entry belonging to `method`.
    pub fn get(&self, method: Method) -> &T {
        match method {
            Method::Jacobi => &self.jacobi,
            Method::GaussSeidel => &self.gauss_seidel,
        }
    }
}

/// Round to a fixed number of decimal places, for report fields that are
/// meant to be read by humans.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Serialize an optional [`Method`] as its display name.
pub(crate) fn method_name<S: Serializer>(
    method: &Option<Method>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match method {
        Some(m) => serializer.serialize_some(&m.to_string()),
        None => serializer.serialize_none(),
    }
}
