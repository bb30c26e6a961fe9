//! oracle::types — shared numeric aliases for differentiable functions.
//!
//! Purpose
//! -------
//! Centralize the vector types exchanged between user functions, gradient
//! oracles, and the Hessian engine. Keeping them in one place lets the rest
//! of the crate stay agnostic to the `ndarray` backend.
//!
//! Conventions
//! -----------
//! - `Point` and `Grad` are treated conceptually as column vectors with
//!   equal length `d` for any single evaluation.
//! - `GradientEval` pairs are freshly produced per oracle call and never
//!   retained across calls.
use ndarray::Array1;

/// Evaluation point `x` supplied by the caller.
///
/// Alias for `ndarray::Array1<f64>`, used as the canonical input type
/// throughout the crate.
pub type Point = Array1<f64>;

/// Gradient vector `∇f(x)`, matching the shape of [`Point`].
pub type Grad = Array1<f64>;

/// Scalar function value `f(x)`.
pub type Value = f64;

/// Value-and-gradient pair returned by a gradient oracle.
///
/// Reverse-mode automatic differentiation produces the function value as a
/// byproduct of the gradient sweep, so both travel together. The Hessian
/// engine uses only `grad` at perturbed points; `value` is retained for
/// callers that want the scalar as well.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientEval {
    /// Function value `f(x)` at the queried point.
    pub value: Value,
    /// Exact gradient `∇f(x)` at the queried point, length `x.len()`.
    pub grad: Grad,
}
