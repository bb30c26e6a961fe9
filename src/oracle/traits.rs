//! Differentiable-function capability used by the Hessian engine.
//!
//! A single trait, [`Differentiable`], models both roles a function plays
//! during hybrid Hessian computation: a plain value oracle and an exact
//! gradient oracle. Keeping both facets on one object means a caller cannot
//! accidentally supply inconsistent definitions for the two roles.
//!
//! Convention: the gradient must be *exact* to floating precision, e.g. an
//! analytic formula or reverse-mode automatic differentiation. Oracles that
//! finite-difference internally would silently degrade the fourth-order
//! accuracy of the engine and must not implement this trait.
use crate::{
    errors::DiffResult,
    oracle::types::{GradientEval, Point, Value},
};

/// A scalar-valued, multivariate function with an exact gradient oracle.
///
/// Required:
/// - `value(&Point) -> DiffResult<Value>`: evaluate `f(x)`. Pure and
///   side-effect-free; safe to call repeatedly at arbitrary points within
///   the function's domain.
/// - `gradient(&Point) -> DiffResult<GradientEval>`: evaluate `f(x)` and
///   its exact gradient `∇f(x)` in one pass, the way a reverse sweep over
///   the evaluation trace does.
///
/// Errors
/// ------
/// Both facets may fail, e.g. when the point lies outside the function's
/// domain ([`DiffError::EvaluationFailed`]) or the function is not
/// differentiable there ([`DiffError::NonDifferentiable`]). Failures pass
/// through the Hessian engine uninterpreted; there are no retries.
///
/// [`DiffError::EvaluationFailed`]: crate::errors::DiffError::EvaluationFailed
/// [`DiffError::NonDifferentiable`]: crate::errors::DiffError::NonDifferentiable
pub trait Differentiable {
    /// Evaluate `f(x)` without differentiation.
    fn value(&self, x: &Point) -> DiffResult<Value>;

    /// Evaluate `f(x)` together with its exact gradient `∇f(x)`.
    ///
    /// The returned gradient must have length `x.len()`; the engine rejects
    /// any other length with [`DiffError::GradientDimMismatch`] rather than
    /// truncating or padding.
    ///
    /// [`DiffError::GradientDimMismatch`]: crate::errors::DiffError::GradientDimMismatch
    fn gradient(&self, x: &Point) -> DiffResult<GradientEval>;
}

impl<T: Differentiable + ?Sized> Differentiable for &T {
    fn value(&self, x: &Point) -> DiffResult<Value> {
        (**self).value(x)
    }

    fn gradient(&self, x: &Point) -> DiffResult<GradientEval> {
        (**self).gradient(x)
    }
}
