//! Closure adapters for the [`Differentiable`] capability.
//!
//! Purpose
//! -------
//! Let callers with hand-derived gradients, or with gradients produced by an
//! external autodiff engine behind a closure, plug into the Hessian engine
//! without writing a trait impl. [`AnalyticFn`] bundles a value closure and
//! a gradient closure into one logical function object.
//!
//! Conventions
//! -----------
//! - Both closures are fallible and report failures as [`DiffError`] values;
//!   panicking closures are considered programmer errors.
//! - The gradient closure returns only `∇f(x)`; the adapter pairs it with a
//!   value evaluation to satisfy the [`GradientEval`] contract.
//!
//! [`DiffError`]: crate::errors::DiffError
use crate::{
    errors::DiffResult,
    oracle::{
        traits::Differentiable,
        types::{Grad, GradientEval, Point, Value},
    },
};

/// A [`Differentiable`] built from a value closure and a gradient closure.
///
/// The gradient closure must be exact (analytic or autodiff-backed); pairing
/// it with the value closure on one object keeps the two facets of the
/// function consistent by construction.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use hybrid_hessian::oracle::adapters::AnalyticFn;
/// # use hybrid_hessian::oracle::traits::Differentiable;
/// // f(x) = x₀² + x₀x₁ + x₁² with its analytic gradient.
/// let f = AnalyticFn::new(
///     |x: &ndarray::Array1<f64>| Ok(x[0] * x[0] + x[0] * x[1] + x[1] * x[1]),
///     |x: &ndarray::Array1<f64>| Ok(array![2.0 * x[0] + x[1], x[0] + 2.0 * x[1]]),
/// );
///
/// let x = array![1.0, 2.0];
/// assert_eq!(f.value(&x).unwrap(), 7.0);
/// assert_eq!(f.gradient(&x).unwrap().grad, array![4.0, 5.0]);
/// ```
pub struct AnalyticFn<V, G> {
    value_fn: V,
    grad_fn: G,
}

impl<V, G> AnalyticFn<V, G>
where
    V: Fn(&Point) -> DiffResult<Value>,
    G: Fn(&Point) -> DiffResult<Grad>,
{
    /// Bundle a value closure and a gradient closure into one function object.
    pub fn new(value_fn: V, grad_fn: G) -> Self {
        Self { value_fn, grad_fn }
    }
}

impl<V, G> Differentiable for AnalyticFn<V, G>
where
    V: Fn(&Point) -> DiffResult<Value>,
    G: Fn(&Point) -> DiffResult<Grad>,
{
    fn value(&self, x: &Point) -> DiffResult<Value> {
        (self.value_fn)(x)
    }

    fn gradient(&self, x: &Point) -> DiffResult<GradientEval> {
        let value = (self.value_fn)(x)?;
        let grad = (self.grad_fn)(x)?;
        Ok(GradientEval { value, grad })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DiffError;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Wiring of the value and gradient closures through the trait facets.
    // - Propagation of closure errors out of both facets.
    //
    // They intentionally DO NOT cover:
    // - Hessian-engine behavior on adapted functions (covered in the engine
    //   and integration tests).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that both facets of `AnalyticFn` delegate to the supplied
    // closures and agree on the function value.
    //
    // Given
    // -----
    // - f(x) = ||x||² with its analytic gradient 2x.
    //
    // Expect
    // ------
    // - `value` returns the squared norm.
    // - `gradient` returns the same value plus the gradient 2x.
    fn analytic_fn_delegates_to_both_closures() {
        // Arrange
        let f = AnalyticFn::new(|x: &Point| Ok(x.dot(x)), |x: &Point| Ok(x.mapv(|v| 2.0 * v)));
        let x = array![3.0, 4.0];

        // Act
        let value = f.value(&x).unwrap();
        let eval = f.gradient(&x).unwrap();

        // Assert
        assert_eq!(value, 25.0);
        assert_eq!(eval.value, 25.0);
        assert_eq!(eval.grad, array![6.0, 8.0]);
    }

    #[test]
    // Purpose
    // -------
    // Ensure that a failing gradient closure surfaces its error unmodified
    // through the `gradient` facet.
    //
    // Given
    // -----
    // - A value closure that succeeds and a gradient closure that reports a
    //   `NonDifferentiable` error.
    //
    // Expect
    // ------
    // - `gradient` returns exactly the closure's error.
    fn analytic_fn_propagates_gradient_closure_error() {
        // Arrange
        let f = AnalyticFn::new(
            |x: &Point| Ok(x.sum()),
            |_: &Point| {
                Err(DiffError::NonDifferentiable { text: "kink at the origin".to_string() })
            },
        );
        let x = array![0.0];

        // Act
        let result = f.gradient(&x);

        // Assert
        assert_eq!(
            result,
            Err(DiffError::NonDifferentiable { text: "kink at the origin".to_string() })
        );
    }

    #[test]
    // Purpose
    // -------
    // Ensure that a failing value closure also fails the `gradient` facet,
    // since the oracle contract returns a value-and-gradient pair.
    //
    // Given
    // -----
    // - A value closure that reports `EvaluationFailed` and a gradient
    //   closure that would succeed.
    //
    // Expect
    // ------
    // - Both `value` and `gradient` return the value closure's error.
    fn analytic_fn_propagates_value_closure_error_through_gradient() {
        // Arrange
        let f = AnalyticFn::new(
            |_: &Point| {
                Err(DiffError::EvaluationFailed { text: "outside the domain".to_string() })
            },
            |x: &Point| Ok(x.clone()),
        );
        let x = array![1.0];

        // Act / Assert
        let expected = DiffError::EvaluationFailed { text: "outside the domain".to_string() };
        assert_eq!(f.value(&x), Err(expected.clone()));
        assert_eq!(f.gradient(&x), Err(expected));
    }
}
