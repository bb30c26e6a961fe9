//! hessian::engine — hybrid Hessian via exact gradients and finite differences.
//!
//! Purpose
//! -------
//! Compute the full matrix of second partial derivatives of a scalar
//! function by differentiating it once exactly (through the function's
//! gradient oracle) and once numerically (a fourth-order central-difference
//! stencil applied to the gradient field). This avoids second-order
//! autodiff while staying far more stable than double finite-differencing
//! the raw function.
//!
//! Key behaviors
//! -------------
//! - Assemble the Hessian column by column: four gradient-oracle calls per
//!   input dimension at symmetric offsets, combined with the named
//!   [`stencil`](crate::hessian::stencil) weights.
//! - Restore the working coordinate before moving to the next dimension, so
//!   perturbations never compound.
//! - Finish with one undifferentiated `value` call at the original point.
//!
//! Invariants & assumptions
//! ------------------------
//! - The caller's point is never mutated; the engine perturbs a private
//!   working copy.
//! - Every oracle gradient must have the point's length; any other length
//!   is a fatal [`DiffError::GradientDimMismatch`].
//! - The engine holds no state between calls and is fully reentrant.
//! - The output is NOT symmetrized. For smooth functions it comes out
//!   numerically close to its transpose, but that is an emergent property,
//!   not a guarantee.
//!
//! Conventions
//! -----------
//! - Cost is exactly `4·d` gradient evaluations plus one plain evaluation,
//!   with `O(ε⁴)` truncation error per column.
//! - Columns are mutually independent, so the per-dimension loop is
//!   embarrassingly parallel in principle; this implementation is
//!   single-threaded and synchronous.
//! - Oracle failures at perturbed points propagate to the caller
//!   unmodified; the engine never retries or substitutes.
//!
//! [`DiffError::GradientDimMismatch`]: crate::errors::DiffError::GradientDimMismatch
use crate::{
    errors::DiffResult,
    hessian::{
        stencil::{STENCIL_DIVISOR, STENCIL_OFFSETS, STENCIL_WEIGHTS},
        types::{Hessian, HessianEval, StepSize},
        validation::validate_grad_dim,
    },
    oracle::{
        traits::Differentiable,
        types::{Grad, Point},
    },
};

/// hessian — value and Hessian of `f` at `x` via the hybrid scheme.
///
/// Purpose
/// -------
/// Evaluate `f(x)` and approximate its full Hessian by applying the
/// fourth-order central-difference stencil to the exact gradient field of
/// `f`. Each gradient call already returns all `d` partial derivatives in
/// one pass, so the total cost is `O(d)` gradient evaluations rather than
/// the `O(d²)` function evaluations a doubly-finite-differenced Hessian
/// would need.
///
/// Parameters
/// ----------
/// - `f`: `&F`
///   Function to differentiate, supplying both facets of the
///   [`Differentiable`] capability. Its gradient oracle must be exact to
///   floating precision.
/// - `x`: `&Point`
///   Evaluation point of length `d ≥ 0`. Never mutated; the engine works
///   on a private copy.
/// - `step`: [`StepSize`]
///   Validated finite-difference step `ε`. Use `StepSize::default()` for
///   the fixed default `1e-3`, or `StepSize::new` to tune per problem.
///
/// Returns
/// -------
/// `DiffResult<HessianEval>`
///   - `Ok(eval)` with `eval.value = f(x)` from one undifferentiated call
///     and `eval.hessian` a `d × d` matrix whose column `i` is
///     `(-g₁ + g₂ + 8·g₃ - 8·g₄) / (12ε)` for gradients sampled at
///     `x[i] + {+2ε, -2ε, +ε, -ε}`.
///   - `Err(e)` when the oracle fails at any queried point or returns a
///     gradient of the wrong length.
///
/// Errors
/// ------
/// - [`DiffError::GradientDimMismatch`]
///   An oracle gradient's length differs from `x.len()`; checked after
///   every call so the failure names the offending evaluation.
/// - Any error raised by `f` itself (e.g.
///   [`DiffError::NonDifferentiable`], [`DiffError::EvaluationFailed`])
///   propagates unchanged, without wrapping, retrying, or substitution.
///
/// Panics
/// ------
/// - Never panics under the documented invariants.
///
/// Safety
/// ------
/// - No `unsafe` code is used.
///
/// Notes
/// -----
/// - For any function whose gradient field has vanishing fifth derivative
///   (quadratics, cubics, quartics), the stencil is exact up to rounding.
/// - The step trades truncation error (shrinks with `ε`) against rounding
///   error in the `12ε` division (grows as `ε` shrinks); the engine
///   performs no automatic tuning.
/// - `d = 0` is valid and yields an empty `0 × 0` matrix with
///   `value = f([])`.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use hybrid_hessian::hessian::engine::hessian;
/// # use hybrid_hessian::hessian::types::StepSize;
/// # use hybrid_hessian::oracle::adapters::AnalyticFn;
/// // f(x) = x₀² + x₀x₁ + x₁², a quadratic, so the stencil is exact.
/// let f = AnalyticFn::new(
///     |x: &ndarray::Array1<f64>| Ok(x[0] * x[0] + x[0] * x[1] + x[1] * x[1]),
///     |x: &ndarray::Array1<f64>| Ok(array![2.0 * x[0] + x[1], x[0] + 2.0 * x[1]]),
/// );
///
/// let eval = hessian(&f, &array![1.0, 2.0], StepSize::default()).unwrap();
/// assert_eq!(eval.value, 7.0);
/// assert!((eval.hessian[[0, 0]] - 2.0).abs() < 1e-9);
/// assert!((eval.hessian[[0, 1]] - 1.0).abs() < 1e-9);
/// ```
///
/// [`DiffError::GradientDimMismatch`]: crate::errors::DiffError::GradientDimMismatch
/// [`DiffError::NonDifferentiable`]: crate::errors::DiffError::NonDifferentiable
/// [`DiffError::EvaluationFailed`]: crate::errors::DiffError::EvaluationFailed
pub fn hessian<F: Differentiable>(f: &F, x: &Point, step: StepSize) -> DiffResult<HessianEval> {
    let dim = x.len();
    let eps = step.get();

    let mut x_work = x.clone();
    let mut column = Grad::zeros(dim);
    let mut hess = Hessian::zeros((dim, dim));

    for i in 0..dim {
        column.fill(0.0);
        for (&offset, &weight) in STENCIL_OFFSETS.iter().zip(STENCIL_WEIGHTS.iter()) {
            x_work[i] = x[i] + offset * eps;
            let eval = f.gradient(&x_work)?;
            validate_grad_dim(&eval.grad, dim)?;
            column.scaled_add(weight, &eval.grad);
        }
        // Restore before the next coordinate; perturbations must not compound.
        x_work[i] = x[i];
        column /= STENCIL_DIVISOR * eps;
        hess.column_mut(i).assign(&column);
    }

    let value = f.value(x)?;
    Ok(HessianEval { value, hessian: hess })
}
