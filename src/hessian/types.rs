//! hessian::types — matrix aliases, step-size configuration, and results.
//!
//! Purpose
//! -------
//! Define the output types of the Hessian engine and the validated
//! [`StepSize`] configuration, keeping the engine itself free of ad-hoc
//! checks. Construction is the validation boundary: a [`StepSize`] that
//! exists is always finite and strictly positive.
//!
//! Conventions
//! -----------
//! - `Hessian` is a dense square matrix with dimension
//!   `x.len() × x.len()`, freshly allocated and fully written per engine
//!   invocation; there are no partial-update semantics.
//! - The default step [`DEFAULT_STEP`] is a fixed constant, not an adaptive
//!   policy; callers tune it per problem via [`StepSize::new`]. Shrinking
//!   the step reduces truncation error but amplifies floating-point
//!   rounding error, and the engine performs no automatic tuning.
use crate::{
    errors::DiffResult,
    hessian::validation::validate_step,
    oracle::types::Value,
};
use ndarray::Array2;

/// Dense Hessian matrix: `d × d` for `d = x.len()`.
///
/// Alias for `ndarray::Array2<f64>`. The engine does not symmetrize its
/// output; near-symmetry is an emergent numerical property of smooth
/// functions, not a guarantee.
pub type Hessian = Array2<f64>;

/// Default finite-difference step `ε`.
pub const DEFAULT_STEP: f64 = 1e-3;

/// Validated finite-difference step `ε`.
///
/// Invariant: the wrapped value is finite and strictly positive. The
/// reference scheme accepted any step and silently produced NaN or garbage
/// for bad values; this type rejects them at construction with
/// [`DiffError::InvalidStepSize`].
///
/// [`DiffError::InvalidStepSize`]: crate::errors::DiffError::InvalidStepSize
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepSize(f64);

impl StepSize {
    /// Construct a validated step size.
    ///
    /// # Errors
    /// Returns [`DiffError::InvalidStepSize`] if `step` is non-finite or
    /// ≤ 0.0.
    ///
    /// [`DiffError::InvalidStepSize`]: crate::errors::DiffError::InvalidStepSize
    pub fn new(step: f64) -> DiffResult<Self> {
        validate_step(step)?;
        Ok(Self(step))
    }

    /// The wrapped step value `ε`.
    pub fn get(&self) -> f64 {
        self.0
    }
}

impl Default for StepSize {
    /// The fixed default step [`DEFAULT_STEP`] (= `1e-3`).
    fn default() -> Self {
        Self(DEFAULT_STEP)
    }
}

/// Value-and-Hessian pair returned by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct HessianEval {
    /// `f(x)` from one undifferentiated call at the unperturbed point.
    pub value: Value,
    /// `d × d` matrix of second partial derivatives, column `i` holding the
    /// stencil-differentiated gradient field along coordinate `i`.
    pub hessian: Hessian,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DiffError;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover `StepSize` construction and defaults. Step rejection
    // details live with `validation::validate_step`.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // A positive finite step is accepted and round-trips through `get`.
    fn step_size_accepts_positive_finite_values() {
        let step = StepSize::new(1e-4).unwrap();
        assert_eq!(step.get(), 1e-4);
    }

    #[test]
    // Purpose
    // -------
    // The default step matches the documented fixed constant.
    fn step_size_default_is_documented_constant() {
        assert_eq!(StepSize::default().get(), DEFAULT_STEP);
        assert_eq!(DEFAULT_STEP, 1e-3);
    }

    #[test]
    // Purpose
    // -------
    // Non-positive and non-finite steps are rejected at construction rather
    // than producing garbage downstream.
    fn step_size_rejects_invalid_values() {
        for bad in [0.0, -1e-3, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            match StepSize::new(bad) {
                Err(DiffError::InvalidStepSize { step, .. }) => {
                    assert!(step.is_nan() || step == bad);
                }
                other => panic!("Expected InvalidStepSize for {bad}, got {other:?}"),
            }
        }
    }
}
