//! Validation helpers for hybrid Hessian computation.
//!
//! This module centralizes the engine's precondition checks:
//!
//! - **Step checks**: [`validate_step`] ensures the finite-difference step
//!   is finite and strictly positive.
//! - **Gradient shape**: [`validate_grad_dim`] enforces that an oracle
//!   gradient matches the evaluation point's dimension.
//!
//! Deliberately absent is any finiteness or conditioning check on the
//! assembled Hessian: numerical degeneracy from a poorly chosen step is
//! documented caller responsibility, not an engine-detected error class.
use crate::{
    errors::{DiffError, DiffResult},
    oracle::types::Grad,
};

/// Validate a finite-difference step.
///
/// The value must be **finite** and **strictly positive**.
///
/// # Errors
/// Returns [`DiffError::InvalidStepSize`] if the value is non-finite or ≤ 0.0.
pub fn validate_step(step: f64) -> DiffResult<()> {
    if !step.is_finite() {
        return Err(DiffError::InvalidStepSize { step, reason: "Step must be finite." });
    }
    if step <= 0.0 {
        return Err(DiffError::InvalidStepSize { step, reason: "Step must be positive." });
    }
    Ok(())
}

/// Validate an oracle gradient's dimension against the evaluation point.
///
/// Checks `grad.len() == dim`. Entry values are not inspected: a non-finite
/// gradient is the oracle's report to make, and flows through otherwise.
///
/// # Errors
/// Returns [`DiffError::GradientDimMismatch`] if the length differs from `dim`.
pub fn validate_grad_dim(grad: &Grad, dim: usize) -> DiffResult<()> {
    if grad.len() != dim {
        return Err(DiffError::GradientDimMismatch { expected: dim, found: grad.len() });
    }
    Ok(())
}
