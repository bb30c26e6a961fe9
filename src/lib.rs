//! hybrid_hessian — Hessians from exact gradients and finite differences.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the hybrid Hessian engine to Python via the `_hybrid_hessian`
//! extension module. The engine computes all second partial derivatives of
//! a scalar function by differentiating it once exactly (through a
//! caller-supplied gradient oracle) and once numerically (a fourth-order
//! central-difference stencil over the gradient field).
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules ([`oracle`] and [`hessian`]) as the
//!   public crate surface, plus the shared error types in [`errors`].
//! - When the `python-bindings` feature is enabled, define the
//!   Python-facing `HybridHessian` class and the `#[pymodule]` initializer
//!   for the `_hybrid_hessian` extension.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work lives in the inner Rust modules; this file performs
//!   only FFI glue, input coercion, and error mapping.
//! - Gradient oracles are exact to floating precision (analytic or
//!   autodiff-backed); the engine never finite-differences the raw function
//!   twice.
//!
//! Conventions
//! -----------
//! - Vectors and matrices are `ndarray` containers over `f64` throughout.
//! - The numeric core performs no I/O and no logging; reporting is a
//!   front-end concern.
//! - Errors from core code are propagated as [`errors::DiffError`] values
//!   internally and converted to `PyErr` at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend on [`hessian::hessian`] and the
//!   [`oracle::Differentiable`] trait directly (or import
//!   [`prelude`]); the PyO3 items are considered internal plumbing.
//! - The Python packaging layer imports the `_hybrid_hessian` module
//!   defined here and wraps its class in user-facing APIs.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules
//!   and by the integration suite under `tests/`.
//! - The PyO3 surface is expected to be smoke-tested from Python; it is
//!   deliberately thin.

pub mod errors;
pub mod hessian;
pub mod oracle;
pub mod utils;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use hybrid_hessian::prelude::*;
//
// to import the main crate surface in a single line.

pub mod prelude {
    pub use crate::errors::{DiffError, DiffResult};
    pub use crate::hessian::prelude::*;
    pub use crate::oracle::prelude::*;
}

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    hessian::{engine, types::{HessianEval, StepSize}},
    utils::{PyOracle, extract_point},
};

/// HybridHessian — Python-facing wrapper for the hybrid Hessian engine.
///
/// Purpose
/// -------
/// Represent the result of one hybrid Hessian computation when called from
/// Python, forwarding all numerical work to [`engine::hessian`].
///
/// Key behaviors
/// -------------
/// - Validate and convert the Python inputs: two callables (value and
///   gradient), a 1-D point, and an optional step size.
/// - Run the engine once at construction and store the outcome internally.
/// - Expose `value` and `hessian` as read-only Python properties.
///
/// Parameters
/// ----------
/// Constructed from Python via `HybridHessian(f, grad, x, epsilon=None)`:
/// - `f`: callable mapping a 1-D float64 array to a float.
/// - `grad`: callable mapping a 1-D float64 array to its exact gradient as
///   an array-like of matching length.
/// - `x`: 1-D array-like of `f64`, the evaluation point.
/// - `epsilon`: optional positive finite step; defaults to `1e-3`.
///
/// Fields
/// ------
/// - `inner`: [`HessianEval`]
///   Rust-side value-and-Hessian pair used by the accessors.
///
/// Invariants
/// ----------
/// - `inner.hessian` is `d × d` with `d = len(x)` at construction time.
///
/// Notes
/// -----
/// - This type exists solely for the PyO3 binding surface; native Rust code
///   should call [`engine::hessian`] directly.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "hybrid_hessian")]
pub struct HybridHessian {
    /// The engine outcome for the constructed point.
    inner: HessianEval,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl HybridHessian {
    /// Value and Hessian of `f` at `x`, from exact gradients plus a
    /// fourth-order central-difference stencil.
    #[new]
    #[pyo3(
        text_signature = "(f, grad, x, /, epsilon=None)",
        signature = (f, grad, x, epsilon = None)
    )]
    pub fn compute<'py>(
        py: Python<'py>, f: &Bound<'py, PyAny>, grad: &Bound<'py, PyAny>, x: &Bound<'py, PyAny>,
        epsilon: Option<f64>,
    ) -> PyResult<HybridHessian> {
        if !f.is_callable() {
            return Err(PyValueError::new_err("f must be callable"));
        }
        if !grad.is_callable() {
            return Err(PyValueError::new_err("grad must be callable"));
        }

        let point = extract_point(py, x)?;
        let step = match epsilon {
            Some(eps) => StepSize::new(eps)?,
            None => StepSize::default(),
        };

        let oracle = PyOracle::new(f.clone().unbind(), grad.clone().unbind());
        let result = engine::hessian(&oracle, &point, step)?;
        Ok(HybridHessian { inner: result })
    }

    /// The function value `f(x)` from one undifferentiated call.
    #[getter]
    pub fn value(&self) -> f64 {
        self.inner.value
    }

    /// The `d × d` Hessian matrix, row-major.
    #[getter]
    pub fn hessian(&self) -> Vec<Vec<f64>> {
        let (nrows, _ncols) = self.inner.hessian.dim();
        let mut out = Vec::with_capacity(nrows);
        for i in 0..nrows {
            out.push(self.inner.hessian.row(i).to_vec());
        }
        out
    }
}

/// _hybrid_hessian — PyO3 module initializer for the Python extension.
///
/// Registers the [`HybridHessian`] class; invoked automatically by Python
/// when importing the compiled extension.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _hybrid_hessian<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_class::<HybridHessian>()?;
    Ok(())
}
