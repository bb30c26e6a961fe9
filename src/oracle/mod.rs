//! oracle — differentiable-function capability and adapters.
//!
//! Purpose
//! -------
//! Define the abstract capability the Hessian engine consumes: a scalar
//! function that can report its value and its *exact* gradient at a point.
//! The engine never depends on a specific autodiff technology; anything that
//! implements [`Differentiable`] can supply gradients, whether a reverse-mode
//! tape, dual numbers, or a hand-derived formula.
//!
//! Key behaviors
//! -------------
//! - Expose [`Differentiable`] with its two facets, `value` and `gradient`,
//!   on one object so the undifferentiated and differentiated roles of a
//!   function cannot drift apart.
//! - Provide [`AnalyticFn`] for wrapping closure pairs without a trait impl.
//! - Define the canonical numeric aliases ([`Point`], [`Grad`], [`Value`])
//!   and the [`GradientEval`] pair produced per oracle call.
//!
//! Invariants & assumptions
//! ------------------------
//! - Gradients are exact to floating precision; no finite differencing
//!   happens inside an oracle.
//! - Oracles are reentrant and side-effect-free; the engine may query them
//!   repeatedly at arbitrary points within the function's domain.
//! - Failures are reported as [`DiffError`](crate::errors::DiffError)
//!   values, never panics, and pass through the engine uninterpreted.

pub mod adapters;
pub mod traits;
pub mod types;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::adapters::AnalyticFn;
pub use self::traits::Differentiable;
pub use self::types::{Grad, GradientEval, Point, Value};

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::adapters::AnalyticFn;
    pub use super::traits::Differentiable;
    pub use super::types::{Grad, GradientEval, Point, Value};
}
