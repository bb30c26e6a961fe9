//! hessian — finite-difference Hessian engine over exact gradient fields.
//!
//! Purpose
//! -------
//! Provide the crate's core operation: [`engine::hessian`], which assembles
//! the `d × d` matrix of second partial derivatives of a scalar function
//! from `4·d` exact gradient evaluations and one plain evaluation, using a
//! fourth-order central-difference stencil on the gradient field.
//!
//! Key behaviors
//! -------------
//! - Expose the engine ([`engine`]) together with its named stencil
//!   constants ([`stencil`]), validated configuration and result types
//!   ([`types`]), and precondition helpers ([`validation`]).
//! - Validate the step at [`StepSize`] construction and the oracle gradient
//!   dimension after every call; everything else (non-finite values from a
//!   badly scaled step, oracle-domain failures) passes through untouched.
//!
//! Invariants & assumptions
//! ------------------------
//! - `x.len()` = gradient length = Hessian row/column count for every call.
//! - The engine is stateless between calls and never mutates the caller's
//!   point or enforces symmetry of its output.
//!
//! Downstream usage
//! ----------------
//! - Callers implement [`Differentiable`](crate::oracle::Differentiable)
//!   (or wrap closures in [`AnalyticFn`](crate::oracle::AnalyticFn)) and
//!   invoke [`hessian`](engine::hessian) with a point and a [`StepSize`].
//! - Typical consumers are curvature users such as Laplace approximations
//!   and Newton-type optimizers; those layers live outside this crate.

pub mod engine;
pub mod stencil;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::engine::hessian;
pub use self::types::{DEFAULT_STEP, Hessian, HessianEval, StepSize};

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::engine::hessian;
    pub use super::types::{DEFAULT_STEP, Hessian, HessianEval, StepSize};
}
