//! Fourth-order central-difference stencil constants.
//!
//! The engine differentiates a gradient field once using the classical
//! five-point (four-evaluation) central-difference formula for a first
//! derivative:
//!
//! ```text
//! g'(x) ≈ [-g(x + 2ε) + g(x - 2ε) + 8·g(x + ε) - 8·g(x - ε)] / (12ε)
//! ```
//!
//! The weights annihilate every Taylor moment up to the fourth, so the
//! truncation error is `O(ε⁴)` and the formula is exact for any field whose
//! fifth derivative vanishes (in particular, polynomial fields of degree
//! ≤ 4). Naming the coefficients keeps that accuracy contract visible
//! instead of burying it in arithmetic.

/// Number of gradient evaluations per differentiated coordinate.
pub const STENCIL_POINTS: usize = 4;

/// Evaluation offsets in units of the step `ε`, ordered to match
/// [`STENCIL_WEIGHTS`].
pub const STENCIL_OFFSETS: [f64; STENCIL_POINTS] = [2.0, -2.0, 1.0, -1.0];

/// Combination weights applied to the gradients sampled at
/// [`STENCIL_OFFSETS`].
pub const STENCIL_WEIGHTS: [f64; STENCIL_POINTS] = [-1.0, 1.0, 8.0, -8.0];

/// Common divisor of the weighted sum, in units of the step `ε`.
pub const STENCIL_DIVISOR: f64 = 12.0;

/// Order of accuracy of the stencil: truncation error is `O(ε⁴)`.
pub const ACCURACY_ORDER: usize = 4;
