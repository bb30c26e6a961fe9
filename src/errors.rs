/// Crate-wide result alias for differentiation operations.
pub type DiffResult<T> = Result<T, DiffError>;

#[derive(Debug, Clone, PartialEq)]
pub enum DiffError {
    // ---- Step size ----
    /// Finite-difference step must be finite and strictly positive.
    InvalidStepSize {
        step: f64,
        reason: &'static str,
    },

    // ---- Gradient oracle ----
    /// Gradient dimensions do not match the evaluation point's dimensions.
    GradientDimMismatch {
        expected: usize,
        found: usize,
    },

    /// The function is not differentiable at the queried point.
    NonDifferentiable {
        text: String,
    },

    // ---- Function evaluation ----
    /// The function or its gradient oracle failed to evaluate.
    EvaluationFailed {
        text: String,
    },
}

impl std::error::Error for DiffError {}

impl std::fmt::Display for DiffError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Step size ----
            DiffError::InvalidStepSize { step, reason } => {
                write!(f, "Invalid finite-difference step {step}: {reason}")
            }

            // ---- Gradient oracle ----
            DiffError::GradientDimMismatch { expected, found } => {
                write!(f, "Gradient dimension mismatch: expected {expected}, found {found}")
            }
            DiffError::NonDifferentiable { text } => {
                write!(f, "Function not differentiable at the queried point: {text}")
            }

            // ---- Function evaluation ----
            DiffError::EvaluationFailed { text } => {
                write!(f, "Function evaluation failed: {text}")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<DiffError> for pyo3::PyErr {
    fn from(err: DiffError) -> Self {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
