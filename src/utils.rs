#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    errors::{DiffError, DiffResult},
    oracle::{
        traits::Differentiable,
        types::{Grad, GradientEval, Point, Value},
    },
};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
};

#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64",
        )
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// PyOracle — [`Differentiable`] over a pair of Python callables.
///
/// Holds a value callable `f(x) -> float` and a gradient callable
/// `grad(x) -> array_like` and forwards the trait facets to them, converting
/// points to NumPy arrays on the way in and coercing results on the way out.
/// Python exceptions surface as [`DiffError::EvaluationFailed`] and flow
/// through the engine like any other oracle failure.
#[cfg(feature = "python-bindings")]
pub struct PyOracle {
    value_fn: Py<PyAny>,
    grad_fn: Py<PyAny>,
}

#[cfg(feature = "python-bindings")]
impl PyOracle {
    pub fn new(value_fn: Py<PyAny>, grad_fn: Py<PyAny>) -> Self {
        Self { value_fn, grad_fn }
    }
}

#[cfg(feature = "python-bindings")]
impl Differentiable for PyOracle {
    fn value(&self, x: &Point) -> DiffResult<Value> {
        Python::with_gil(|py| {
            let arg = x.to_vec().into_pyarray(py);
            let out = self
                .value_fn
                .bind(py)
                .call1((arg,))
                .map_err(|e| DiffError::EvaluationFailed { text: e.to_string() })?;
            out.extract::<f64>().map_err(|_| DiffError::EvaluationFailed {
                text: "value callable must return a float".to_string(),
            })
        })
    }

    fn gradient(&self, x: &Point) -> DiffResult<GradientEval> {
        let value = self.value(x)?;
        let grad = Python::with_gil(|py| -> DiffResult<Grad> {
            let arg = x.to_vec().into_pyarray(py);
            let out = self
                .grad_fn
                .bind(py)
                .call1((arg,))
                .map_err(|e| DiffError::EvaluationFailed { text: e.to_string() })?;
            let arr = extract_f64_array(py, &out)
                .map_err(|e| DiffError::EvaluationFailed { text: e.to_string() })?;
            let slice = arr.as_slice().map_err(|_| DiffError::EvaluationFailed {
                text: "gradient callable must return a 1-D contiguous float64 array".to_string(),
            })?;
            Ok(Grad::from(slice.to_vec()))
        })?;
        Ok(GradientEval { value, grad })
    }
}

#[cfg(feature = "python-bindings")]
pub fn extract_point<'py>(py: Python<'py>, x: &Bound<'py, PyAny>) -> PyResult<Point> {
    let arr = extract_f64_array(py, x)?;
    let slice = arr.as_slice().map_err(|_| {
        PyValueError::new_err("x must be a 1-D contiguous float64 array or sequence")
    })?;
    Ok(Point::from(slice.to_vec()))
}
