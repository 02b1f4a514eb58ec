use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;

use crate::{HashedLcs, LcsConfig, LcsError, LcsFinder};

fn to_py_err(err: LcsError) -> PyErr {
    match err {
        LcsError::StartOutOfRange { .. } => PyIndexError::new_err(err.to_string()),
        other => PyValueError::new_err(other.to_string()),
    }
}

#[pyclass(name = "LcsFinder")]
pub struct PyLcsFinder {
    inner: HashedLcs,
}

#[pymethods]
impl PyLcsFinder {
    #[new]
    #[pyo3(signature = (word_sequence, k = 3))]
    fn new(word_sequence: Vec<String>, k: usize) -> PyResult<Self> {
        let inner = HashedLcs::with_config(&LcsConfig::with_k(k), &word_sequence).map_err(to_py_err)?;
        Ok(PyLcsFinder { inner })
    }

    fn length_of_lcs_from_start(&self, small_sequence: Vec<String>, start_idx: usize) -> PyResult<usize> {
        self.inner
            .length_of_lcs_from_start(&small_sequence, start_idx)
            .map_err(to_py_err)
    }

    fn lcs_length(&self, small_sequence: Vec<String>) -> usize {
        self.inner.lcs_length(&small_sequence)
    }

    /// Runs as (start, len) pairs.
    fn greedy_segment(&self, small_sequence: Vec<String>) -> Vec<(usize, usize)> {
        self.inner
            .greedy_segment(&small_sequence)
            .into_iter()
            .map(|run| (run.start, run.len))
            .collect()
    }

    fn greedy_lcs_markdown(&self, small_sequence: Vec<String>) -> String {
        let runs = self.inner.greedy_segment(&small_sequence);
        crate::render::to_markdown(&small_sequence, &runs)
    }
}

#[pymodule]
fn copyspan_py(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<PyLcsFinder>()?;
    Ok(())
}
