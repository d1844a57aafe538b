//! Game bindings for Python.

use pyo3::exceptions::{PyKeyError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyInt, PyList};

use crate::core::{MagicNumber, MagicNumberSource, MashError, MashRng, RawCategory, ThreadMagicNumbers};
use crate::engine::{EliminationEngine, Fortune};

fn to_py_err(err: MashError) -> PyErr {
    match err {
        MashError::InvalidArgument(msg) => PyValueError::new_err(msg),
        MashError::MalformedInput(msg) => PyKeyError::new_err(msg),
    }
}

fn fortune_to_dict<'py>(py: Python<'py>, fortune: &Fortune) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    for (name, option) in fortune.iter() {
        dict.set_item(name, option)?;
    }
    Ok(dict)
}

/// Python ints are unbounded; anything past `i64` is out of range, not an
/// `OverflowError`.
fn magic_number_arg(value: &Bound<'_, PyAny>) -> PyResult<MagicNumber> {
    let int = value.downcast::<PyInt>()?;
    let magic = match int.extract::<i64>() {
        Ok(n) => MagicNumber::new(n),
        Err(_) => int.str()?.to_cow()?.parse(),
    };
    magic.map_err(to_py_err)
}

fn raw_category(item: &Bound<'_, PyAny>) -> PyResult<RawCategory> {
    let dict = item.downcast::<PyDict>()?;
    let name = match dict.get_item("name")? {
        Some(value) => Some(value.extract::<String>()?),
        None => None,
    };
    let options = match dict.get_item("options")? {
        Some(value) => Some(value.extract::<Vec<String>>()?),
        None => None,
    };
    Ok(RawCategory { name, options })
}

/// Play a game.
///
/// # Arguments
/// - categories: list of `{"name": str, "options": list[str]}` dicts
/// - magic_number: integer in [2, 10]
/// - legacy: reproduce the historic value-based elimination
///
/// Raises ValueError for a magic number outside [2, 10] (of any size),
/// TypeError for a non-int magic number and KeyError for a malformed
/// category.
#[pyfunction]
#[pyo3(signature = (categories, magic_number, legacy = false))]
pub fn play_mash<'py>(
    py: Python<'py>,
    categories: &Bound<'py, PyList>,
    magic_number: &Bound<'py, PyAny>,
    legacy: bool,
) -> PyResult<Bound<'py, PyDict>> {
    let magic = magic_number_arg(magic_number)?;
    let raw = categories
        .iter()
        .map(|item| raw_category(&item))
        .collect::<PyResult<Vec<_>>>()?;

    let engine = if legacy {
        EliminationEngine::new(crate::core::EngineConfig::legacy())
    } else {
        EliminationEngine::default()
    };
    let fortune = engine.play_raw(&raw, i64::from(magic.get())).map_err(to_py_err)?;
    fortune_to_dict(py, &fortune)
}

/// Draw a magic number in [2, 10].
///
/// With a seed the draw is reproducible.
#[pyfunction]
#[pyo3(signature = (seed = None))]
pub fn get_magic_number(seed: Option<u64>) -> u8 {
    match seed {
        Some(seed) => MashRng::new(seed).next_magic_number().get(),
        None => ThreadMagicNumbers.next_magic_number().get(),
    }
}

/// Python wrapper for MashRng.
#[pyclass(name = "MashRng")]
#[derive(Clone, Debug)]
pub struct PyMashRng(pub MashRng);

#[pymethods]
impl PyMashRng {
    /// Create a seeded magic number provider.
    #[new]
    fn new(seed: u64) -> Self {
        Self(MashRng::new(seed))
    }

    /// Draw the next magic number.
    fn magic_number(&mut self) -> u8 {
        self.0.next_magic_number().get()
    }

    /// Provider for the next game of a session.
    fn fork(&mut self) -> Self {
        Self(self.0.fork())
    }

    #[getter]
    fn seed(&self) -> u64 {
        self.0.seed()
    }

    fn __repr__(&self) -> String {
        format!("MashRng(seed={})", self.0.seed())
    }
}
