//! Python bindings for the MASH engine.
//!
//! # Quick Start
//!
//! ```python
//! import mash
//!
//! magic = mash.get_magic_number()
//! result = mash.play_mash(
//!     [{"name": "Pet", "options": ["Dog", "Cat", "Fish"]}],
//!     magic,
//! )
//! print(result["MASH"], result["Pet"])
//! ```

use pyo3::prelude::*;

mod py_game;

pub use py_game::*;

/// mash: deterministic MASH fortune-telling engine.
#[pymodule]
fn mash(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(play_mash, m)?)?;
    m.add_function(wrap_pyfunction!(get_magic_number, m)?)?;
    m.add_class::<PyMashRng>()?;
    m.add("MAGIC_NUMBER_MIN", crate::core::MAGIC_NUMBER_MIN)?;
    m.add("MAGIC_NUMBER_MAX", crate::core::MAGIC_NUMBER_MAX)?;
    Ok(())
}
