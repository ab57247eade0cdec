//! Python wrappers over the comae_core rust package.
//! Primarily enables python interfaces

#![deny(
    bad_style,
    dead_code,
    improper_ctypes,
    non_shorthand_field_patterns,
    no_mangle_generic_items,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    unconditional_recursion,
    unused,
    while_true,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
    unused_results
)]

use pyo3::prelude::*;

pub mod flux;
pub mod observation;
pub mod time;

/// Python module which exposes all of the compiled rust functions.
#[pymodule]
fn _core(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<observation::PyObservation>()?;

    m.add_function(wrap_pyfunction!(flux::schleicher_marcus_py, m)?)?;
    m.add_function(wrap_pyfunction!(flux::hy_py, m)?)?;
    m.add_function(wrap_pyfunction!(flux::hab_py, m)?)?;
    m.add_function(wrap_pyfunction!(flux::equivalent_exponent_py, m)?)?;

    m.add_function(wrap_pyfunction!(observation::power_law_residuals_py, m)?)?;
    m.add_function(wrap_pyfunction!(observation::linear_index_residuals_py, m)?)?;

    m.add_function(wrap_pyfunction!(time::jd_to_mjd_py, m)?)?;
    m.add_function(wrap_pyfunction!(time::mjd_to_jd_py, m)?)?;

    Ok(())
}
