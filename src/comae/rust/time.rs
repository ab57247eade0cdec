//! Python support for time conversions.
use comae_core::time::{jd_to_mjd, mjd_to_jd};
use pyo3::pyfunction;

/// Convert a Julian Date to a Modified Julian Date.
#[pyfunction]
#[pyo3(name = "jd_to_mjd")]
pub fn jd_to_mjd_py(jd: f64) -> f64 {
    jd_to_mjd(jd)
}

/// Convert a Modified Julian Date to a Julian Date.
#[pyfunction]
#[pyo3(name = "mjd_to_jd")]
pub fn mjd_to_jd_py(mjd: f64) -> f64 {
    mjd_to_jd(mjd)
}
