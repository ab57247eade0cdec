//! Python support for observation tables.
use comae_core::{
    flux::{LinearIndexParams, PowerLawParams},
    io::FileIO,
    observation::{residuals, Observation},
};
use pyo3::prelude::*;

/// A single magnitude measurement with the geometry at the time of observation.
///
/// Parameters
/// ----------
/// mjd :
///     Time of the observation as a Modified Julian Date.
/// rh :
///     Heliocentric distance in units of au.
/// delta :
///     Observer-target distance in units of au.
/// phase :
///     Sun-target-observer (phase) angle in units of deg.
/// mag :
///     Observed apparent magnitude.
/// mag_err :
///     One sigma magnitude uncertainty.
#[pyclass(frozen, module = "comae", name = "Observation")]
#[derive(Clone, Debug)]
pub struct PyObservation(pub Observation);

impl From<Observation> for PyObservation {
    fn from(value: Observation) -> Self {
        Self(value)
    }
}

#[pymethods]
impl PyObservation {
    #[new]
    #[allow(missing_docs)]
    pub fn new(mjd: f64, rh: f64, delta: f64, phase: f64, mag: f64, mag_err: f64) -> Self {
        Observation::new(mjd, rh, delta, phase, mag, mag_err).into()
    }

    /// Time of the observation as a Modified Julian Date.
    #[getter]
    pub fn mjd(&self) -> f64 {
        self.0.mjd
    }

    /// Heliocentric distance in au.
    #[getter]
    pub fn rh(&self) -> f64 {
        self.0.rh
    }

    /// Observer-target distance in au.
    #[getter]
    pub fn delta(&self) -> f64 {
        self.0.delta
    }

    /// Sun-target-observer (phase) angle in degrees.
    #[getter]
    pub fn phase(&self) -> f64 {
        self.0.phase
    }

    /// Observed apparent magnitude.
    #[getter]
    pub fn mag(&self) -> f64 {
        self.0.mag
    }

    /// One sigma magnitude uncertainty.
    #[getter]
    pub fn mag_err(&self) -> f64 {
        self.0.mag_err
    }

    /// Save a list to a binary file.
    #[staticmethod]
    #[pyo3(name = "save_list")]
    pub fn py_save_list(vec: Vec<Self>, filename: String) -> PyResult<()> {
        let vec: Vec<_> = vec.into_iter().map(|x| x.0).collect();
        Ok(Observation::save_vec(&vec, filename)?)
    }

    /// Load a list from a binary file.
    #[staticmethod]
    #[pyo3(name = "load_list")]
    pub fn py_load_list(filename: String) -> PyResult<Vec<Self>> {
        let res = Observation::load_vec(filename)?;
        Ok(res.into_iter().map(Self).collect())
    }

    fn __repr__(&self) -> String {
        format!(
            "Observation(mjd={:?}, rh={:?}, delta={:?}, phase={:?}, mag={:?}, mag_err={:?})",
            self.mjd(),
            self.rh(),
            self.delta(),
            self.phase(),
            self.mag(),
            self.mag_err(),
        )
    }
}

fn unwrap_observations(observations: Vec<PyObservation>) -> Vec<Observation> {
    observations.into_iter().map(|x| x.0).collect()
}

/// Residuals of observations against a power-law activity model.
///
/// This evaluates the provided parameters, it does not fit them.
///
/// Parameters
/// ----------
/// observations :
///     List of :py:class:`Observation`.
/// h_mag :
///     Absolute magnitude.
/// y :
///     Activity as a power-law function of heliocentric distance.
///
/// Returns
/// -------
/// tuple
///     Observed minus predicted magnitudes, and the reduced chi squared.
#[pyfunction]
#[pyo3(name = "power_law_residuals")]
pub fn power_law_residuals_py(
    observations: Vec<PyObservation>,
    h_mag: f64,
    y: f64,
) -> PyResult<(Vec<f64>, f64)> {
    let params = PowerLawParams::new("".into(), h_mag, y);
    let res = residuals(&params, &unwrap_observations(observations))?;
    Ok((res.residuals, res.reduced_chi2))
}

/// Residuals of observations against a linear activity index model.
///
/// This evaluates the provided parameters, it does not fit them.
///
/// Parameters
/// ----------
/// observations :
///     List of :py:class:`Observation`.
/// h_mag :
///     Absolute magnitude.
/// a :
///     Slope of the activity index in units of 1 / au.
/// b :
///     Intercept of the activity index.
///
/// Returns
/// -------
/// tuple
///     Observed minus predicted magnitudes, and the reduced chi squared.
#[pyfunction]
#[pyo3(name = "linear_index_residuals")]
pub fn linear_index_residuals_py(
    observations: Vec<PyObservation>,
    h_mag: f64,
    a: f64,
    b: f64,
) -> PyResult<(Vec<f64>, f64)> {
    let params = LinearIndexParams::new("".into(), h_mag, a, b);
    let res = residuals(&params, &unwrap_observations(observations))?;
    Ok((res.residuals, res.reduced_chi2))
}
