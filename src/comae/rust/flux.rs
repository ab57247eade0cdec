//! Python support for the activity magnitude models.
use comae_core::flux::{
    equivalent_exponent, hab_vec, hy_vec, schleicher_marcus, schleicher_marcus_vec,
};
use pyo3::prelude::*;

/// Polymorphic support for a single float or a list of floats.
#[derive(Debug, FromPyObject, IntoPyObject)]
pub enum FloatOrVec {
    /// A single value.
    Float(f64),

    /// A list of values.
    Vec(Vec<f64>),
}

impl FloatOrVec {
    /// View the values as a slice, single values are length 1.
    pub fn as_slice(&self) -> &[f64] {
        match self {
            FloatOrVec::Float(val) => std::slice::from_ref(val),
            FloatOrVec::Vec(vals) => vals,
        }
    }

    /// Was a single value provided.
    pub fn is_float(&self) -> bool {
        matches!(self, FloatOrVec::Float(_))
    }

    /// Return a single float if every input was a single float, otherwise the list.
    fn from_result(inputs: &[&FloatOrVec], mut result: Vec<f64>) -> Self {
        if inputs.iter().all(|x| x.is_float()) && result.len() == 1 {
            FloatOrVec::Float(result.remove(0))
        } else {
            FloatOrVec::Vec(result)
        }
    }
}

/// Schleicher-Marcus phase function for cometary comae.
///
/// The model is a combination of comet Halley at low phase angles and near-Sun
/// comets at high phase angles. This is a polynomial fit to the phase function in
/// log-space as a function of degrees. The fit is extrapolated outside of 0-180 degrees.
///
/// Parameters
/// ----------
/// phase :
///     Sun-target-observer (phase) angle in units of deg, a float or list of floats.
///
/// Returns
/// -------
/// float or list
///     The phase function value.
#[pyfunction]
#[pyo3(name = "schleicher_marcus")]
pub fn schleicher_marcus_py(phase: FloatOrVec) -> FloatOrVec {
    match phase {
        FloatOrVec::Float(phase) => FloatOrVec::Float(schleicher_marcus(phase)),
        FloatOrVec::Vec(phase) => FloatOrVec::Vec(schleicher_marcus_vec(&phase)),
    }
}

/// Active object apparent magnitude assuming activity varies as rh**y.
///
/// m = H + 5 log10(rh * delta) - 2.5 y log10(rh) - 2.5 log10(Phi(phase))
///
/// An inactive object has y = 0, a typical comet will have y < 0. Inputs may be
/// floats or equal length lists, single floats are broadcast.
///
/// Parameters
/// ----------
/// h_mag :
///     Absolute magnitude.
/// y :
///     Activity as a power-law function of heliocentric distance.
/// rh :
///     Heliocentric distance in units of au.
/// delta :
///     Observer-target distance in units of au.
/// phase :
///     Sun-target-observer (phase) angle in units of deg.
///
/// Returns
/// -------
/// float or list
///     Apparent magnitude.
///
/// Raises
/// ------
/// ValueError
///     If a distance is not positive, or the list lengths do not match.
#[pyfunction]
#[pyo3(name = "hy")]
pub fn hy_py(
    h_mag: FloatOrVec,
    y: FloatOrVec,
    rh: FloatOrVec,
    delta: FloatOrVec,
    phase: FloatOrVec,
) -> PyResult<FloatOrVec> {
    let mags = hy_vec(
        h_mag.as_slice(),
        y.as_slice(),
        rh.as_slice(),
        delta.as_slice(),
        phase.as_slice(),
    )?;
    Ok(FloatOrVec::from_result(
        &[&h_mag, &y, &rh, &delta, &phase],
        mags,
    ))
}

/// Active object apparent magnitude with an activity index linear in rh.
///
/// The activity index is converted to the equivalent power-law index
/// y = -(a * rh + b), which is then evaluated with :py:func:`hy`. An inactive object
/// has a = 0 and b = 0.
///
/// Parameters
/// ----------
/// h_mag :
///     Absolute magnitude.
/// a :
///     Slope of the activity index in units of 1 / au.
/// b :
///     Intercept of the activity index.
/// rh :
///     Heliocentric distance in units of au.
/// delta :
///     Observer-target distance in units of au.
/// phase :
///     Sun-target-observer (phase) angle in units of deg.
///
/// Returns
/// -------
/// float or list
///     Apparent magnitude.
///
/// Raises
/// ------
/// ValueError
///     If a distance is not positive, or the list lengths do not match.
#[pyfunction]
#[pyo3(name = "hab")]
pub fn hab_py(
    h_mag: FloatOrVec,
    a: FloatOrVec,
    b: FloatOrVec,
    rh: FloatOrVec,
    delta: FloatOrVec,
    phase: FloatOrVec,
) -> PyResult<FloatOrVec> {
    let mags = hab_vec(
        h_mag.as_slice(),
        a.as_slice(),
        b.as_slice(),
        rh.as_slice(),
        delta.as_slice(),
        phase.as_slice(),
    )?;
    Ok(FloatOrVec::from_result(
        &[&h_mag, &a, &b, &rh, &delta, &phase],
        mags,
    ))
}

/// Power-law index equivalent to a linear activity index, y = -(a * rh + b).
///
/// Parameters
/// ----------
/// a :
///     Slope of the activity index in units of 1 / au.
/// b :
///     Intercept of the activity index.
/// rh :
///     Heliocentric distance in units of au.
#[pyfunction]
#[pyo3(name = "equivalent_exponent")]
pub fn equivalent_exponent_py(a: f64, b: f64, rh: f64) -> f64 {
    equivalent_exponent(a, b, rh)
}
