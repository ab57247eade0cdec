use serde::{Deserialize, Serialize};

use super::model::ActivityModel;
use super::phase::schleicher_marcus_log10;
use crate::constants::{INVERSE_SQUARE_MAG, POGSON};
use crate::errors::{ComaeResult, Error};
use crate::geometry::{check_positive, Geometry};
use crate::io::FileIO;

/// Apparent magnitude of an object whose activity varies as `rh^y`.
///
/// m = H + 5 log10(rh * delta) - 2.5 y log10(rh) - 2.5 log10(Phi(phase))
///
/// The distance term is evaluated as `5 (log10(rh) + log10(delta))`, so the product of
/// the distances is never formed and cannot overflow.
///
/// An inactive object has `y = 0`, a typical comet will have `y < 0`. Phi is the
/// [`schleicher_marcus`](super::schleicher_marcus) phase function.
///
/// Fails with [`Error::DomainError`] if either distance is not a finite positive
/// number, or if the phase function is not positive (non-finite in log-space). NaN is
/// never returned for those inputs.
///
/// # Arguments
///
/// * `h_mag` - Absolute magnitude.
/// * `y` - Power-law index of activity with heliocentric distance.
/// * `rh` - Heliocentric distance in au.
/// * `delta` - Observer-target distance in au.
/// * `phase` - Sun-target-observer (phase) angle in degrees.
pub fn hy(h_mag: f64, y: f64, rh: f64, delta: f64, phase: f64) -> ComaeResult<f64> {
    check_positive("heliocentric distance (rh)", rh)?;
    check_positive("observer distance (delta)", delta)?;

    let log_phi = schleicher_marcus_log10(phase);
    if !log_phi.is_finite() {
        return Err(Error::DomainError(format!(
            "phase function is not positive at a phase angle of {} deg",
            phase
        )));
    }

    let log_rh = rh.log10();
    Ok(h_mag + INVERSE_SQUARE_MAG * (log_rh + delta.log10())
        - (POGSON * y) * log_rh
        - POGSON * log_phi)
}

/// Activity of a comet described by a single power-law with heliocentric distance.
///
/// See [`hy`] for the magnitude model.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PowerLawParams {
    /// Designation (name) of the object.
    pub desig: String,

    /// Absolute (inactive) magnitude.
    pub h_mag: f64,

    /// Power-law index of the activity.
    pub y: f64,
}

impl PowerLawParams {
    /// Create a new [`PowerLawParams`].
    pub fn new(desig: String, h_mag: f64, y: f64) -> Self {
        Self { desig, h_mag, y }
    }
}

impl ActivityModel for PowerLawParams {
    fn apparent_mag(&self, geom: &Geometry) -> ComaeResult<f64> {
        hy(self.h_mag, self.y, geom.rh, geom.delta, geom.phase)
    }

    fn is_inactive(&self) -> bool {
        self.y == 0.0
    }

    fn inactive(&self) -> Self {
        Self::new(self.desig.clone(), self.h_mag, 0.0)
    }

    fn n_params(&self) -> usize {
        2
    }
}

impl FileIO for PowerLawParams {}
