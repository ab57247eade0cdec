use serde::{Deserialize, Serialize};

use super::model::ActivityModel;
use super::power_law::hy;
use crate::errors::ComaeResult;
use crate::geometry::Geometry;
use crate::io::FileIO;

/// Power-law index equivalent to a linear activity index at the given distance.
///
/// y = -(a * rh + b)
///
/// The equivalent index itself depends on heliocentric distance, so a linear activity
/// index only matches a fixed `rh^y` power-law at a single distance.
///
/// # Arguments
///
/// * `a` - Slope of the activity index with heliocentric distance in 1 / au.
/// * `b` - Intercept of the activity index.
/// * `rh` - Heliocentric distance in au.
pub fn equivalent_exponent(a: f64, b: f64, rh: f64) -> f64 {
    -(a * rh + b)
}

/// Apparent magnitude of an object with a linear activity index.
///
/// The activity index is converted to the equivalent power-law index with
/// [`equivalent_exponent`], then evaluated with [`hy`]. An inactive object has
/// `a = 0` and `b = 0`, which is exactly the inactive case of [`hy`].
///
/// Fails with the same domain errors as [`hy`].
///
/// # Arguments
///
/// * `h_mag` - Absolute magnitude.
/// * `a` - Slope of the activity index with heliocentric distance in 1 / au.
/// * `b` - Intercept of the activity index.
/// * `rh` - Heliocentric distance in au.
/// * `delta` - Observer-target distance in au.
/// * `phase` - Sun-target-observer (phase) angle in degrees.
pub fn hab(h_mag: f64, a: f64, b: f64, rh: f64, delta: f64, phase: f64) -> ComaeResult<f64> {
    hy(h_mag, equivalent_exponent(a, b, rh), rh, delta, phase)
}

/// Activity of a comet described by an activity index linear in heliocentric distance.
///
/// See [`hab`] for the magnitude model.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LinearIndexParams {
    /// Designation (name) of the object.
    pub desig: String,

    /// Absolute (inactive) magnitude.
    pub h_mag: f64,

    /// Slope of the activity index in 1 / au.
    pub a: f64,

    /// Intercept of the activity index.
    pub b: f64,
}

impl LinearIndexParams {
    /// Create a new [`LinearIndexParams`].
    pub fn new(desig: String, h_mag: f64, a: f64, b: f64) -> Self {
        Self { desig, h_mag, a, b }
    }

    /// Equivalent power-law index at the provided heliocentric distance.
    pub fn exponent_at(&self, rh: f64) -> f64 {
        equivalent_exponent(self.a, self.b, rh)
    }
}

impl ActivityModel for LinearIndexParams {
    fn apparent_mag(&self, geom: &Geometry) -> ComaeResult<f64> {
        hy(
            self.h_mag,
            self.exponent_at(geom.rh),
            geom.rh,
            geom.delta,
            geom.phase,
        )
    }

    fn is_inactive(&self) -> bool {
        self.a == 0.0 && self.b == 0.0
    }

    fn inactive(&self) -> Self {
        Self::new(self.desig.clone(), self.h_mag, 0.0, 0.0)
    }

    fn n_params(&self) -> usize {
        3
    }
}

impl FileIO for LinearIndexParams {}
