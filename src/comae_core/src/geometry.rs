//! # Geometry
//! Observing geometry of an object at a single instant.
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::errors::{ComaeResult, Error};

/// Sun-object-observer geometry.
///
/// Distances are in au, the phase angle is in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Geometry {
    /// Heliocentric distance of the object in au.
    pub rh: f64,

    /// Observer-object distance in au.
    pub delta: f64,

    /// Sun-target-observer (phase) angle in degrees.
    pub phase: f64,
}

impl Geometry {
    /// Construct a new [`Geometry`].
    ///
    /// No validation is performed here, non-positive distances are reported when a
    /// magnitude is computed.
    pub fn new(rh: f64, delta: f64, phase: f64) -> Self {
        Self { rh, delta, phase }
    }

    /// Compute the geometry from heliocentric positions of the object and observer.
    ///
    /// # Arguments
    ///
    /// * `sun2obj` - Vector from the Sun to the object in au.
    /// * `sun2obs` - Vector from the Sun to the observer in au.
    pub fn from_vectors(sun2obj: &Vector3<f64>, sun2obs: &Vector3<f64>) -> Self {
        let obj2obs = sun2obs - sun2obj;
        let obj2sun = -sun2obj;
        Self {
            rh: sun2obj.norm(),
            delta: obj2obs.norm(),
            phase: obj2obs.angle(&obj2sun).to_degrees(),
        }
    }

    /// Check that both distances may be used as logarithm arguments.
    pub fn check_distances(&self) -> ComaeResult<()> {
        check_positive("heliocentric distance (rh)", self.rh)?;
        check_positive("observer distance (delta)", self.delta)
    }
}

/// Fail with a domain error if the value is not a finite positive number.
pub(crate) fn check_positive(name: &str, value: f64) -> ComaeResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(Error::DomainError(format!(
            "{} must be a finite positive number, got {}",
            name, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vectors() {
        // Quadrature, the observer sits at 1 au along y while the object is at 2 au on x.
        let sun2obj = Vector3::new(2.0, 0.0, 0.0);
        let sun2obs = Vector3::new(0.0, 1.0, 0.0);
        let geom = Geometry::from_vectors(&sun2obj, &sun2obs);
        assert!((geom.rh - 2.0).abs() < 1e-12);
        assert!((geom.delta - 5_f64.sqrt()).abs() < 1e-12);
        assert!((geom.phase - 0.5_f64.atan().to_degrees()).abs() < 1e-10);
    }

    #[test]
    fn test_opposition() {
        let sun2obj = Vector3::new(0.0, 0.0, 3.0);
        let sun2obs = Vector3::new(0.0, 0.0, 1.0);
        let geom = Geometry::from_vectors(&sun2obj, &sun2obs);
        assert!((geom.rh - 3.0).abs() < 1e-12);
        assert!((geom.delta - 2.0).abs() < 1e-12);
        assert!(geom.phase.abs() < 1e-6);
    }

    #[test]
    fn test_check_distances() {
        assert!(Geometry::new(1.0, 1.0, 0.0).check_distances().is_ok());
        assert!(matches!(
            Geometry::new(0.0, 1.0, 0.0).check_distances(),
            Err(Error::DomainError(_))
        ));
        assert!(matches!(
            Geometry::new(1.0, -2.0, 0.0).check_distances(),
            Err(Error::DomainError(_))
        ));
        assert!(Geometry::new(f64::NAN, 1.0, 0.0).check_distances().is_err());
        assert!(Geometry::new(1.0, f64::INFINITY, 0.0)
            .check_distances()
            .is_err());
    }
}
