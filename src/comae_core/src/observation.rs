//! # Observations
//! Photometric observations of an object, and their agreement with an activity model.
//!
//! Each observation carries its own geometry, already in au and degrees. How these
//! tables are assembled (broker queries, ephemeris services) is outside of this crate.
use serde::{Deserialize, Serialize};

use crate::errors::{ComaeResult, Error};
use crate::flux::ActivityModel;
use crate::geometry::Geometry;
use crate::io::FileIO;

/// A single magnitude measurement with the geometry at the time of observation.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Observation {
    /// Time of the observation as a Modified Julian Date.
    pub mjd: f64,

    /// Heliocentric distance in au.
    pub rh: f64,

    /// Observer-object distance in au.
    pub delta: f64,

    /// Sun-target-observer (phase) angle in degrees.
    pub phase: f64,

    /// Observed apparent magnitude.
    pub mag: f64,

    /// One sigma uncertainty of the magnitude.
    pub mag_err: f64,
}

impl Observation {
    /// Construct a new [`Observation`].
    pub fn new(mjd: f64, rh: f64, delta: f64, phase: f64, mag: f64, mag_err: f64) -> Self {
        Self {
            mjd,
            rh,
            delta,
            phase,
            mag,
            mag_err,
        }
    }

    /// Observing geometry of this observation.
    pub fn geometry(&self) -> Geometry {
        Geometry::new(self.rh, self.delta, self.phase)
    }
}

impl FileIO for Observation {}

/// Agreement between a set of observations and the magnitudes predicted by a model.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Residuals {
    /// Observed minus predicted magnitude, in the order of the observations.
    pub residuals: Vec<f64>,

    /// Sum of squared normalized residuals divided by the degrees of freedom.
    pub reduced_chi2: f64,

    /// Number of observations used.
    pub n_obs: usize,
}

/// Compute the residuals of observations against the magnitudes predicted by a model.
///
/// This evaluates a fixed set of model parameters, it does not search for better ones.
/// The degrees of freedom are the number of observations minus the number of model
/// parameters.
///
/// Fails if there are no more observations than model parameters, if any magnitude
/// uncertainty is not a finite positive number, if any observation has a distance that is
/// not a finite positive number (the error names its MJD), or with the first domain error
/// from the model.
pub fn residuals<T: ActivityModel>(
    model: &T,
    observations: &[Observation],
) -> ComaeResult<Residuals> {
    let n_obs = observations.len();
    let n_params = model.n_params();
    if n_obs <= n_params {
        return Err(Error::ValueError(format!(
            "At least {} observations are required for a model with {} parameters, got {}.",
            n_params + 1,
            n_params,
            n_obs
        )));
    }
    if let Some(bad) = observations
        .iter()
        .find(|obs| !(obs.mag_err > 0.0 && obs.mag_err.is_finite()))
    {
        return Err(Error::ValueError(format!(
            "Magnitude uncertainties must be finite and positive, got {} at MJD {}.",
            bad.mag_err, bad.mjd
        )));
    }

    let geoms: Vec<_> = observations.iter().map(Observation::geometry).collect();
    for (obs, geom) in observations.iter().zip(&geoms) {
        geom.check_distances().map_err(|err| match err {
            Error::DomainError(msg) => {
                Error::DomainError(format!("{} (MJD {})", msg, obs.mjd))
            }
            other => other,
        })?;
    }
    let predicted = model.apparent_mags(&geoms)?;

    let residuals: Vec<f64> = observations
        .iter()
        .zip(&predicted)
        .map(|(obs, pred)| obs.mag - pred)
        .collect();
    let chi2: f64 = residuals
        .iter()
        .zip(observations)
        .map(|(res, obs)| (res / obs.mag_err).powi(2))
        .sum();

    let reduced_chi2 = chi2 / (n_obs - n_params) as f64;
    log::debug!(
        "Reduced chi2 of {:.4} from {} observations and {} parameters.",
        reduced_chi2,
        n_obs,
        n_params
    );

    Ok(Residuals {
        residuals,
        reduced_chi2,
        n_obs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flux::{hy, LinearIndexParams, PowerLawParams};

    fn synthetic(params: &PowerLawParams, offset: f64) -> Vec<Observation> {
        (0..20)
            .map(|idx| {
                let rh = 1.5 + 0.1 * idx as f64;
                let delta = 0.8 + 0.05 * idx as f64;
                let phase = 5.0 + idx as f64;
                let mag = hy(params.h_mag, params.y, rh, delta, phase).unwrap() + offset;
                Observation::new(60000.0 + idx as f64, rh, delta, phase, mag, 0.1)
            })
            .collect()
    }

    #[test]
    fn test_perfect_model() {
        let params = PowerLawParams::new("test".into(), 15.0, -2.0);
        let obs = synthetic(&params, 0.0);
        let res = residuals(&params, &obs).unwrap();
        assert_eq!(res.n_obs, 20);
        assert!(res.reduced_chi2 < 1e-20);
        assert!(res.residuals.iter().all(|r| r.abs() < 1e-12));
    }

    #[test]
    fn test_offset_model() {
        // A constant 0.1 mag offset with 0.1 mag errors is a chi2 of 1 per point.
        let params = PowerLawParams::new("test".into(), 15.0, -2.0);
        let obs = synthetic(&params, 0.1);
        let res = residuals(&params, &obs).unwrap();
        assert!(res.residuals.iter().all(|r| (r - 0.1).abs() < 1e-12));
        assert!((res.reduced_chi2 - 20.0 / 18.0).abs() < 1e-9);

        // The equivalent linear index model at a=0 has one more parameter.
        let linear = LinearIndexParams::new("test".into(), 15.0, 0.0, 2.0);
        let res = residuals(&linear, &obs).unwrap();
        assert!((res.reduced_chi2 - 20.0 / 17.0).abs() < 1e-9);
    }

    #[test]
    fn test_errors() {
        let params = PowerLawParams::new("test".into(), 15.0, -2.0);
        let obs = synthetic(&params, 0.0);
        assert!(matches!(
            residuals(&params, &obs[..2]),
            Err(Error::ValueError(_))
        ));

        let mut bad_sigma = obs.clone();
        bad_sigma[3].mag_err = 0.0;
        assert!(matches!(
            residuals(&params, &bad_sigma),
            Err(Error::ValueError(_))
        ));

        let mut bad_geom = obs;
        bad_geom[5].rh = -1.0;
        assert!(matches!(
            residuals(&params, &bad_geom),
            Err(Error::DomainError(_))
        ));
    }

    #[test]
    fn test_bad_distance_names_observation() {
        let params = LinearIndexParams::new("test".into(), 15.0, 0.1, -2.0);
        let mut obs = synthetic(&PowerLawParams::new("test".into(), 15.0, -2.0), 0.0);
        obs[5].delta = 0.0;
        match residuals(&params, &obs) {
            Err(Error::DomainError(msg)) => {
                assert!(msg.contains("delta"));
                assert!(msg.contains("MJD 60005"));
            }
            other => panic!("expected a domain error, got {:?}", other),
        }

        obs[5].delta = 1.0;
        obs[12].rh = f64::INFINITY;
        match residuals(&params, &obs) {
            Err(Error::DomainError(msg)) => assert!(msg.contains("MJD 60012")),
            other => panic!("expected a domain error, got {:?}", other),
        }
    }

    #[test]
    fn test_save_load() {
        let params = PowerLawParams::new("test".into(), 15.0, -2.0);
        let obs = synthetic(&params, 0.0);
        let filename = std::env::temp_dir()
            .join(format!("comae_observations_{}.bin", std::process::id()))
            .to_string_lossy()
            .to_string();
        Observation::save_vec(&obs, filename.clone()).unwrap();
        let loaded = Observation::load_vec(filename.clone()).unwrap();
        assert_eq!(obs, loaded);
        std::fs::remove_file(filename).unwrap();
    }
}
