//! Element-wise evaluation of the activity models over many observations.
//!
//! Every input is either a slice of a common length N, or a slice of length 1 which is
//! broadcast against the others. Results are identical to calling the scalar functions
//! once per element.
use itertools::Itertools;
use rayon::prelude::*;

use super::{hab, hy, in_calibrated_range, schleicher_marcus};
use crate::errors::{ComaeResult, Error};

/// Resolve the common length of a set of inputs, allowing length 1 inputs to broadcast.
pub fn broadcast_len(inputs: &[(&str, &[f64])]) -> ComaeResult<usize> {
    let len = inputs
        .iter()
        .map(|(_, values)| values.len())
        .filter(|len| *len != 1)
        .max()
        .unwrap_or(1);

    if inputs
        .iter()
        .any(|(_, values)| values.len() != 1 && values.len() != len)
    {
        return Err(Error::ValueError(format!(
            "Inputs could not be broadcast together, lengths were: {}",
            inputs
                .iter()
                .map(|(name, values)| format!("{}={}", name, values.len()))
                .join(", ")
        )));
    }
    Ok(len)
}

#[inline(always)]
fn at(values: &[f64], idx: usize) -> f64 {
    if values.len() == 1 {
        values[0]
    } else {
        values[idx]
    }
}

fn warn_extrapolated(phase: &[f64]) {
    let n_outside = phase.iter().filter(|p| !in_calibrated_range(**p)).count();
    if n_outside > 0 {
        log::warn!(
            "{} phase angles are outside of the calibrated range of the Schleicher-Marcus \
            fit, these values are extrapolated.",
            n_outside
        );
    }
}

/// [`schleicher_marcus`] evaluated over many phase angles in degrees.
pub fn schleicher_marcus_vec(phase: &[f64]) -> Vec<f64> {
    warn_extrapolated(phase);
    phase.par_iter().map(|p| schleicher_marcus(*p)).collect()
}

/// [`hy`] evaluated element-wise with broadcasting.
///
/// Fails if the input lengths cannot be broadcast together, or with the first domain
/// error encountered.
pub fn hy_vec(
    h_mag: &[f64],
    y: &[f64],
    rh: &[f64],
    delta: &[f64],
    phase: &[f64],
) -> ComaeResult<Vec<f64>> {
    let len = broadcast_len(&[
        ("h_mag", h_mag),
        ("y", y),
        ("rh", rh),
        ("delta", delta),
        ("phase", phase),
    ])?;
    warn_extrapolated(phase);
    log::debug!("Evaluating power-law activity model for {} observations.", len);

    (0..len)
        .into_par_iter()
        .map(|idx| {
            hy(
                at(h_mag, idx),
                at(y, idx),
                at(rh, idx),
                at(delta, idx),
                at(phase, idx),
            )
        })
        .collect()
}

/// [`hab`] evaluated element-wise with broadcasting.
///
/// Fails if the input lengths cannot be broadcast together, or with the first domain
/// error encountered.
pub fn hab_vec(
    h_mag: &[f64],
    a: &[f64],
    b: &[f64],
    rh: &[f64],
    delta: &[f64],
    phase: &[f64],
) -> ComaeResult<Vec<f64>> {
    let len = broadcast_len(&[
        ("h_mag", h_mag),
        ("a", a),
        ("b", b),
        ("rh", rh),
        ("delta", delta),
        ("phase", phase),
    ])?;
    warn_extrapolated(phase);
    log::debug!(
        "Evaluating linear activity index model for {} observations.",
        len
    );

    (0..len)
        .into_par_iter()
        .map(|idx| {
            hab(
                at(h_mag, idx),
                at(a, idx),
                at(b, idx),
                at(rh, idx),
                at(delta, idx),
                at(phase, idx),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broadcast_len() {
        let one: &[f64] = &[1.0];
        let two: &[f64] = &[1.0, 2.0];
        let three: &[f64] = &[1.0, 2.0, 3.0];
        let empty: &[f64] = &[];
        assert_eq!(broadcast_len(&[("a", one), ("b", one)]).unwrap(), 1);
        assert_eq!(broadcast_len(&[("a", one), ("b", three)]).unwrap(), 3);
        assert_eq!(broadcast_len(&[("a", three), ("b", three)]).unwrap(), 3);
        assert_eq!(broadcast_len(&[("a", one), ("b", empty)]).unwrap(), 0);

        let err = broadcast_len(&[("a", two), ("b", three)]).unwrap_err();
        assert_eq!(
            err,
            Error::ValueError(
                "Inputs could not be broadcast together, lengths were: a=2, b=3".into()
            )
        );
        assert!(broadcast_len(&[("a", empty), ("b", three)]).is_err());
    }

    #[test]
    fn test_hy_vec_matches_scalar() {
        let rh: Vec<f64> = (1..100).map(|x| x as f64 * 0.1).collect();
        let phase: Vec<f64> = (1..100).map(|x| x as f64 * 1.5).collect();
        let mags = hy_vec(&[12.0], &[-3.0], &rh, &[1.2], &phase).unwrap();
        assert_eq!(mags.len(), rh.len());
        for ((mag, r), p) in mags.iter().zip(&rh).zip(&phase) {
            assert_eq!(
                mag.to_bits(),
                hy(12.0, -3.0, *r, 1.2, *p).unwrap().to_bits()
            );
        }
    }

    #[test]
    fn test_hab_vec_matches_scalar() {
        let rh = [1.0, 10.0, 10.0];
        let b = [0.0, 0.0, -1.0];
        let mags = hab_vec(&[0.0], &[1.0], &b, &rh, &[1.0], &[0.0]).unwrap();
        for ((mag, r), b) in mags.iter().zip(&rh).zip(&b) {
            assert_eq!(*mag, hab(0.0, 1.0, *b, *r, 1.0, 0.0).unwrap());
        }
        assert!(mags[0].abs() < 0.003);
        assert!((mags[1] - 30.0).abs() < 0.003);
        assert!((mags[2] - 27.5).abs() < 0.003);
    }

    #[test]
    fn test_vec_errors() {
        assert!(matches!(
            hy_vec(&[0.0], &[0.0], &[1.0, 0.0], &[1.0], &[0.0]),
            Err(Error::DomainError(_))
        ));
        assert!(matches!(
            hab_vec(&[0.0], &[0.0], &[0.0], &[1.0], &[1.0, -1.0], &[0.0]),
            Err(Error::DomainError(_))
        ));
        assert!(matches!(
            hy_vec(&[0.0, 1.0], &[0.0], &[1.0, 2.0, 3.0], &[1.0], &[0.0]),
            Err(Error::ValueError(_))
        ));
    }

    #[test]
    fn test_empty() {
        assert!(hy_vec(&[0.0], &[0.0], &[], &[1.0], &[0.0])
            .unwrap()
            .is_empty());
        assert!(schleicher_marcus_vec(&[]).is_empty());
    }

    #[test]
    fn test_schleicher_marcus_vec() {
        let phase = [0.0, 23.0, 200.0];
        let phi = schleicher_marcus_vec(&phase);
        for (p, val) in phase.iter().zip(&phi) {
            assert_eq!(*val, schleicher_marcus(*p));
        }
    }
}
