use crate::constants::{SCHLEICHER_MARCUS_COEF, SCHLEICHER_MARCUS_PHASE_RANGE};

/// Is the phase angle (degrees) inside the range the phase curve was compiled over.
pub fn in_calibrated_range(phase: f64) -> bool {
    let (low, high) = SCHLEICHER_MARCUS_PHASE_RANGE;
    (low..=high).contains(&phase)
}

/// Base 10 logarithm of the Schleicher-Marcus phase function.
///
/// This is the polynomial fit itself, evaluated in Horner form. Magnitude calculations
/// use this directly instead of taking the log of [`schleicher_marcus`].
///
/// # Arguments
///
/// * `phase` - Sun-target-observer angle in degrees.
pub fn schleicher_marcus_log10(phase: f64) -> f64 {
    if !in_calibrated_range(phase) {
        log::debug!(
            "Phase angle of {} deg is outside of the calibrated range of the \
            Schleicher-Marcus fit, value is extrapolated.",
            phase
        );
    }
    SCHLEICHER_MARCUS_COEF
        .iter()
        .rev()
        .fold(0.0, |acc, coef| acc * phase + coef)
}

/// Schleicher-Marcus phase function for cometary comae.
///
/// The model is a combination of comet Halley at low phase angles and near-Sun
/// comets at high phase angles, for details see:
/// <https://asteroid.lowell.edu/comet/dustphase/>
///
/// This is a fifth degree polynomial fit to the phase function in log-space as a
/// function of degrees, the returned value is `10^p` of that polynomial. Far outside of
/// the fit range `10^p` leaves the range of f64, underflowing to 0 (around 1000 deg) or
/// overflowing to infinity (around -1000 deg). [`schleicher_marcus_log10`] stays finite
/// there and is what the magnitude models use.
///
/// The fit tracks the tabulated phase curve well at low and moderate phase angles, but
/// turns over above roughly 130 degrees where the tabulated curve keeps rising with
/// forward scattering. Values outside of
/// [`SCHLEICHER_MARCUS_PHASE_RANGE`](crate::constants::SCHLEICHER_MARCUS_PHASE_RANGE)
/// are pure extrapolation of the polynomial. Neither case is treated as an error.
///
/// # Arguments
///
/// * `phase` - Sun-target-observer angle in degrees.
pub fn schleicher_marcus(phase: f64) -> f64 {
    10_f64.powf(schleicher_marcus_log10(phase))
}
