/// Coefficients of the Schleicher-Marcus dust phase function fit.
///
/// The fit is a fifth degree polynomial of `log10(Phi)` in degrees of phase angle,
/// ordered from the constant term to the fifth power:
///
/// log10(Phi) = c0 + c1 * a + c2 * a^2 + c3 * a^3 + c4 * a^4 + c5 * a^5
///
/// The underlying phase function is a combination of comet Halley at low phase angles
/// and near-Sun comets at high phase angles.
/// <https://asteroid.lowell.edu/comet/dustphase/>
pub const SCHLEICHER_MARCUS_COEF: [f64; 6] = [
    9.6156e-4,
    -1.85308e-2,
    2.205e-4,
    -1.3820e-6,
    1.6782e-8,
    -8.1755e-11,
];

/// Range of phase angles in degrees over which the comet phase curve was compiled.
///
/// The polynomial is still evaluated outside of this range, but those values are
/// extrapolations of the fit.
pub const SCHLEICHER_MARCUS_PHASE_RANGE: (f64, f64) = (0.0, 180.0);
