/// Offset between a Julian Date and a Modified Julian Date in days.
pub const MJD_OFFSET: f64 = 2400000.5;

/// Pogson ratio, magnitudes per decade of flux.
pub const POGSON: f64 = 2.5;

/// Magnitudes per decade of distance for an inverse square law.
pub const INVERSE_SQUARE_MAG: f64 = 5.0;
