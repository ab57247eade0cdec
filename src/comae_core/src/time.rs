//! # Time
//! Conversions between Julian Dates and Modified Julian Dates.
//!
//! Observations are tagged with MJD, while many services report JD.
use crate::constants::MJD_OFFSET;

/// Convert a Julian Date to a Modified Julian Date.
pub fn jd_to_mjd(jd: f64) -> f64 {
    jd - MJD_OFFSET
}

/// Convert a Modified Julian Date to a Julian Date.
pub fn mjd_to_jd(mjd: f64) -> f64 {
    mjd + MJD_OFFSET
}
