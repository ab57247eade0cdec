use rayon::prelude::*;

use crate::errors::ComaeResult;
use crate::geometry::Geometry;

/// Parameterized activity models which predict an apparent magnitude from geometry.
pub trait ActivityModel: Sync {
    /// Apparent magnitude at the provided geometry.
    fn apparent_mag(&self, geom: &Geometry) -> ComaeResult<f64>;

    /// Is this parameter set the inactive case of the model.
    fn is_inactive(&self) -> bool;

    /// The same object with all activity removed, leaving only the nucleus.
    fn inactive(&self) -> Self
    where
        Self: Sized;

    /// Number of free parameters of the model, including the absolute magnitude.
    fn n_params(&self) -> usize;

    /// Apparent magnitudes for many geometries, computed in parallel.
    ///
    /// The first failing geometry ends the calculation.
    fn apparent_mags(&self, geoms: &[Geometry]) -> ComaeResult<Vec<f64>> {
        geoms
            .par_iter()
            .map(|geom| self.apparent_mag(geom))
            .collect()
    }

    /// Magnitude difference between the inactive nucleus and the active object.
    ///
    /// Positive values mean activity makes the object brighter than the bare nucleus.
    fn activity_excess(&self, geom: &Geometry) -> ComaeResult<f64>
    where
        Self: Sized,
    {
        Ok(self.inactive().apparent_mag(geom)? - self.apparent_mag(geom)?)
    }
}
