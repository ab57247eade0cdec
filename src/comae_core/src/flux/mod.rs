//! # Flux
//! Apparent magnitude models of active small bodies.
//!
//! There are a few magnitude calculations contained here:
//! [`schleicher_marcus`] - The dust coma phase function.
//! [`hy`] / [`PowerLawParams`] - Activity as a power-law of heliocentric distance.
//! [`hab`] / [`LinearIndexParams`] - Activity index linear in heliocentric distance.
//!
//! Scalar functions have slice counterparts in [`vectorized`] which broadcast
//! length 1 inputs.
//!
mod linear_index;
mod model;
mod phase;
mod power_law;
pub mod vectorized;

pub use linear_index::*;
pub use model::*;
pub use phase::*;
pub use power_law::*;
pub use vectorized::{hab_vec, hy_vec, schleicher_marcus_vec};
