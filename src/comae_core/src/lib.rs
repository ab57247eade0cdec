//! # comae Core
//! This library contains the photometric models used to separate the inactive
//! brightness of comets and active asteroids from the excess caused by activity.
//!
//! All model functions are pure, they may be freely called from many threads. Slice
//! versions of the models are provided which evaluate in parallel.
//!
//! This crate is left as a stand alone Rust crate, completely independent of the
//! Python wrappers.
//!

#![deny(
    bad_style,
    dead_code,
    improper_ctypes,
    non_shorthand_field_patterns,
    no_mangle_generic_items,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    unconditional_recursion,
    unused,
    while_true,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
    unused_results
)]

pub mod constants;
pub mod errors;
pub mod flux;
pub mod geometry;
pub mod io;
pub mod observation;
pub mod time;

/// Common useful imports
pub mod prelude {
    pub use crate::errors::{ComaeResult, Error};
    pub use crate::flux::{
        equivalent_exponent, hab, hab_vec, hy, hy_vec, schleicher_marcus,
        schleicher_marcus_vec, ActivityModel, LinearIndexParams, PowerLawParams,
    };
    pub use crate::geometry::Geometry;
    pub use crate::io::FileIO;
    pub use crate::observation::{residuals, Observation, Residuals};
    pub use crate::time::{jd_to_mjd, mjd_to_jd};
}
