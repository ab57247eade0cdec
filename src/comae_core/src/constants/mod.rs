//! # Constants
//! Constant values, both universal and model specific.
//!
mod phase;
mod universal;

pub use phase::*;
pub use universal::*;
