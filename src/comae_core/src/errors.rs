//! # Errors
//! Errors emitted by comae_core

/// Define all errors which may be raised by this crate, as well as optionally provide
/// conversion to pyo3 error types which allow for the errors to be raised in Python.
use std::{error, fmt, io};

/// comae specific result.
pub type ComaeResult<T> = Result<T, Error>;

/// Possible Errors which may be raised by this crate.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The argument of a logarithm was not strictly positive.
    ///
    /// Raised for non-positive heliocentric or observer distances, and for a phase
    /// function value which is not positive.
    DomainError(String),

    /// Input or variable exceeded expected or allowed bounds.
    ValueError(String),

    /// Error related to IO.
    IOError(String),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::DomainError(s) => {
                write!(f, "Numeric domain error: {}", s)
            }
            Error::ValueError(s) => {
                write!(f, "{}", s)
            }
            Error::IOError(s) => {
                write!(f, "{}", s)
            }
        }
    }
}

#[cfg(feature = "pyo3")]
use pyo3::{exceptions, PyErr};

#[cfg(feature = "pyo3")]
impl From<Error> for PyErr {
    fn from(err: Error) -> PyErr {
        match err {
            Error::DomainError(s) => PyErr::new::<exceptions::PyValueError, _>(format!(
                "Numeric domain error: {}",
                s
            )),

            Error::ValueError(s) => PyErr::new::<exceptions::PyValueError, _>(s),

            Error::IOError(s) => PyErr::new::<exceptions::PyIOError, _>(s),
        }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::IOError(error.to_string())
    }
}
