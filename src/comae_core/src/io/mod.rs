//! File IO related tools
//!
//! Parameter sets and observation tables may be saved to and loaded from compact
//! binary files.

use crate::errors::{ComaeResult, Error};
use bincode::serde::{decode_from_std_read, encode_into_std_write};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};

/// Support for automatic derivation of Save/Load
pub trait FileIO: Serialize
where
    for<'de> Self: Deserialize<'de>,
{
    /// Save into a file, returning the number of bytes written.
    fn save(&self, filename: String) -> ComaeResult<usize> {
        let mut f = BufWriter::new(File::create(&filename)?);
        let n_bytes = encode_into_std_write(self, &mut f, bincode::config::legacy())
            .map_err(|_| Error::IOError(format!("Failed to write to file {}", filename)))?;
        f.flush()?;
        Ok(n_bytes)
    }

    /// Load from a file.
    fn load(filename: String) -> ComaeResult<Self> {
        let mut f = BufReader::new(File::open(&filename)?);
        decode_from_std_read(&mut f, bincode::config::legacy())
            .map_err(|_| Error::IOError(format!("Failed to read from file {}", filename)))
    }

    /// Save a vector of this object.
    fn save_vec(vec: &[Self], filename: String) -> ComaeResult<()> {
        let mut f = BufWriter::new(File::create(&filename)?);
        let _ = encode_into_std_write(vec, &mut f, bincode::config::legacy())
            .map_err(|_| Error::IOError(format!("Failed to write to file {}", filename)))?;
        f.flush()?;
        Ok(())
    }

    /// Load a vector of this object.
    fn load_vec(filename: String) -> ComaeResult<Vec<Self>> {
        let mut f = BufReader::new(File::open(&filename)?);
        let res: Vec<Self> = decode_from_std_read(&mut f, bincode::config::legacy())
            .map_err(|_| Error::IOError(format!("Failed to load from file {}", filename)))?;
        Ok(res)
    }
}
