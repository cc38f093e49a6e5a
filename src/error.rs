//! Error types

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The input file could not be opened for reading
    #[error("Error opening file: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Standard output rejected a write
    #[error("write to output: {0}")]
    Write(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
