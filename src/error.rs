use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The source could not be opened; no records were produced.
    #[error("Can't open variant file {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: niffler::Error,
    },

    /// Reading failed part-way through the source.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A data line with all mandatory columns has a position that is not a non-negative integer.
    #[error("Invalid position {value:?} on line {line}: {source}")]
    InvalidPosition {
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
