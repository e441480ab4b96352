//! Error types of the crate
//!
//! The search core itself never fails, errors only come from the pattern
//! decoding and from the file acquisition.

use std::{fmt, io, path::PathBuf, result::Result as StdResult};

use thiserror::Error;

/// Result type of the crate
pub type Result<T> = StdResult<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] PatternError),

    #[error("{stage} error {}: {source}", .path.display())]
    Io {
        stage: IoStage,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn io(stage: IoStage, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            stage,
            path: path.into(),
            source,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("the pattern is empty")]
    Empty,

    #[error("odd number of hex digits ({0}), 2 are needed per byte")]
    OddLength(usize),

    #[error("invalid input character {c:?} at index {index}")]
    InvalidCharacter { c: char, index: usize },
}

///
/// Step of the file acquisition that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoStage {
    Open,
    Stat,
    Mmap,
}

impl fmt::Display for IoStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IoStage::Open => write!(f, "Open"),
            IoStage::Stat => write!(f, "Stat"),
            IoStage::Mmap => write!(f, "Mmap"),
        }
    }
}
