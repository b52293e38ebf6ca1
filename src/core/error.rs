//! Error taxonomy for the comparator and the scanner.

use std::{io, path::PathBuf, str::Utf8Error};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Broad category of an [`Error`], used to select the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input could not be located or read.
    Input,
    /// The input was read but its content has the wrong shape.
    Format,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Cannot read {}", .path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse JSON file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Expected a JSON object at the top level of {}, found {found}", .path.display())]
    Format { path: PathBuf, found: &'static str },

    #[error("File is not valid UTF-8: {}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: Utf8Error,
    },

    #[error("Cannot walk source tree")]
    Walk(#[from] walkdir::Error),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::FileNotFound { .. } | Error::Decode { .. } | Error::Walk(_) => ErrorKind::Input,
            Error::Parse { .. } | Error::Format { .. } => ErrorKind::Format,
        }
    }

    pub(crate) fn file_not_found(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::FileNotFound {
            path: path.into(),
            source,
        }
    }
}
