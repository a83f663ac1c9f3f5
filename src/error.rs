use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read: {}\n{source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to read: {}\nline {line} has {found} fields, expected 5", .path.display())]
    SchemaMismatch {
        path: PathBuf,
        line: u64,
        found: usize,
    },

    #[error("Failed to write: {}\n{source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{format} does not support {operation}")]
    Unsupported {
        format: &'static str,
        operation: &'static str,
    },

    #[error("No format found for {}", .path.display())]
    UnknownFormat { path: PathBuf },
}

impl Error {
    pub fn write(path: impl Into<PathBuf>, source: impl Into<csv::Error>) -> Self {
        Error::Write {
            path: path.into(),
            source: source.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
