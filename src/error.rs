// src/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures while pulling a sheet export. These never leave `fetch::fetch_grid`;
/// they are logged there and turned into an empty grid.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("received HTML instead of CSV - likely a permission error")]
    Markup,
}

/// Errors that can end a run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("could not build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
