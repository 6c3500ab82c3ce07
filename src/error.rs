//! Error types shared by the scanner and the renderers

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A filesystem operation on `path` failed.
    #[error("cannot access '{}': {}", .path.display(), .source)]
    Access {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("error writing output: {0}")]
    Io(#[from] io::Error),
    #[error("error serializing output: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn access(path: &Path, source: io::Error) -> Self {
        Self::Access {
            path: path.to_path_buf(),
            source,
        }
    }
}
