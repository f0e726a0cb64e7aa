use thiserror::Error;

use crate::version::error::{SelectionError, TagError};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error(transparent)]
    Tag(#[from] TagError),

    #[error(transparent)]
    Selection(#[from] SelectionError),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to access manifest {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid manifest {path}: {source}")]
    Invalid {
        path: String,
        source: serde_json::Error,
    },

    #[error("Failed to encode manifest: {0}")]
    Encode(#[source] serde_json::Error),
}
