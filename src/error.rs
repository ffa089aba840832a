use thiserror::Error;
use std::path::PathBuf;

/// Errors raised while building a media type list.
#[derive(Error, Debug)]
pub enum MediaTypeError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("HTTP request failed for {url}: {reason}")]
    Http { url: String, reason: String },

    #[error("CSV error in '{registry}' registry: {source}")]
    Csv {
        registry: String,
        #[source]
        source: csv::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Registry '{0}' not found")]
    MissingRegistry(String),
}

/// Errors raised by the reference check.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error(
        "{} was out of date{}",
        .path.display(),
        .updated.then_some(" and has been updated").unwrap_or("")
    )]
    Stale { path: PathBuf, updated: bool },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Generate(#[from] MediaTypeError),
}

impl SyncError {
    pub fn is_stale(&self) -> bool {
        matches!(self, SyncError::Stale { .. })
    }
}
