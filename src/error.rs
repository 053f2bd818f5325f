use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Could not find tickets file {path:?}")]
    ResourceNotFound { path: PathBuf },

    #[error("Failed to read tickets file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed tickets document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Date/time {value:?} does not match \"dd.MM.yy H:mm\"")]
    StampPattern { value: String },

    #[error("Invalid date/time {value:?}, expected \"dd.MM.yy H:mm\": {source}")]
    DateTime {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}
