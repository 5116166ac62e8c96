use crate::ModuleId;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading course data
#[derive(Debug, Error)]
pub enum DataError {
    #[error("course {0:?} not found")]
    NotFound(String),

    #[error("failed to read {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse course from {origin}")]
    Parse {
        origin: String,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("module id {0} is used more than once")]
    DuplicateModule(ModuleId),
}
