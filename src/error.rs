//! Error type for the `studio` binary.

use std::path::PathBuf;

use canvas::error::CanvasError;

#[derive(Debug, thiserror::Error)]
pub enum StudioError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid session script: {0}")]
    InvalidScript(#[from] serde_json::Error),
    #[error(transparent)]
    Canvas(#[from] CanvasError),
    #[error("unknown aspect ratio `{0}`; expected 3:4 or 9:16")]
    UnknownAspect(String),
}
