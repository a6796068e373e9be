use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Could not parse `{}`: {message}", path.display())]
    Parse { path: PathBuf, message: String },
    #[error("I/O error on `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Category `{0}` already exists")]
    DuplicateCategory(String),
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl CoreError {
    /// Wraps an I/O error raised while touching `path`, mapping a missing
    /// file onto [`CoreError::NotFound`].
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            CoreError::NotFound(path)
        } else {
            CoreError::Io { path, source }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CoreError::NotFound(_))
    }
}
