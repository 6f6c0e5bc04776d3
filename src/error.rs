use std::path::{Path, PathBuf};

/// Failure of a single generation step.
#[derive(Debug)]
pub enum Error {
    SourceNotFound { path: PathBuf },
    DecodeFailed { path: PathBuf, reason: String },
    WriteFailed { path: PathBuf, reason: String },
}

impl Error {
    pub fn decode_failed(path: &Path, reason: impl ToString) -> Self {
        Self::DecodeFailed {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    pub fn write_failed(path: &Path, reason: impl ToString) -> Self {
        Self::WriteFailed {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Error::SourceNotFound { path }
            | Error::DecodeFailed { path, .. }
            | Error::WriteFailed { path, .. } => path,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::SourceNotFound { path } => {
                write!(f, "Source image not found: {}", path.display())
            }
            Error::DecodeFailed { path, reason } => {
                write!(f, "Unable to decode image {}: {reason}", path.display())
            }
            Error::WriteFailed { path, reason } => {
                write!(f, "Unable to write {}: {reason}", path.display())
            }
        }
    }
}

impl std::error::Error for Error {}
