use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while saving or loading a board file.
#[derive(Debug, Error)]
pub enum BoardFileError {
    #[error("Failed to read board file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write board file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Board file {} is not a valid board: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialise board: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl BoardFileError {
    /// The file the failed operation was working on, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Read { path, .. } | Self::Write { path, .. } | Self::Parse { path, .. } => {
                Some(path)
            }
            Self::Serialize(_) => None,
        }
    }
}
