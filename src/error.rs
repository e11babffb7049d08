use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoVizError {
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Invalid JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DemoVizError {
    /// Classify an IO failure on `path`, splitting out missing files.
    pub fn io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            DemoVizError::FileNotFound { path: path.to_path_buf() }
        } else {
            DemoVizError::Io { path: path.to_path_buf(), source }
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoVizError>;
