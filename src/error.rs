//! Error type shared by every stage of graph generation

use std::path::PathBuf;

use thiserror::Error;

/// Every failure abrprint can report. Nothing is recovered locally: errors
/// travel up to `main`, which prints them and exits.
#[derive(Debug, Error)]
pub enum Error {
    #[error("error opening file {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("{} appears to be empty", .0.display())]
    FileEmpty(PathBuf),

    #[error("{}: {reason}", .path.display())]
    FileMalformed { path: PathBuf, reason: String },

    #[error("configuration file {}: {reason}", .path.display())]
    ConfigMalformed { path: PathBuf, reason: String },

    #[error("{0}")]
    CliArgument(String),

    #[error("graphics initialization failed: {0}")]
    GraphicsInit(String),

    #[error("drawing failed: {0}")]
    Render(String),

    #[error("failed to write {}: {source}", .path.display())]
    ImageEncode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Error::FileMalformed {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
