use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to open {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("closed device")]
    Closed,
    #[error("invalid LED layout: {0}")]
    InvalidLayout(String),
    #[error("invalid delay: {0}")]
    InvalidDelay(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[cfg(unix)]
    #[error(transparent)]
    Nix(#[from] nix::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
