use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetalensError {
    #[error("Unable to read metadata for {}: {source}", .path.display())]
    Resolve {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MetalensError>;
