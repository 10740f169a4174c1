//! Loading errors: per-frame fetch failures and fatal startup failures.

use std::path::PathBuf;

use thiserror::Error;

/// One frame could not be fetched. The batch keeps going; the slot is absent.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("frame {index} is not available")]
    Unavailable { index: usize },
}

/// Loading failed as a whole; playback never starts.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("malformed snapshot: {0}")]
    MalformedSnapshot(String),
    #[error("failed to build loader runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("snapshot loader stopped before delivering frames")]
    Disconnected,
}

/// Writing a generated snapshot to disk failed.
#[derive(Debug, Error)]
pub enum SnapshotWriteError {
    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
