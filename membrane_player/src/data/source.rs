//! Snapshot sources: where frame `i` comes from.

use std::future::Future;
use std::path::PathBuf;

use crate::data::error::FetchError;
use crate::data::model::Frame;

/// Interface for anything that can produce frame `index` asynchronously.
///
/// Fetches for different indices are issued concurrently, so implementations
/// must be shareable across tasks.
pub trait SnapshotSource: Send + Sync + 'static {
    fn fetch(&self, index: usize) -> impl Future<Output = Result<Frame, FetchError>> + Send;
}

/// File name of snapshot `index`: the index zero-padded to five digits.
pub fn snapshot_file_name(index: usize) -> String {
    format!("frame_{index:05}.json")
}

/// Reads `<root>/frame_{index:05}.json` files.
#[derive(Clone, Debug)]
pub struct SnapshotDir {
    root: PathBuf,
}

impl SnapshotDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn frame_path(&self, index: usize) -> PathBuf {
        self.root.join(snapshot_file_name(index))
    }
}

impl SnapshotSource for SnapshotDir {
    fn fetch(&self, index: usize) -> impl Future<Output = Result<Frame, FetchError>> + Send {
        let path = self.frame_path(index);
        async move {
            bevy::log::debug!("requesting {}", path.display());
            let bytes = match tokio::fs::read(&path).await {
                Ok(bytes) => bytes,
                Err(source) => return Err(FetchError::Io { path, source }),
            };
            serde_json::from_slice(&bytes).map_err(|source| FetchError::Parse { path, source })
        }
    }
}
