//! SnapshotStore: fetches every frame concurrently and validates the batch.

use std::sync::Arc;

use bevy::log::{error, info, warn};
use tokio::task::JoinSet;

use crate::data::error::{FetchError, LoadError};
use crate::data::model::Frame;
use crate::data::source::SnapshotSource;

/// Ordered, fixed-length collection of frames, immutable once built.
///
/// Slots whose fetch failed, or whose lipid count disagrees with frame 0, are
/// absent. Frame 0 is always present and has at least one lipid.
#[derive(Clone, Debug)]
pub struct FrameSequence {
    frames: Vec<Option<Frame>>,
    lipid_count: usize,
}

impl FrameSequence {
    /// Validate fetched slots. Frame 0 must exist with a non-empty lipid list;
    /// later frames with a different lipid count are dropped.
    pub fn from_slots(mut frames: Vec<Option<Frame>>) -> Result<Self, LoadError> {
        let lipid_count = match frames.first() {
            Some(Some(first)) if !first.lipids.is_empty() => first.lipids.len(),
            Some(Some(_)) => {
                return Err(LoadError::MalformedSnapshot(
                    "frame 0 has no lipids".to_string(),
                ))
            }
            Some(None) => {
                return Err(LoadError::MalformedSnapshot(
                    "frame 0 is missing".to_string(),
                ))
            }
            None => {
                return Err(LoadError::MalformedSnapshot(
                    "no frames requested".to_string(),
                ))
            }
        };

        for (index, slot) in frames.iter_mut().enumerate().skip(1) {
            let Some(frame) = slot else {
                continue;
            };
            if frame.lipids.len() != lipid_count {
                warn!(
                    "frame {index} has {} lipids, expected {lipid_count}; treating it as missing",
                    frame.lipids.len()
                );
                *slot = None;
            }
        }

        Ok(Self {
            frames,
            lipid_count,
        })
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frame at `index`, or `None` when out of range or absent.
    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index).and_then(Option::as_ref)
    }

    pub fn first(&self) -> &Frame {
        // from_slots guarantees slot 0 is present
        match self.frames.first() {
            Some(Some(frame)) => frame,
            _ => unreachable!("FrameSequence without frame 0"),
        }
    }

    pub fn lipid_count(&self) -> usize {
        self.lipid_count
    }

    pub fn protein_count(&self) -> usize {
        self.first().proteins.len()
    }

    pub fn missing_indices(&self) -> Vec<usize> {
        self.frames
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.is_none().then_some(i))
            .collect()
    }

    pub fn missing_count(&self) -> usize {
        self.frames.iter().filter(|slot| slot.is_none()).count()
    }
}

/// Owns a snapshot source and turns it into a [`FrameSequence`].
pub struct SnapshotStore<S> {
    source: Arc<S>,
}

impl<S: SnapshotSource> SnapshotStore<S> {
    pub fn new(source: S) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    /// Fetch frames `0..count` concurrently and wait for all of them to settle.
    ///
    /// A failed fetch is logged and leaves its slot absent; nothing is retried.
    pub async fn load_all(&self, count: usize) -> Result<FrameSequence, LoadError> {
        info!("loading {count} snapshots");

        let mut tasks = JoinSet::new();
        for index in 0..count {
            let source = Arc::clone(&self.source);
            tasks.spawn(async move { (index, source.fetch(index).await) });
        }

        let mut slots: Vec<Option<Frame>> = vec![None; count];
        let mut failures = 0usize;
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, Ok(frame))) => slots[index] = Some(frame),
                Ok((index, Err(err))) => {
                    failures += 1;
                    warn!("frame {index}: {err}");
                }
                Err(err) => {
                    failures += 1;
                    error!("snapshot fetch task failed: {err}");
                }
            }
        }

        info!(
            "snapshots settled: {} loaded, {failures} failed",
            count - failures
        );

        FrameSequence::from_slots(slots)
    }
}

/// A source backed by frames already in memory. Indices past the end, or
/// slots set to `None`, fail with [`FetchError::Unavailable`].
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    frames: Vec<Option<Frame>>,
}

impl MemorySource {
    pub fn new(frames: Vec<Option<Frame>>) -> Self {
        Self { frames }
    }
}

impl SnapshotSource for MemorySource {
    fn fetch(
        &self,
        index: usize,
    ) -> impl std::future::Future<Output = Result<Frame, FetchError>> + Send {
        let result = self
            .frames
            .get(index)
            .cloned()
            .flatten()
            .ok_or(FetchError::Unavailable { index });
        async move { result }
    }
}
