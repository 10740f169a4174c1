use std::thread;

use crossbeam_channel::Receiver;

use crate::data::error::LoadError;
use crate::data::source::{SnapshotDir, SnapshotSource};
use crate::data::store::{FrameSequence, SnapshotStore};

/// Outcome of one full load, delivered exactly once.
pub type LoadResult = Result<FrameSequence, LoadError>;

/// Bevy resource holding the channel from the snapshot loader thread.
/// Drained by the ingest_frames system.
#[derive(bevy::prelude::Resource)]
pub struct FrameChannel(pub Receiver<LoadResult>);

/// Load `count` frames from a snapshot directory on a dedicated thread.
pub fn init_frame_channel(dir: SnapshotDir, count: usize) -> FrameChannel {
    init_source_channel(dir, count)
}

/// Spawn the loader for any source. The thread runs a current-thread Tokio
/// runtime, so all fetches interleave on one thread and the result is sent
/// only after every fetch has settled.
pub fn init_source_channel<S: SnapshotSource>(source: S, count: usize) -> FrameChannel {
    let (tx, rx) = crossbeam_channel::bounded(1);
    thread::spawn(move || {
        let result = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(rt) => rt.block_on(SnapshotStore::new(source).load_all(count)),
            Err(err) => Err(LoadError::Runtime(err)),
        };
        // receiver gone means the app already exited
        let _ = tx.send(result);
    });
    FrameChannel(rx)
}

/// A channel that already holds `result`, for replaying a prepared sequence.
pub fn ready_channel(result: LoadResult) -> FrameChannel {
    let (tx, rx) = crossbeam_channel::bounded(1);
    let _ = tx.send(result);
    FrameChannel(rx)
}
