mod channel;
pub mod error;
mod model;
mod source;
mod store;

pub use channel::{init_frame_channel, init_source_channel, ready_channel, FrameChannel, LoadResult};
pub use error::{FetchError, LoadError, SnapshotWriteError};
pub use model::{Frame, Position3, Protein};
pub use source::{snapshot_file_name, SnapshotDir, SnapshotSource};
pub use store::{FrameSequence, MemorySource, SnapshotStore};
