//! Minimal prelude for SDK consumers.

pub use crate::config::{snapshot_dir, TOTAL_FRAMES};
pub use crate::data::{Frame, FrameSequence, Position3, Protein, SnapshotDir, SnapshotSource};
pub use crate::playback::{EntityRegistry, PlaybackController};
pub use crate::render::{Appearance, RenderBridge};
pub use crate::sdk::PlayerBuilder;
