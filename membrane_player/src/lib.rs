//! Membrane player: animated 3D playback of lipid/protein snapshots.
//!
//! Library root: snapshot loading, the playback core, the Bevy scene and UI.

mod camera;
pub mod config;
pub mod data;
pub mod playback;
pub mod render;
mod scene;
pub mod sim;
mod ui;

pub mod prelude;
pub mod sdk;

pub use camera::OrbitCamera;
pub use data::{init_frame_channel, FrameChannel, FrameSequence, SnapshotDir, SnapshotStore};
pub use scene::{ingest_frames, playback_tick, setup_scene, Player};
pub use ui::PointerOverUi;
