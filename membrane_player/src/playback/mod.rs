mod controller;
mod registry;

pub use controller::{FrameApplied, PlaybackController, PlaybackError, PlaybackState};
pub use registry::{EntityRegistry, RegistryError};
