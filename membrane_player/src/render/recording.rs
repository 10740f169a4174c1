//! Headless bridge that records sphere state in memory.

use crate::data::Position3;
use crate::render::{Appearance, RenderBridge};

/// State of one sphere created through a [`RecordingBridge`].
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedSphere {
    pub radius: f32,
    pub appearance: Appearance,
    pub position: Position3,
    pub in_scene: bool,
    /// Number of `set_position` calls received.
    pub moves: usize,
}

/// In-memory render bridge; handles are indices into `spheres`.
#[derive(Clone, Debug, Default)]
pub struct RecordingBridge {
    pub spheres: Vec<RecordedSphere>,
}

impl RecordingBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sphere(&self, handle: usize) -> &RecordedSphere {
        &self.spheres[handle]
    }

    pub fn in_scene_count(&self) -> usize {
        self.spheres.iter().filter(|s| s.in_scene).count()
    }

    pub fn positions(&self, handles: &[usize]) -> Vec<Position3> {
        handles.iter().map(|&h| self.spheres[h].position).collect()
    }
}

impl RenderBridge for RecordingBridge {
    type Handle = usize;

    fn create_sphere(&mut self, radius: f32, appearance: Appearance) -> usize {
        self.spheres.push(RecordedSphere {
            radius,
            appearance,
            position: Position3::default(),
            in_scene: false,
            moves: 0,
        });
        self.spheres.len() - 1
    }

    fn add_to_scene(&mut self, handle: usize) {
        if let Some(sphere) = self.spheres.get_mut(handle) {
            sphere.in_scene = true;
        }
    }

    fn set_position(&mut self, handle: usize, position: Position3) {
        if let Some(sphere) = self.spheres.get_mut(handle) {
            sphere.position = position;
            sphere.moves += 1;
        }
    }
}
