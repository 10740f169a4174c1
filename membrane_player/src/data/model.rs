// Snapshot payloads as they appear on disk.
// Bevy types stay out of here; conversion happens at the render boundary.

use bevy::math::Vec3;
use serde::{Deserialize, Serialize};

/// A point in simulation space, serialized as `[x, y, z]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position3(pub [f32; 3]);

impl Position3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self([x, y, z])
    }
}

impl From<Position3> for Vec3 {
    fn from(p: Position3) -> Self {
        Vec3::from_array(p.0)
    }
}

impl From<Vec3> for Position3 {
    fn from(v: Vec3) -> Self {
        Self(v.to_array())
    }
}

/// A protein sphere, serialized as `[[x, y, z], radius]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Protein(pub Position3, pub f32);

impl Protein {
    pub fn position(&self) -> Position3 {
        self.0
    }

    pub fn radius(&self) -> f32 {
        self.1
    }
}

/// One timestep of the simulation.
///
/// Both lists default to empty when their key is absent; whether an empty
/// lipid list is acceptable is decided by [`FrameSequence`](super::FrameSequence).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    #[serde(default)]
    pub lipids: Vec<Position3>,
    #[serde(default)]
    pub proteins: Vec<Protein>,
}
