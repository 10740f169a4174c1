//! Render bridge: the capabilities the playback core needs from a 3D engine.

mod bevy_bridge;
mod recording;

use bevy::prelude::*;

use crate::data::Position3;

pub use bevy_bridge::{BevyBridge, Palette, Particle};
pub use recording::{RecordedSphere, RecordingBridge};

/// Radius shared by every lipid sphere.
pub const LIPID_RADIUS: f32 = 0.1;

/// Visual style of a sphere. All lipids share one; proteins share another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Appearance {
    Lipid,
    Protein,
}

impl Appearance {
    pub fn color(self) -> Color {
        match self {
            Appearance::Lipid => Color::srgb_u8(0x33, 0xcc, 0xff),
            Appearance::Protein => Color::srgb_u8(0xff, 0x33, 0x66),
        }
    }
}

/// Scene operations used to create and move particle spheres.
///
/// Scheduling the next tick and drawing are left to the host engine; the
/// core only creates spheres once and writes their positions afterwards.
pub trait RenderBridge {
    type Handle: Copy;

    fn create_sphere(&mut self, radius: f32, appearance: Appearance) -> Self::Handle;
    fn add_to_scene(&mut self, handle: Self::Handle);
    fn set_position(&mut self, handle: Self::Handle, position: Position3);
}
