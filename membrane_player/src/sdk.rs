//! SDK entry points and builder for composing the player app.

use std::path::PathBuf;

use bevy::prelude::*;

use crate::camera::orbit_camera_plugin;
use crate::config;
use crate::data::{init_frame_channel, FrameChannel, SnapshotDir};
use crate::scene::{ingest_frames, playback_tick, setup_scene};
use crate::ui::{fullscreen_plugin, hud_plugin, timeline_plugin};

/// Builder for constructing a Membrane app with customizable plugins.
pub struct PlayerBuilder {
    snapshot_dir: Option<PathBuf>,
    frame_count: usize,
    channel: Option<FrameChannel>,
    window_title: String,
    window_resolution: (f32, f32),
    clear_color: Color,
    enable_orbit_camera: bool,
    enable_hud: bool,
    enable_timeline: bool,
    enable_fullscreen_key: bool,
}

impl Default for PlayerBuilder {
    fn default() -> Self {
        Self {
            snapshot_dir: None,
            frame_count: config::TOTAL_FRAMES,
            channel: None,
            window_title: "Membrane".to_string(),
            window_resolution: (1280.0, 720.0),
            clear_color: Color::srgb(0.02, 0.02, 0.04),
            enable_orbit_camera: true,
            enable_hud: true,
            enable_timeline: true,
            enable_fullscreen_key: true,
        }
    }
}

impl PlayerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read snapshots from `dir` instead of `SNAPSHOT_DIR`.
    pub fn snapshot_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.snapshot_dir = Some(dir.into());
        self
    }

    pub fn frame_count(mut self, count: usize) -> Self {
        self.frame_count = count;
        self
    }

    /// Use a prepared loader channel (see [`crate::data::init_source_channel`]);
    /// the snapshot directory and frame count are then ignored.
    pub fn channel(mut self, channel: FrameChannel) -> Self {
        self.channel = Some(channel);
        self
    }

    pub fn window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    pub fn window_resolution(mut self, width: f32, height: f32) -> Self {
        self.window_resolution = (width, height);
        self
    }

    pub fn clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    pub fn disable_orbit_camera(mut self) -> Self {
        self.enable_orbit_camera = false;
        self
    }

    pub fn disable_hud(mut self) -> Self {
        self.enable_hud = false;
        self
    }

    pub fn disable_timeline(mut self) -> Self {
        self.enable_timeline = false;
        self
    }

    pub fn disable_fullscreen_key(mut self) -> Self {
        self.enable_fullscreen_key = false;
        self
    }

    /// Build the Bevy app. Snapshot loading starts here, on its own thread.
    pub fn build(self) -> App {
        let channel = self.channel.unwrap_or_else(|| {
            let dir = self.snapshot_dir.unwrap_or_else(config::snapshot_dir);
            init_frame_channel(SnapshotDir::new(dir), self.frame_count)
        });

        let mut app = App::new();
        app.add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: self.window_title,
                resolution: self.window_resolution.into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(self.clear_color))
        .insert_resource(channel)
        .add_systems(Startup, setup_scene)
        .add_systems(Update, (ingest_frames, playback_tick).chain());

        if self.enable_orbit_camera {
            app.add_plugins(orbit_camera_plugin);
        }
        if self.enable_hud {
            app.add_plugins(hud_plugin);
        }
        if self.enable_timeline {
            app.add_plugins(timeline_plugin);
        }
        if self.enable_fullscreen_key {
            app.add_plugins(fullscreen_plugin);
        }

        app
    }
}
