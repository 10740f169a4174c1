//! Scene setup, frame ingestion and the per-tick playback system.

use std::sync::Arc;

use bevy::prelude::*;
use crossbeam_channel::TryRecvError;

use crate::camera::OrbitCamera;
use crate::data::{FrameChannel, LoadError};
use crate::playback::{EntityRegistry, PlaybackController};
use crate::render::{BevyBridge, Palette};

const CAMERA_FOV_DEGREES: f32 = 75.0;

/// Playback controller plus the spheres it drives. Present only once the
/// snapshots have loaded successfully.
#[derive(Resource)]
pub struct Player {
    pub controller: PlaybackController,
    pub registry: EntityRegistry<Entity>,
}

pub fn setup_scene(mut commands: Commands) {
    commands.init_resource::<Palette>();
    let orbit = OrbitCamera::default();
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: 0.1,
            far: 1000.0,
            ..default()
        }),
        orbit.transform(),
        orbit,
    ));
    commands.spawn((
        PointLight {
            range: 100.0,
            ..default()
        },
        Transform::from_xyz(10., 10., 10.),
    ));
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 80.0,
    });
}

/// Waits for the loader. On success builds every sphere (lipids, then
/// proteins) and starts playback; on failure logs and never starts.
pub fn ingest_frames(channel: Option<Res<FrameChannel>>, mut bridge: BevyBridge) {
    let Some(channel) = channel else {
        return;
    };
    let result = match channel.0.try_recv() {
        Ok(result) => result,
        Err(TryRecvError::Empty) => return,
        Err(TryRecvError::Disconnected) => Err(LoadError::Disconnected),
    };
    bridge.commands().remove_resource::<FrameChannel>();

    match result {
        Ok(frames) => {
            info!(
                "frames loaded: {} ({} missing), {} lipids, {} proteins",
                frames.len(),
                frames.missing_count(),
                frames.lipid_count(),
                frames.protein_count()
            );
            let registry = match EntityRegistry::populate(&frames, &mut bridge) {
                Ok(registry) => registry,
                Err(err) => {
                    error!("could not build particle spheres: {err}");
                    return;
                }
            };
            let controller = PlaybackController::new(Arc::new(frames));
            bridge.commands().insert_resource(Player {
                controller,
                registry,
            });
        }
        Err(err) => error!("snapshot loading failed, playback will not start: {err}"),
    }
}

/// One animation step per rendered frame.
pub fn playback_tick(player: Option<ResMut<Player>>, mut bridge: BevyBridge) {
    let Some(mut player) = player else {
        return;
    };
    let player = &mut *player;
    player.controller.tick(&player.registry, &mut bridge);
}
