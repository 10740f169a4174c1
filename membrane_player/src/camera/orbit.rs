//! OrbitCamera component and system: left-drag to rotate, wheel to zoom.

use std::f32::consts::FRAC_PI_2;

use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use crate::ui::PointerOverUi;

const ROTATE_SPEED: f32 = 0.005;
const ZOOM_STEP: f32 = 0.1;
const PIXELS_PER_LINE: f32 = 20.0;
const MIN_RADIUS: f32 = 0.5;
const MAX_RADIUS: f32 = 100.0;
const PITCH_LIMIT: f32 = FRAC_PI_2 - 0.01;

/// Spherical camera position around `target`.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub radius: f32,
    pub yaw: f32,
    pub pitch: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            radius: 5.0,
            yaw: 0.0,
            pitch: 0.0,
        }
    }
}

impl OrbitCamera {
    pub fn transform(&self) -> Transform {
        let offset = Vec3::new(
            self.radius * self.pitch.cos() * self.yaw.sin(),
            self.radius * self.pitch.sin(),
            self.radius * self.pitch.cos() * self.yaw.cos(),
        );
        Transform::from_translation(self.target + offset).looking_at(self.target, Vec3::Y)
    }

    pub fn rotate(&mut self, delta: Vec2) {
        self.yaw -= delta.x * ROTATE_SPEED;
        self.pitch = (self.pitch + delta.y * ROTATE_SPEED).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Positive `lines` zooms in.
    pub fn zoom(&mut self, lines: f32) {
        self.radius = (self.radius * (1.0 - lines * ZOOM_STEP)).clamp(MIN_RADIUS, MAX_RADIUS);
    }
}

pub fn orbit_camera_plugin(app: &mut App) {
    app.add_systems(Update, orbit_camera_system);
}

fn orbit_camera_system(
    buttons: Res<ButtonInput<MouseButton>>,
    mut motion: EventReader<MouseMotion>,
    mut wheel: EventReader<MouseWheel>,
    pointer: Option<Res<PointerOverUi>>,
    mut cameras: Query<(&mut OrbitCamera, &mut Transform)>,
) {
    if pointer.is_some_and(|p| p.0) {
        motion.clear();
        wheel.clear();
        return;
    }

    let drag: Vec2 = if buttons.pressed(MouseButton::Left) {
        motion.read().map(|m| m.delta).sum()
    } else {
        motion.clear();
        Vec2::ZERO
    };
    let scroll: f32 = wheel
        .read()
        .map(|w| match w.unit {
            MouseScrollUnit::Line => w.y,
            MouseScrollUnit::Pixel => w.y / PIXELS_PER_LINE,
        })
        .sum();

    if drag == Vec2::ZERO && scroll == 0.0 {
        return;
    }

    for (mut orbit, mut transform) in &mut cameras {
        orbit.rotate(drag);
        orbit.zoom(scroll);
        *transform = orbit.transform();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_orbit_sits_on_positive_z() {
        let t = OrbitCamera::default().transform();
        assert!((t.translation - Vec3::new(0.0, 0.0, 5.0)).length() < 1e-5);
        assert!((t.forward().as_vec3() - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn pitch_is_clamped() {
        let mut orbit = OrbitCamera::default();
        orbit.rotate(Vec2::new(0.0, 1.0e6));
        assert!(orbit.pitch < FRAC_PI_2);
        orbit.rotate(Vec2::new(0.0, -1.0e7));
        assert!(orbit.pitch > -FRAC_PI_2);
    }

    #[test]
    fn zoom_stays_in_bounds() {
        let mut orbit = OrbitCamera::default();
        orbit.zoom(3.0);
        assert!(orbit.radius < 5.0);
        for _ in 0..200 {
            orbit.zoom(5.0);
        }
        assert_eq!(orbit.radius, MIN_RADIUS);
        for _ in 0..200 {
            orbit.zoom(-5.0);
        }
        assert_eq!(orbit.radius, MAX_RADIUS);
    }

    #[test]
    fn rotation_keeps_distance_to_target() {
        let mut orbit = OrbitCamera {
            target: Vec3::new(1.0, 1.0, 0.0),
            ..default()
        };
        orbit.rotate(Vec2::new(120.0, -40.0));
        let t = orbit.transform();
        assert!((t.translation.distance(orbit.target) - orbit.radius).abs() < 1e-4);
    }
}
