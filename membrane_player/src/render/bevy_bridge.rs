//! Bevy implementation of the render bridge: spheres are mesh entities.

use std::collections::HashMap;

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::data::Position3;
use crate::render::{Appearance, RenderBridge};

const SPHERE_SECTORS: u32 = 16;
const SPHERE_STACKS: u32 = 16;

/// Marker for every sphere spawned through the bridge.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Particle(pub Appearance);

/// Shared materials per appearance and sphere meshes per radius.
#[derive(Resource)]
pub struct Palette {
    lipid_material: Handle<StandardMaterial>,
    protein_material: Handle<StandardMaterial>,
    meshes_by_radius: HashMap<u32, Handle<Mesh>>,
}

impl FromWorld for Palette {
    fn from_world(world: &mut World) -> Self {
        let mut materials = world.resource_mut::<Assets<StandardMaterial>>();
        Self {
            lipid_material: materials.add(StandardMaterial {
                base_color: Appearance::Lipid.color(),
                ..default()
            }),
            protein_material: materials.add(StandardMaterial {
                base_color: Appearance::Protein.color(),
                ..default()
            }),
            meshes_by_radius: HashMap::new(),
        }
    }
}

impl Palette {
    pub fn material(&self, appearance: Appearance) -> Handle<StandardMaterial> {
        match appearance {
            Appearance::Lipid => self.lipid_material.clone(),
            Appearance::Protein => self.protein_material.clone(),
        }
    }

    /// Sphere mesh for `radius`, built once and reused.
    pub fn sphere_mesh(&mut self, radius: f32, meshes: &mut Assets<Mesh>) -> Handle<Mesh> {
        self.meshes_by_radius
            .entry(radius.to_bits())
            .or_insert_with(|| {
                meshes.add(
                    Sphere::new(radius)
                        .mesh()
                        .uv(SPHERE_SECTORS, SPHERE_STACKS),
                )
            })
            .clone()
    }

    pub fn cached_meshes(&self) -> usize {
        self.meshes_by_radius.len()
    }
}

/// System parameter exposing the Bevy world as a [`RenderBridge`].
///
/// New spheres start hidden and become visible in `add_to_scene`. Positions
/// of spheres spawned earlier are written through the transform query;
/// spheres spawned in the same system get a transform command instead.
#[derive(SystemParam)]
pub struct BevyBridge<'w, 's> {
    commands: Commands<'w, 's>,
    meshes: ResMut<'w, Assets<Mesh>>,
    palette: ResMut<'w, Palette>,
    transforms: Query<'w, 's, &'static mut Transform, With<Particle>>,
}

impl<'w, 's> BevyBridge<'w, 's> {
    pub fn commands(&mut self) -> &mut Commands<'w, 's> {
        &mut self.commands
    }
}

impl RenderBridge for BevyBridge<'_, '_> {
    type Handle = Entity;

    fn create_sphere(&mut self, radius: f32, appearance: Appearance) -> Entity {
        let mesh = self.palette.sphere_mesh(radius, &mut self.meshes);
        let material = self.palette.material(appearance);
        self.commands
            .spawn((
                Particle(appearance),
                Mesh3d(mesh),
                MeshMaterial3d(material),
                Transform::default(),
                Visibility::Hidden,
            ))
            .id()
    }

    fn add_to_scene(&mut self, handle: Entity) {
        self.commands.entity(handle).insert(Visibility::Visible);
    }

    fn set_position(&mut self, handle: Entity, position: Position3) {
        let translation = Vec3::from(position);
        match self.transforms.get_mut(handle) {
            Ok(mut transform) => transform.translation = translation,
            Err(_) => {
                self.commands
                    .entity(handle)
                    .insert(Transform::from_translation(translation));
            }
        }
    }
}
