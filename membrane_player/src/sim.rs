//! Toy bilayer simulation used to generate snapshot files.
//!
//! Lipids start in two leaflets and push each other apart with a short-range
//! soft repulsion; proteins are fixed spheres. Integration is explicit Euler.

use std::path::Path;

use bevy::math::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::data::{Frame, Position3, Protein, SnapshotWriteError};

const LEAFLET_Z: f32 = 0.5;
const LEAFLET_JITTER: f32 = 0.1;
const PATCH_HALF_WIDTH: f32 = 2.0;
const CUTOFF: f32 = 0.5;
const STRENGTH: f32 = 0.01;
const MIN_SEPARATION: f32 = 1e-5;
const DEFAULT_DT: f32 = 0.01;

#[derive(Clone, Debug, PartialEq)]
pub struct Lipid {
    pub pos: Vec3,
    pub vel: Vec3,
    pub force: Vec3,
}

impl Lipid {
    pub fn at(pos: Vec3) -> Self {
        Self {
            pos,
            vel: Vec3::ZERO,
            force: Vec3::ZERO,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FixedProtein {
    pub pos: Vec3,
    pub radius: f32,
}

pub struct Simulation {
    pub lipids: Vec<Lipid>,
    pub proteins: Vec<FixedProtein>,
    pub dt: f32,
}

impl Simulation {
    /// `n` lipids from OS entropy.
    pub fn new(n: usize) -> Self {
        Self::with_rng(n, &mut rand::thread_rng())
    }

    /// Reproducible layout for a given seed.
    pub fn seeded(n: usize, seed: u64) -> Self {
        Self::with_rng(n, &mut StdRng::seed_from_u64(seed))
    }

    /// Even indices go to the upper leaflet, odd to the lower one.
    pub fn with_rng(n: usize, rng: &mut impl Rng) -> Self {
        let lipids = (0..n)
            .map(|i| {
                let base_z = if i % 2 == 0 { LEAFLET_Z } else { -LEAFLET_Z };
                Lipid::at(Vec3::new(
                    rng.gen_range(-PATCH_HALF_WIDTH..PATCH_HALF_WIDTH),
                    rng.gen_range(-PATCH_HALF_WIDTH..PATCH_HALF_WIDTH),
                    base_z + rng.gen_range(-LEAFLET_JITTER..LEAFLET_JITTER),
                ))
            })
            .collect();

        let proteins = vec![
            FixedProtein {
                pos: Vec3::new(0.0, 0.0, 0.0),
                radius: 0.3,
            },
            FixedProtein {
                pos: Vec3::new(1.0, 1.0, 0.0),
                radius: 0.25,
            },
        ];

        Self {
            lipids,
            proteins,
            dt: DEFAULT_DT,
        }
    }

    /// Accumulate pairwise repulsion, then advance velocities and positions.
    pub fn step(&mut self) {
        for lipid in &mut self.lipids {
            lipid.force = Vec3::ZERO;
        }

        let n = self.lipids.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let dir = self.lipids[i].pos - self.lipids[j].pos;
                let dist = dir.length();
                if dist < CUTOFF && dist > MIN_SEPARATION {
                    let magnitude = STRENGTH * (1.0 / dist - 1.0 / CUTOFF);
                    let force = dir / dist * magnitude;
                    self.lipids[i].force += force;
                    self.lipids[j].force -= force;
                }
            }
        }

        for lipid in &mut self.lipids {
            lipid.vel += lipid.force * self.dt;
            lipid.pos += lipid.vel * self.dt;
        }
    }

    pub fn frame(&self) -> Frame {
        Frame {
            lipids: self.lipids.iter().map(|l| Position3::from(l.pos)).collect(),
            proteins: self
                .proteins
                .iter()
                .map(|p| Protein(Position3::from(p.pos), p.radius))
                .collect(),
        }
    }

    pub fn save_frame(&self, path: impl AsRef<Path>) -> Result<(), SnapshotWriteError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(&self.frame())?;
        std::fs::write(path, json).map_err(|source| SnapshotWriteError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
