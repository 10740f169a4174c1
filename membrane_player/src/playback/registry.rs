//! EntityRegistry: one persistent sphere handle per lipid and protein slot.

use bevy::log::info;
use thiserror::Error;

use crate::data::{Frame, FrameSequence};
use crate::render::{Appearance, RenderBridge, LIPID_RADIUS};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("lipid spheres are already initialized")]
    LipidsAlreadyInitialized,
    #[error("protein spheres are already initialized")]
    ProteinsAlreadyInitialized,
    #[error("protein spheres must be created after lipid spheres")]
    ProteinsBeforeLipids,
}

/// Handle `i` in `lipids` is bound to `frame.lipids[i]` for every frame.
#[derive(Clone, Debug)]
pub struct EntityRegistry<H> {
    lipids: Vec<H>,
    proteins: Vec<H>,
    lipids_ready: bool,
    proteins_ready: bool,
}

impl<H> Default for EntityRegistry<H> {
    fn default() -> Self {
        Self {
            lipids: Vec::new(),
            proteins: Vec::new(),
            lipids_ready: false,
            proteins_ready: false,
        }
    }
}

impl<H: Copy> EntityRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build every sphere for `frames`: lipids sized from frame 0, then proteins.
    pub fn populate<B>(frames: &FrameSequence, bridge: &mut B) -> Result<Self, RegistryError>
    where
        B: RenderBridge<Handle = H>,
    {
        let mut registry = Self::new();
        registry.init_lipids(frames.lipid_count(), bridge)?;
        registry.init_proteins(frames.first(), bridge)?;
        Ok(registry)
    }

    /// Create `count` lipid spheres sharing one appearance and add them to the
    /// scene. Positions are written on the first applied frame.
    pub fn init_lipids<B>(&mut self, count: usize, bridge: &mut B) -> Result<(), RegistryError>
    where
        B: RenderBridge<Handle = H>,
    {
        if self.lipids_ready {
            return Err(RegistryError::LipidsAlreadyInitialized);
        }
        self.create_lipids(count, bridge);
        Ok(())
    }

    /// Create one sphere per protein in `first`, sized by its own radius and
    /// placed at its initial position. An empty protein list is valid.
    pub fn init_proteins<B>(&mut self, first: &Frame, bridge: &mut B) -> Result<(), RegistryError>
    where
        B: RenderBridge<Handle = H>,
    {
        if !self.lipids_ready {
            return Err(RegistryError::ProteinsBeforeLipids);
        }
        if self.proteins_ready {
            return Err(RegistryError::ProteinsAlreadyInitialized);
        }
        self.create_proteins(first, bridge);
        Ok(())
    }

    fn create_lipids<B>(&mut self, count: usize, bridge: &mut B)
    where
        B: RenderBridge<Handle = H>,
    {
        info!("initializing {count} lipids");
        self.lipids.reserve(count);
        for _ in 0..count {
            let handle = bridge.create_sphere(LIPID_RADIUS, Appearance::Lipid);
            bridge.add_to_scene(handle);
            self.lipids.push(handle);
        }
        self.lipids_ready = true;
    }

    fn create_proteins<B>(&mut self, first: &Frame, bridge: &mut B)
    where
        B: RenderBridge<Handle = H>,
    {
        info!("initializing {} proteins", first.proteins.len());
        for protein in &first.proteins {
            let handle = bridge.create_sphere(protein.radius(), Appearance::Protein);
            bridge.set_position(handle, protein.position());
            bridge.add_to_scene(handle);
            self.proteins.push(handle);
        }
        self.proteins_ready = true;
    }

    pub fn lipid_handles(&self) -> &[H] {
        &self.lipids
    }

    pub fn protein_handles(&self) -> &[H] {
        &self.proteins
    }

    pub fn lipid_count(&self) -> usize {
        self.lipids.len()
    }

    pub fn protein_count(&self) -> usize {
        self.proteins.len()
    }
}
