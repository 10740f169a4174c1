//! PlaybackController: current frame, play/pause, scrubbing and the per-tick step.

use std::sync::Arc;

use bevy::log::debug;
use thiserror::Error;

use crate::data::FrameSequence;
use crate::playback::EntityRegistry;
use crate::render::RenderBridge;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlaybackError {
    #[error("frame index {index} out of range 0..{len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Whether a frame reached the spheres.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameApplied {
    Applied,
    /// The frame is absent; spheres keep their previous positions.
    Missing,
}

/// Current index and play flag. `current_index` is always below the
/// sequence length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaybackState {
    pub current_index: usize,
    pub playing: bool,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            current_index: 0,
            playing: true,
        }
    }
}

/// Drives lipid positions from a shared, read-only frame sequence.
/// Never creates or destroys spheres.
#[derive(Clone, Debug)]
pub struct PlaybackController {
    state: PlaybackState,
    frames: Arc<FrameSequence>,
    display_index: usize,
}

impl PlaybackController {
    /// Starts playing from frame 0.
    pub fn new(frames: Arc<FrameSequence>) -> Self {
        Self {
            state: PlaybackState::default(),
            frames,
            display_index: 0,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state.playing
    }

    pub fn frames(&self) -> &Arc<FrameSequence> {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Index last shown on the scrub widget.
    pub fn display_index(&self) -> usize {
        self.display_index
    }

    /// Flip play/pause; the index is untouched. Returns the new play flag.
    pub fn toggle_play(&mut self) -> bool {
        self.state.playing = !self.state.playing;
        self.state.playing
    }

    /// Jump to `index` and apply it immediately, whether playing or paused.
    pub fn scrub<B: RenderBridge>(
        &mut self,
        index: usize,
        registry: &EntityRegistry<B::Handle>,
        bridge: &mut B,
    ) -> Result<FrameApplied, PlaybackError> {
        let len = self.frames.len();
        if index >= len {
            return Err(PlaybackError::IndexOutOfRange { index, len });
        }
        self.state.current_index = index;
        self.display_index = index;
        Ok(self.apply_frame(index, registry, bridge))
    }

    /// One animation step. While playing: apply the current frame, publish its
    /// index, then advance with wrap-around. Paused ticks do nothing.
    pub fn tick<B: RenderBridge>(
        &mut self,
        registry: &EntityRegistry<B::Handle>,
        bridge: &mut B,
    ) -> Option<FrameApplied> {
        if !self.state.playing {
            return None;
        }
        let index = self.state.current_index;
        let applied = self.apply_frame(index, registry, bridge);
        self.display_index = index;
        self.state.current_index = (index + 1) % self.frames.len();
        Some(applied)
    }

    /// Write frame `index`'s lipid positions into the lipid spheres.
    /// An absent frame leaves every sphere where it was.
    pub fn apply_frame<B: RenderBridge>(
        &self,
        index: usize,
        registry: &EntityRegistry<B::Handle>,
        bridge: &mut B,
    ) -> FrameApplied {
        let Some(frame) = self.frames.get(index) else {
            debug!("frame {index} is missing, skipping update");
            return FrameApplied::Missing;
        };
        for (&handle, &position) in registry.lipid_handles().iter().zip(&frame.lipids) {
            bridge.set_position(handle, position);
        }
        FrameApplied::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Frame, Position3, Protein};
    use crate::render::RecordingBridge;

    const LIPIDS: usize = 3;

    fn lipid_at(frame: usize, slot: usize) -> Position3 {
        Position3::new(frame as f32, slot as f32, -(frame as f32))
    }

    fn sequence(len: usize, missing: &[usize]) -> Arc<FrameSequence> {
        let slots = (0..len)
            .map(|f| {
                (!missing.contains(&f)).then(|| Frame {
                    lipids: (0..LIPIDS).map(|s| lipid_at(f, s)).collect(),
                    proteins: vec![Protein(Position3::new(1.0, 2.0, 3.0), 0.5)],
                })
            })
            .collect();
        Arc::new(FrameSequence::from_slots(slots).unwrap())
    }

    fn setup(
        len: usize,
        missing: &[usize],
    ) -> (PlaybackController, EntityRegistry<usize>, RecordingBridge) {
        let frames = sequence(len, missing);
        let mut bridge = RecordingBridge::new();
        let registry = EntityRegistry::populate(&frames, &mut bridge).unwrap();
        (PlaybackController::new(frames), registry, bridge)
    }

    fn expected(frame: usize) -> Vec<Position3> {
        (0..LIPIDS).map(|s| lipid_at(frame, s)).collect()
    }

    #[test]
    fn starts_playing_at_zero() {
        let (controller, _, _) = setup(4, &[]);
        assert_eq!(
            controller.state(),
            PlaybackState {
                current_index: 0,
                playing: true
            }
        );
    }

    #[test]
    fn first_tick_places_lipids_at_frame_zero() {
        let (mut controller, registry, mut bridge) = setup(4, &[]);

        assert_eq!(
            controller.tick(&registry, &mut bridge),
            Some(FrameApplied::Applied)
        );

        assert_eq!(bridge.positions(registry.lipid_handles()), expected(0));
        assert_eq!(controller.display_index(), 0);
        assert_eq!(controller.state().current_index, 1);
    }

    #[test]
    fn tick_on_last_frame_applies_it_then_wraps() {
        let (mut controller, registry, mut bridge) = setup(60, &[]);
        controller.scrub(59, &registry, &mut bridge).unwrap();
        bridge.set_position(registry.lipid_handles()[0], Position3::default());

        controller.tick(&registry, &mut bridge);

        assert_eq!(bridge.positions(registry.lipid_handles()), expected(59));
        assert_eq!(controller.display_index(), 59);
        assert_eq!(controller.state().current_index, 0);
    }

    #[test]
    fn toggle_twice_restores_flag_and_keeps_index() {
        let (mut controller, registry, mut bridge) = setup(10, &[]);
        controller.scrub(6, &registry, &mut bridge).unwrap();
        let before = controller.state();

        assert!(!controller.toggle_play());
        assert_eq!(controller.state().current_index, 6);
        assert!(controller.toggle_play());

        assert_eq!(controller.state(), before);
    }

    #[test]
    fn paused_tick_changes_nothing() {
        let (mut controller, registry, mut bridge) = setup(5, &[]);
        controller.toggle_play();
        let moves_before: usize = bridge.spheres.iter().map(|s| s.moves).sum();

        assert_eq!(controller.tick(&registry, &mut bridge), None);

        let moves_after: usize = bridge.spheres.iter().map(|s| s.moves).sum();
        assert_eq!(moves_before, moves_after);
        assert_eq!(controller.state().current_index, 0);
    }

    #[test]
    fn scrub_applies_immediately_in_either_state() {
        for paused in [false, true] {
            let (mut controller, registry, mut bridge) = setup(8, &[]);
            if paused {
                controller.toggle_play();
            }

            let applied = controller.scrub(5, &registry, &mut bridge).unwrap();

            assert_eq!(applied, FrameApplied::Applied);
            assert_eq!(bridge.positions(registry.lipid_handles()), expected(5));
            assert_eq!(controller.state().current_index, 5);
            assert_eq!(controller.is_playing(), !paused);
        }
    }

    #[test]
    fn scrub_out_of_range_is_rejected() {
        let (mut controller, registry, mut bridge) = setup(8, &[]);

        let err = controller.scrub(8, &registry, &mut bridge).unwrap_err();

        assert_eq!(err, PlaybackError::IndexOutOfRange { index: 8, len: 8 });
        assert_eq!(controller.state().current_index, 0);
    }

    #[test]
    fn missing_frame_leaves_positions_unchanged() {
        let (mut controller, registry, mut bridge) = setup(6, &[3]);
        controller.scrub(2, &registry, &mut bridge).unwrap();

        assert_eq!(
            controller.apply_frame(3, &registry, &mut bridge),
            FrameApplied::Missing
        );
        assert_eq!(bridge.positions(registry.lipid_handles()), expected(2));

        controller.scrub(3, &registry, &mut bridge).unwrap();
        assert_eq!(bridge.positions(registry.lipid_handles()), expected(2));
        assert_eq!(
            controller.tick(&registry, &mut bridge),
            Some(FrameApplied::Missing)
        );
        assert_eq!(controller.state().current_index, 4);
    }

    #[test]
    fn proteins_never_move_during_playback() {
        let (mut controller, registry, mut bridge) = setup(2, &[]);
        let protein = registry.protein_handles()[0];

        for _ in 0..5 {
            controller.tick(&registry, &mut bridge);
        }

        let sphere = bridge.sphere(protein);
        assert_eq!(sphere.position, Position3::new(1.0, 2.0, 3.0));
        assert_eq!(sphere.radius, 0.5);
        assert_eq!(sphere.moves, 1);
    }
}
