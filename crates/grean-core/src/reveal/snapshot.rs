//! Snapshot record handed to the rendering layer.

use super::machine::{Phase, RevealState};
use crate::Millis;
use serde::{Deserialize, Serialize};

/// Immutable view of the sequencer at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealSnapshot {
    pub at: Millis,
    pub phase: Phase,
    pub loading_progress: u8,
    pub loading_complete: bool,
    pub external_content_loaded: bool,
    pub content_visible: bool,
    pub secondary_label_visible: bool,
    pub reduced_motion_requested: bool,
    pub torn_down: bool,
}

impl RevealSnapshot {
    #[must_use]
    pub fn capture(state: &RevealState, at: Millis) -> Self {
        Self {
            at,
            phase: state.phase(),
            loading_progress: state.loading_progress.value(),
            loading_complete: state.loading_complete,
            external_content_loaded: state.external_content_loaded,
            content_visible: state.content_visible,
            secondary_label_visible: state.secondary_label_visible,
            reduced_motion_requested: state.reduced_motion_requested,
            torn_down: state.torn_down,
        }
    }

    /// Snapshot of a sequencer that was never mounted.
    #[must_use]
    pub fn initial() -> Self {
        Self::capture(&RevealState::new(), Millis::ZERO)
    }

    /// Check if the hero text block and contact badge belong in the tree.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.content_visible && self.loading_complete
    }

    /// Check if the decorative ambient layers should be faded in.
    #[must_use]
    pub fn ambient_active(&self) -> bool {
        self.external_content_loaded && self.loading_complete
    }
}

impl Default for RevealSnapshot {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_snapshot() {
        let snap = RevealSnapshot::initial();
        assert_eq!(snap.phase, Phase::Initial);
        assert_eq!(snap.loading_progress, 0);
        assert!(!snap.is_ready());
        assert!(!snap.ambient_active());
    }

    #[test]
    fn ambient_needs_load_and_completion() {
        let mut snap = RevealSnapshot::initial();
        snap.loading_complete = true;
        assert!(!snap.ambient_active());
        snap.external_content_loaded = true;
        assert!(snap.ambient_active());
        assert!(!snap.is_ready());
    }

    #[test]
    fn serializes_phase_in_snake_case() {
        let json = serde_json::to_value(RevealSnapshot::initial()).expect("serialize");
        assert_eq!(json["phase"], "initial");
        assert_eq!(json["at"], 0);
    }
}
