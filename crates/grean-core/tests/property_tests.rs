//! # Property-Based Tests
//!
//! Sequencer invariants under arbitrary interleavings of time and events.

use grean_core::{HeroContent, HeroView, Millis, RevealState, ScrollMetrics, Sequencer};
use proptest::collection::vec;
use proptest::prelude::*;

/// One step of a randomly generated run.
#[derive(Debug, Clone, Copy)]
enum Step {
    Advance(u64),
    ExternalLoad,
    Unmount,
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        8 => (0u64..1_500).prop_map(Step::Advance),
        1 => Just(Step::ExternalLoad),
        1 => Just(Step::Unmount),
    ]
}

fn monotonic(before: &RevealState, after: &RevealState) -> bool {
    let flag = |a: bool, b: bool| !a || b;
    after.loading_progress >= before.loading_progress
        && flag(before.loading_complete, after.loading_complete)
        && flag(before.external_content_loaded, after.external_content_loaded)
        && flag(before.content_visible, after.content_visible)
        && flag(before.secondary_label_visible, after.secondary_label_visible)
        && flag(before.torn_down, after.torn_down)
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// Flags never go from true back to false and progress never decreases.
    #[test]
    fn phases_are_monotonic(
        reduced in any::<bool>(),
        steps in vec(step_strategy(), 1..60)
    ) {
        let mut seq = Sequencer::default();
        seq.start(reduced);

        for step in steps {
            let before = *seq.state();
            match step {
                Step::Advance(ms) => seq.advance(Millis(ms)),
                Step::ExternalLoad => seq.external_load(),
                Step::Unmount => seq.unmount(),
            }
            prop_assert!(monotonic(&before, seq.state()));
        }
    }

    /// Content never without load; label never without content.
    #[test]
    fn causal_ordering_holds(
        reduced in any::<bool>(),
        steps in vec(step_strategy(), 1..60)
    ) {
        let mut seq = Sequencer::default();
        seq.start(reduced);

        for step in steps {
            match step {
                Step::Advance(ms) => seq.advance(Millis(ms)),
                Step::ExternalLoad => seq.external_load(),
                Step::Unmount => seq.unmount(),
            }
            for entry in seq.timeline() {
                let s = entry.snapshot;
                prop_assert!(!s.content_visible || s.external_content_loaded);
                prop_assert!(!s.secondary_label_visible || s.content_visible);
            }
        }
    }

    /// Progress values are always multiples of the step until they reach 100.
    #[test]
    fn progress_moves_in_steps(total in 0u64..6_000) {
        let mut seq = Sequencer::default();
        seq.start(false);
        seq.advance(Millis(total));

        let progress = seq.snapshot().loading_progress;
        prop_assert_eq!(progress % 5, 0);
        let expected = ((total / 200) * 5).min(100) as u8;
        prop_assert_eq!(progress, expected);
    }

    /// Hero text and contact badge are present exactly when both gates are open.
    #[test]
    fn hero_presence_matches_gates(
        reduced in any::<bool>(),
        load_at in 0u64..8_000,
        observe_at in 0u64..10_000
    ) {
        let mut seq = Sequencer::default();
        seq.start(reduced);
        seq.advance(Millis(load_at));
        seq.external_load();
        seq.advance(Millis(observe_at));

        let snap = seq.snapshot();
        let view = HeroView::from_snapshot(&snap, &HeroContent::default(), seq.timing());
        let gates = snap.content_visible && snap.loading_complete;
        prop_assert_eq!(view.hero_text.is_some(), gates);
        prop_assert_eq!(view.contact_badge.is_some(), gates);
    }

    /// After unmount no amount of time or input changes the state.
    #[test]
    fn no_mutation_after_teardown(
        unmount_at in 0u64..6_000,
        later in vec(0u64..5_000, 1..10)
    ) {
        let mut seq = Sequencer::default();
        seq.start(false);
        seq.external_load();
        seq.advance(Millis(unmount_at));
        seq.unmount();
        let frozen = *seq.state();

        for ms in later {
            seq.advance(Millis(ms));
            seq.external_load();
            prop_assert_eq!(*seq.state(), frozen);
        }
    }

    /// Scroll progress stays within [0, 1000] permille.
    #[test]
    fn scroll_progress_is_clamped(
        offset in 0u64..1_000_000,
        document_height in 0u64..1_000_000,
        viewport_height in 0u64..1_000_000
    ) {
        let progress = ScrollMetrics { offset, document_height, viewport_height }.progress();
        prop_assert!(progress.permille <= 1000);
    }
}
