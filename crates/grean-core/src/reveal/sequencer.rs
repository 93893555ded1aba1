//! # Virtual-Time Sequencer
//!
//! Drives the [`transition`] function with a [`TimerTable`] and a clock that
//! only moves when the caller says so.
//!
//! The sequencer owns every timer it schedules. Tearing it down (or dropping
//! it) discards the table, so no callback can reach a dead sequencer.
//!
//! ```
//! use grean_core::{Millis, RevealTiming, Sequencer};
//!
//! let mut seq = Sequencer::new(RevealTiming::default())?;
//! seq.start(false);
//! seq.external_load();
//! seq.advance(Millis(4_500));
//! assert!(seq.snapshot().loading_complete);
//! assert!(seq.snapshot().secondary_label_visible);
//! # Ok::<(), grean_core::GreanError>(())
//! ```

use super::machine::{Effect, RevealEvent, RevealState, TimerId, transition};
use super::snapshot::RevealSnapshot;
use super::timers::TimerTable;
use crate::{GreanError, Millis, RevealTiming};
use serde::Serialize;

/// Callback invoked when the hero becomes ready.
pub type ReadyHook = Box<dyn FnMut(&RevealSnapshot) + Send>;

/// One state change, with the event that caused it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub event: RevealEvent,
    pub snapshot: RevealSnapshot,
}

/// The staged-reveal sequencer.
pub struct Sequencer {
    timing: RevealTiming,
    state: RevealState,
    timers: TimerTable,
    now: Millis,
    ready_count: u32,
    timeline: Vec<TimelineEntry>,
    on_ready: Option<ReadyHook>,
}

impl std::fmt::Debug for Sequencer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sequencer")
            .field("now", &self.now)
            .field("state", &self.state)
            .field("pending_timers", &self.timers.len())
            .finish_non_exhaustive()
    }
}

impl Default for Sequencer {
    /// A sequencer with the stock timing.
    fn default() -> Self {
        Self::with_valid_timing(RevealTiming::default())
    }
}

impl Sequencer {
    /// Create an unmounted sequencer at time zero.
    ///
    /// Rejects timing that could never reach full progress (a zero step or a
    /// zero tick interval).
    pub fn new(timing: RevealTiming) -> Result<Self, GreanError> {
        timing.validate()?;
        Ok(Self::with_valid_timing(timing))
    }

    fn with_valid_timing(timing: RevealTiming) -> Self {
        Self {
            timing,
            state: RevealState::new(),
            timers: TimerTable::new(),
            now: Millis::ZERO,
            ready_count: 0,
            timeline: Vec::new(),
            on_ready: None,
        }
    }

    /// Register the "both ready" observer. Replaces any previous hook.
    pub fn on_ready(&mut self, hook: ReadyHook) {
        self.on_ready = Some(hook);
    }

    // =========================================================================
    // EXTERNAL INPUTS
    // =========================================================================

    /// Mount with the motion preference read once by the caller.
    pub fn start(&mut self, reduced_motion: bool) {
        self.dispatch(RevealEvent::Start { reduced_motion });
    }

    /// The embedded visualization reported that it finished loading.
    pub fn external_load(&mut self) {
        self.dispatch(RevealEvent::ExternalLoad);
    }

    /// Tear down. Pending timers are revoked; later calls are no-ops.
    pub fn unmount(&mut self) {
        self.dispatch(RevealEvent::Unmount);
        self.timers.cancel_all();
    }

    // =========================================================================
    // CLOCK
    // =========================================================================

    /// Move the clock forward by `span`, firing every timer that comes due.
    pub fn advance(&mut self, span: Millis) {
        let target = self.now.saturating_add(span);
        self.advance_to(target);
    }

    /// Move the clock to `target`. Moving backwards is a no-op.
    pub fn advance_to(&mut self, target: Millis) {
        while let Some(fired) = self.timers.pop_due(target) {
            self.now = fired.due.max(self.now);
            self.dispatch(fired.id.event());
        }
        self.now = self.now.max(target);
    }

    /// Fire only the next pending timer, if any, moving the clock to it.
    ///
    /// Returns the timer that fired.
    pub fn step(&mut self) -> Option<TimerId> {
        let due = self.timers.next_due()?;
        let fired = self.timers.pop_due(due)?;
        self.now = fired.due.max(self.now);
        self.dispatch(fired.id.event());
        Some(fired.id)
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    #[must_use]
    pub fn now(&self) -> Millis {
        self.now
    }

    #[must_use]
    pub fn timing(&self) -> &RevealTiming {
        &self.timing
    }

    #[must_use]
    pub fn state(&self) -> &RevealState {
        &self.state
    }

    #[must_use]
    pub fn snapshot(&self) -> RevealSnapshot {
        RevealSnapshot::capture(&self.state, self.now)
    }

    /// Every state change since creation, oldest first.
    #[must_use]
    pub fn timeline(&self) -> &[TimelineEntry] {
        &self.timeline
    }

    /// Due time of the next pending timer.
    #[must_use]
    pub fn next_due(&self) -> Option<Millis> {
        self.timers.next_due()
    }

    /// Pending timers in firing order.
    #[must_use]
    pub fn pending_timers(&self) -> Vec<(TimerId, Millis)> {
        self.timers.pending().collect()
    }

    /// How many times the ready notification was emitted (0 or 1).
    #[must_use]
    pub fn ready_count(&self) -> u32 {
        self.ready_count
    }

    // =========================================================================
    // INTERNALS
    // =========================================================================

    fn dispatch(&mut self, event: RevealEvent) {
        let result = transition(&self.state, event, &self.timing);
        let changed = result.changed_from(&self.state);
        self.state = result.state;

        if changed {
            self.timeline.push(TimelineEntry {
                event,
                snapshot: self.snapshot(),
            });
        }

        for effect in result.effects {
            match effect {
                Effect::StartTimer {
                    timer,
                    delay,
                    repeat,
                } => self.timers.schedule(timer, self.now, delay, repeat),
                Effect::CancelTimer { timer } => {
                    self.timers.cancel(timer);
                }
                Effect::NotifyReady => {
                    self.ready_count = self.ready_count.saturating_add(1);
                    let snapshot = self.snapshot();
                    if let Some(hook) = self.on_ready.as_mut() {
                        hook(&snapshot);
                    }
                }
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Phase;
    use std::sync::{Arc, Mutex};

    fn sequencer() -> Sequencer {
        Sequencer::default()
    }

    #[test]
    fn progress_passes_every_step_of_five() {
        let mut seq = sequencer();
        seq.start(false);
        assert_eq!(seq.snapshot().loading_progress, 0);

        for i in 1..=20u8 {
            seq.advance(Millis(200));
            assert_eq!(seq.snapshot().loading_progress, i * 5);
        }
        assert!(!seq.snapshot().loading_complete);

        seq.advance(Millis(499));
        assert!(!seq.snapshot().loading_complete);
        seq.advance(Millis(1));
        assert!(seq.snapshot().loading_complete);
        assert_eq!(seq.now(), Millis(4_500));
    }

    #[test]
    fn progress_tick_stops_at_full() {
        let mut seq = sequencer();
        seq.start(false);
        seq.advance(Millis(4_000));
        assert!(!seq.pending_timers().iter().any(|(id, _)| *id == TimerId::ProgressTick));
        assert_eq!(seq.pending_timers(), vec![(TimerId::Settle, Millis(4_500))]);
    }

    #[test]
    fn reduced_motion_has_no_ticks() {
        let mut seq = sequencer();
        seq.start(true);
        let snap = seq.snapshot();
        assert_eq!(snap.loading_progress, 100);
        assert!(snap.loading_complete);
        assert!(seq.pending_timers().is_empty());
        // Only the start itself shows up in the timeline.
        assert_eq!(seq.timeline().len(), 1);
    }

    #[test]
    fn external_load_scenario() {
        let mut seq = sequencer();
        seq.start(false);
        seq.external_load();

        seq.advance(Millis(500));
        assert!(seq.snapshot().content_visible);
        assert!(!seq.snapshot().secondary_label_visible);

        seq.advance(Millis(500));
        assert!(seq.snapshot().secondary_label_visible);
        assert_eq!(seq.snapshot().phase, Phase::Loading);
    }

    #[test]
    fn full_scenario_reaches_fully_revealed() {
        let mut seq = sequencer();
        seq.start(false);
        seq.advance(Millis(1_000));
        seq.external_load();
        seq.advance(Millis(10_000));

        let snap = seq.snapshot();
        assert_eq!(snap.phase, Phase::FullyRevealed);
        assert_eq!(seq.ready_count(), 1);
        assert!(seq.next_due().is_none());
    }

    #[test]
    fn ready_hook_runs_once() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let mut seq = sequencer();
        seq.on_ready(Box::new(move |snap| {
            sink.lock().unwrap_or_else(|e| e.into_inner()).push(snap.at);
        }));
        seq.start(false);
        seq.external_load();
        seq.advance(Millis(20_000));

        let seen = seen.lock().unwrap_or_else(|e| e.into_inner());
        assert_eq!(*seen, vec![Millis(4_500)]);
    }

    #[test]
    fn unmount_stops_all_mutation() {
        let mut seq = sequencer();
        seq.start(false);
        seq.external_load();
        seq.unmount();
        let before = *seq.state();

        seq.advance(Millis(60_000));
        seq.external_load();

        assert_eq!(*seq.state(), before);
        assert!(seq.pending_timers().is_empty());
        assert!(seq.snapshot().torn_down);
    }

    #[test]
    fn zero_step_timing_is_rejected() {
        let timing = RevealTiming {
            progress_step: 0,
            ..RevealTiming::default()
        };
        assert!(matches!(
            Sequencer::new(timing),
            Err(GreanError::InvalidConfig(_))
        ));

        let timing = RevealTiming {
            tick_interval_ms: 0,
            ..RevealTiming::default()
        };
        assert!(Sequencer::new(timing).is_err());
        assert!(Sequencer::new(RevealTiming::default()).is_ok());
    }

    #[test]
    fn step_fires_one_timer() {
        let mut seq = sequencer();
        seq.start(false);
        assert_eq!(seq.step(), Some(TimerId::ProgressTick));
        assert_eq!(seq.now(), Millis(200));
        assert_eq!(seq.snapshot().loading_progress, 5);
    }

    #[test]
    fn advance_backwards_is_noop() {
        let mut seq = sequencer();
        seq.start(false);
        seq.advance(Millis(600));
        seq.advance_to(Millis(100));
        assert_eq!(seq.now(), Millis(600));
        assert_eq!(seq.snapshot().loading_progress, 15);
    }

    #[test]
    fn timeline_records_each_change() {
        let mut seq = sequencer();
        seq.start(false);
        seq.advance(Millis(400));
        let events: Vec<_> = seq.timeline().iter().map(|e| e.event).collect();
        assert_eq!(
            events,
            vec![
                RevealEvent::Start {
                    reduced_motion: false
                },
                RevealEvent::ProgressTick,
                RevealEvent::ProgressTick,
            ]
        );
        assert_eq!(seq.timeline()[2].snapshot.at, Millis(400));
    }
}
