//! # Reveal State Machine
//!
//! The transition function at the heart of the staged reveal.
//!
//! Two independent event sources feed the machine:
//! - the **progress timeline** (repeating tick, then a one-shot settle delay)
//! - the **visualization timeline** (external load, then two chained delays)
//!
//! [`transition`] is pure: it takes the current state and one event and
//! returns the next state plus the [`Effect`]s the driver must carry out.
//! Timers are never started or cancelled here, only requested.
//!
//! ## Phases
//!
//! | Phase | Condition |
//! |-------|-----------|
//! | `Initial` | not started |
//! | `Loading` | progress < 100 |
//! | `LoadWaiting` | progress = 100, content not yet shown together with loading |
//! | `ContentRevealing` | `content_visible && loading_complete` |
//! | `FullyRevealed` | ... and `secondary_label_visible` |

use crate::{Millis, Percent, RevealTiming};
use serde::{Deserialize, Serialize};

// =============================================================================
// TIMERS
// =============================================================================

/// Every timer the sequencer can ask its driver for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerId {
    /// Repeating progress tick.
    ProgressTick,
    /// One-shot delay between progress 100 and loading complete.
    Settle,
    /// One-shot delay between external load and content visible.
    ContentDelay,
    /// One-shot delay between content visible and the secondary label.
    LabelDelay,
}

impl TimerId {
    /// All timers, in declaration order.
    pub const ALL: [TimerId; 4] = [
        TimerId::ProgressTick,
        TimerId::Settle,
        TimerId::ContentDelay,
        TimerId::LabelDelay,
    ];

    /// The event delivered to the machine when this timer fires.
    #[must_use]
    pub fn event(self) -> RevealEvent {
        match self {
            TimerId::ProgressTick => RevealEvent::ProgressTick,
            TimerId::Settle => RevealEvent::SettleElapsed,
            TimerId::ContentDelay => RevealEvent::ContentDelayElapsed,
            TimerId::LabelDelay => RevealEvent::LabelDelayElapsed,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            TimerId::ProgressTick => "progress_tick",
            TimerId::Settle => "settle",
            TimerId::ContentDelay => "content_delay",
            TimerId::LabelDelay => "label_delay",
        }
    }
}

// =============================================================================
// EVENTS & EFFECTS
// =============================================================================

/// Inputs to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RevealEvent {
    /// Mount. The motion preference is read exactly once, here.
    Start { reduced_motion: bool },
    ProgressTick,
    SettleElapsed,
    /// The embedded visualization finished loading.
    ExternalLoad,
    ContentDelayElapsed,
    LabelDelayElapsed,
    /// Teardown. Every pending timer is cancelled.
    Unmount,
}

impl RevealEvent {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            RevealEvent::Start {
                reduced_motion: true,
            } => "start (reduced motion)",
            RevealEvent::Start { .. } => "start",
            RevealEvent::ProgressTick => "progress_tick",
            RevealEvent::SettleElapsed => "settle_elapsed",
            RevealEvent::ExternalLoad => "external_load",
            RevealEvent::ContentDelayElapsed => "content_delay_elapsed",
            RevealEvent::LabelDelayElapsed => "label_delay_elapsed",
            RevealEvent::Unmount => "unmount",
        }
    }
}

/// Side effects requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Effect {
    /// Schedule `timer` to fire after `delay` (and every `delay` if `repeat`).
    /// Replaces any pending instance of the same timer.
    StartTimer {
        timer: TimerId,
        delay: Millis,
        repeat: bool,
    },
    /// Revoke `timer` if it is pending.
    CancelTimer { timer: TimerId },
    /// `content_visible && loading_complete` just became true.
    NotifyReady,
}

// =============================================================================
// PHASE
// =============================================================================

/// Named phases, derived from the state flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Initial,
    Loading,
    LoadWaiting,
    ContentRevealing,
    FullyRevealed,
}

impl Phase {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Initial => "initial",
            Phase::Loading => "loading",
            Phase::LoadWaiting => "load_waiting",
            Phase::ContentRevealing => "content_revealing",
            Phase::FullyRevealed => "fully_revealed",
        }
    }

    /// Check if no further transition can change this phase.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::FullyRevealed)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// STATE
// =============================================================================

/// Sequencer state. Created at mount with everything off, discarded on unmount.
///
/// Every flag is monotonic and `loading_progress` never decreases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RevealState {
    pub started: bool,
    pub torn_down: bool,
    pub reduced_motion_requested: bool,
    pub loading_progress: Percent,
    pub loading_complete: bool,
    pub external_content_loaded: bool,
    pub content_visible: bool,
    pub secondary_label_visible: bool,
}

impl RevealState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Both gates of the hero block are open.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.content_visible && self.loading_complete
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if !self.started {
            Phase::Initial
        } else if !self.loading_progress.is_full() {
            Phase::Loading
        } else if !self.is_ready() {
            Phase::LoadWaiting
        } else if !self.secondary_label_visible {
            Phase::ContentRevealing
        } else {
            Phase::FullyRevealed
        }
    }

    /// Check if the machine reacts to events other than `Start`.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.started && !self.torn_down
    }
}

/// Result of a single transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: RevealState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn unchanged(state: &RevealState) -> Self {
        Self {
            state: *state,
            effects: Vec::new(),
        }
    }

    /// Check if the transition changed the state.
    #[must_use]
    pub fn changed_from(&self, previous: &RevealState) -> bool {
        self.state != *previous
    }
}

// =============================================================================
// TRANSITION FUNCTION
// =============================================================================

/// Apply one event to `state`.
///
/// Events delivered before `Start` or after `Unmount` are ignored, as are
/// stale timer events whose precondition no longer holds. `Unmount` is
/// accepted at any time, including before `Start`.
#[must_use]
pub fn transition(state: &RevealState, event: RevealEvent, timing: &RevealTiming) -> Transition {
    if state.torn_down {
        return Transition::unchanged(state);
    }

    let mut next = *state;
    let mut effects = Vec::new();

    match event {
        RevealEvent::Start { reduced_motion } => {
            if state.started {
                return Transition::unchanged(state);
            }
            next.started = true;
            next.reduced_motion_requested = reduced_motion;

            if reduced_motion {
                // Fast path: the progress timeline never starts.
                next.loading_progress = Percent::FULL;
                next.loading_complete = true;
            } else {
                effects.push(Effect::StartTimer {
                    timer: TimerId::ProgressTick,
                    delay: timing.tick_interval(),
                    repeat: true,
                });
            }
        }

        RevealEvent::Unmount => {
            next.torn_down = true;
            effects.extend(
                TimerId::ALL
                    .iter()
                    .map(|&timer| Effect::CancelTimer { timer }),
            );
        }

        _ if !state.started => return Transition::unchanged(state),

        RevealEvent::ProgressTick => {
            if state.loading_progress.is_full() {
                effects.push(Effect::CancelTimer {
                    timer: TimerId::ProgressTick,
                });
            } else {
                next.loading_progress = state.loading_progress.saturating_step(timing.progress_step);
                if next.loading_progress.is_full() {
                    effects.push(Effect::CancelTimer {
                        timer: TimerId::ProgressTick,
                    });
                    effects.push(Effect::StartTimer {
                        timer: TimerId::Settle,
                        delay: timing.settle_delay(),
                        repeat: false,
                    });
                }
            }
        }

        RevealEvent::SettleElapsed => {
            if state.loading_progress.is_full() {
                next.loading_complete = true;
            }
        }

        RevealEvent::ExternalLoad => {
            if state.external_content_loaded {
                return Transition::unchanged(state);
            }
            next.external_content_loaded = true;
            // Reduced motion only skips the loading timeline; the reveal
            // delays after the visualization loads still apply.
            effects.push(Effect::StartTimer {
                timer: TimerId::ContentDelay,
                delay: timing.content_delay(),
                repeat: false,
            });
        }

        RevealEvent::ContentDelayElapsed => {
            if state.external_content_loaded && !state.content_visible {
                next.content_visible = true;
                effects.push(Effect::StartTimer {
                    timer: TimerId::LabelDelay,
                    delay: timing.label_delay(),
                    repeat: false,
                });
            }
        }

        RevealEvent::LabelDelayElapsed => {
            if state.content_visible {
                next.secondary_label_visible = true;
            }
        }
    }

    if !state.is_ready() && next.is_ready() {
        effects.push(Effect::NotifyReady);
    }

    Transition {
        state: next,
        effects,
    }
}

// =============================================================================
// TESTS
// =============================================================================
