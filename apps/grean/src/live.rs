//! # Live Sequencer
//!
//! Runs a [`Sequencer`] against the tokio clock.
//!
//! A single actor task owns the sequencer and its timer table. It sleeps until
//! the next due timer, accepts external-load and unmount commands over a
//! channel, and publishes every changed snapshot on a `watch` channel.
//!
//! Dropping the [`LiveSequencer`] aborts the actor, which drops the timer
//! table with it: nothing can fire against a torn-down sequencer.

use grean_core::{GreanError, Millis, ReadyHook, RevealSnapshot, RevealTiming, Sequencer};
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Commands accepted by the actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    ExternalLoad,
    Unmount,
}

/// Handle to a running sequencer.
#[derive(Debug)]
pub struct LiveSequencer {
    commands: mpsc::UnboundedSender<Command>,
    snapshots: watch::Receiver<RevealSnapshot>,
    task: Option<JoinHandle<()>>,
}

impl LiveSequencer {
    /// Mount a sequencer now. `reduced_motion` is read exactly once, here.
    pub fn spawn(timing: RevealTiming, reduced_motion: bool) -> Result<Self, GreanError> {
        Self::spawn_with_hook(timing, reduced_motion, None)
    }

    /// Mount a sequencer with a "both ready" observer.
    pub fn spawn_with_hook(
        timing: RevealTiming,
        reduced_motion: bool,
        hook: Option<ReadyHook>,
    ) -> Result<Self, GreanError> {
        let origin = Instant::now();
        let mut sequencer = Sequencer::new(timing)?;
        if let Some(hook) = hook {
            sequencer.on_ready(hook);
        }
        sequencer.start(reduced_motion);
        tracing::debug!(
            reduced_motion,
            phase = %sequencer.snapshot().phase,
            "Sequencer mounted"
        );

        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(sequencer.snapshot());

        let task = tokio::spawn(run(sequencer, origin, command_rx, snapshot_tx));

        Ok(Self {
            commands: command_tx,
            snapshots: snapshot_rx,
            task: Some(task),
        })
    }

    /// Signal that the embedded visualization finished loading.
    pub fn external_load(&self) {
        if self.commands.send(Command::ExternalLoad).is_err() {
            tracing::debug!("External load after teardown ignored");
        }
    }

    /// Latest published snapshot.
    #[must_use]
    pub fn snapshot(&self) -> RevealSnapshot {
        *self.snapshots.borrow()
    }

    /// Receiver that observes every published snapshot.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<RevealSnapshot> {
        self.snapshots.clone()
    }

    /// Tear down and wait for the actor to exit. Returns the final snapshot.
    pub async fn unmount(&mut self) -> RevealSnapshot {
        // A send error means the actor already exited.
        let _ = self.commands.send(Command::Unmount);
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                tracing::warn!("Sequencer task ended abnormally: {}", e);
            }
        }
        self.snapshot()
    }

    /// Check if the actor has exited.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().is_none_or(JoinHandle::is_finished)
    }
}

impl Drop for LiveSequencer {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

// =============================================================================
// ACTOR
// =============================================================================

/// Compare two snapshots ignoring the time they were taken.
fn same_state(a: &RevealSnapshot, b: &RevealSnapshot) -> bool {
    RevealSnapshot { at: b.at, ..*a } == *b
}

fn elapsed(origin: Instant) -> Millis {
    Millis(origin.elapsed().as_millis() as u64)
}

async fn sleep_until_due(origin: Instant, due: Option<Millis>) {
    match due {
        Some(due) => tokio::time::sleep_until(origin + Duration::from_millis(due.as_u64())).await,
        None => std::future::pending::<()>().await,
    }
}

async fn run(
    mut sequencer: Sequencer,
    origin: Instant,
    mut commands: mpsc::UnboundedReceiver<Command>,
    snapshots: watch::Sender<RevealSnapshot>,
) {
    loop {
        let before = sequencer.snapshot();

        tokio::select! {
            command = commands.recv() => {
                // Fire everything that came due before the command arrived.
                sequencer.advance_to(elapsed(origin));
                match command {
                    Some(Command::ExternalLoad) => {
                        tracing::debug!(at = %sequencer.now(), "External content loaded");
                        sequencer.external_load();
                    }
                    Some(Command::Unmount) | None => {
                        sequencer.unmount();
                        tracing::debug!(at = %sequencer.now(), "Sequencer unmounted");
                        snapshots.send_replace(sequencer.snapshot());
                        return;
                    }
                }
            }
            () = sleep_until_due(origin, sequencer.next_due()) => {
                sequencer.advance_to(elapsed(origin));
            }
        }

        let after = sequencer.snapshot();
        if after.phase != before.phase {
            tracing::info!(
                from = %before.phase,
                to = %after.phase,
                at = %after.at,
                "Reveal phase changed"
            );
        }
        if !same_state(&before, &after) {
            snapshots.send_replace(after);
        }
    }
}
