//! # Preview Runs
//!
//! Replays the reveal sequence in virtual time so a single instant can be
//! rendered without waiting for real timers. Used by the HTTP handlers and the
//! `timeline` command.

use grean_core::{GreanError, Millis, RevealTiming, Sequencer};

/// Parameters of one virtual run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preview {
    /// Instant to stop at. `None` runs until no timer is pending.
    pub at: Option<Millis>,
    /// When the visualization reports its load. `None` means it never does
    /// while a fixed instant is previewed, and loads at mount when settling.
    pub loaded_at: Option<Millis>,
    pub reduced_motion: bool,
}

impl Preview {
    /// The page as it looks once every stage has played out.
    #[must_use]
    pub fn settled(reduced_motion: bool) -> Self {
        Self {
            at: None,
            loaded_at: None,
            reduced_motion,
        }
    }

    /// Mount a fresh sequencer and play the run.
    pub fn run(&self, timing: &RevealTiming) -> Result<Sequencer, GreanError> {
        let mut sequencer = Sequencer::new(*timing)?;
        sequencer.start(self.reduced_motion);

        match self.at {
            Some(at) => {
                if let Some(loaded_at) = self.loaded_at.filter(|l| *l <= at) {
                    sequencer.advance_to(loaded_at);
                    sequencer.external_load();
                }
                sequencer.advance_to(at);
            }
            None => {
                sequencer.advance_to(self.loaded_at.unwrap_or(Millis::ZERO));
                sequencer.external_load();
                while sequencer.step().is_some() {}
            }
        }

        tracing::debug!(
            at = %sequencer.now(),
            phase = %sequencer.snapshot().phase,
            "Preview run finished"
        );
        Ok(sequencer)
    }
}
