//! # Reveal Timing
//!
//! Durations and step sizes for the staged reveal.
//!
//! | Parameter | Default | Drives |
//! |-----------|---------|--------|
//! | `tick_interval_ms` | 200 | Repeating progress tick |
//! | `progress_step` | 5 | Points added per tick |
//! | `settle_delay_ms` | 500 | Progress 100 → loading complete |
//! | `content_delay_ms` | 500 | External load → content visible |
//! | `label_delay_ms` | 500 | Content visible → secondary label |
//! | `overlay_fade_ms` | 800 | Overlay fade-out (rendering only) |

use crate::{GreanError, Millis};
use serde::{Deserialize, Serialize};

/// Default repeating tick interval.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 200;

/// Default progress increment per tick.
pub const DEFAULT_PROGRESS_STEP: u8 = 5;

/// Default delay between progress reaching 100 and loading completing.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 500;

/// Default delay between the external load signal and content becoming visible.
pub const DEFAULT_CONTENT_DELAY_MS: u64 = 500;

/// Default delay between content and the secondary label becoming visible.
pub const DEFAULT_LABEL_DELAY_MS: u64 = 500;

/// Default overlay fade-out duration.
pub const DEFAULT_OVERLAY_FADE_MS: u64 = 800;

/// Timing parameters for the sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealTiming {
    pub tick_interval_ms: u64,
    pub progress_step: u8,
    pub settle_delay_ms: u64,
    pub content_delay_ms: u64,
    pub label_delay_ms: u64,
    pub overlay_fade_ms: u64,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            progress_step: DEFAULT_PROGRESS_STEP,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            content_delay_ms: DEFAULT_CONTENT_DELAY_MS,
            label_delay_ms: DEFAULT_LABEL_DELAY_MS,
            overlay_fade_ms: DEFAULT_OVERLAY_FADE_MS,
        }
    }
}

impl RevealTiming {
    /// Check that the timing can drive a terminating progress bar.
    ///
    /// A zero interval would spin forever at one instant; a zero step would
    /// never reach 100.
    pub fn validate(&self) -> Result<(), GreanError> {
        if self.tick_interval_ms == 0 {
            return Err(GreanError::InvalidConfig(
                "timing.tick_interval_ms must be greater than 0".to_string(),
            ));
        }
        if self.progress_step == 0 || self.progress_step > 100 {
            return Err(GreanError::InvalidConfig(format!(
                "timing.progress_step must be in 1..=100, got {}",
                self.progress_step
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn tick_interval(&self) -> Millis {
        Millis(self.tick_interval_ms)
    }

    #[must_use]
    pub fn settle_delay(&self) -> Millis {
        Millis(self.settle_delay_ms)
    }

    #[must_use]
    pub fn content_delay(&self) -> Millis {
        Millis(self.content_delay_ms)
    }

    #[must_use]
    pub fn label_delay(&self) -> Millis {
        Millis(self.label_delay_ms)
    }

    /// Number of ticks needed to go from 0 to 100.
    #[must_use]
    pub fn ticks_to_full(&self) -> u64 {
        let step = u64::from(self.progress_step.max(1));
        100u64.div_ceil(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let timing = RevealTiming::default();
        assert_eq!(timing.tick_interval_ms, 200);
        assert_eq!(timing.progress_step, 5);
        assert_eq!(timing.settle_delay_ms, 500);
        assert_eq!(timing.content_delay_ms, 500);
        assert_eq!(timing.label_delay_ms, 500);
        assert_eq!(timing.overlay_fade_ms, 800);
        assert!(timing.validate().is_ok());
    }

    #[test]
    fn twenty_ticks_to_full() {
        assert_eq!(RevealTiming::default().ticks_to_full(), 20);

        let uneven = RevealTiming {
            progress_step: 30,
            ..RevealTiming::default()
        };
        assert_eq!(uneven.ticks_to_full(), 4);
    }

    #[test]
    fn zero_interval_rejected() {
        let timing = RevealTiming {
            tick_interval_ms: 0,
            ..RevealTiming::default()
        };
        assert!(matches!(
            timing.validate(),
            Err(GreanError::InvalidConfig(_))
        ));
    }

    #[test]
    fn step_out_of_range_rejected() {
        for step in [0u8, 101, 255] {
            let timing = RevealTiming {
                progress_step: step,
                ..RevealTiming::default()
            };
            assert!(timing.validate().is_err(), "step {} accepted", step);
        }
    }
}
