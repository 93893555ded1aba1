//! # Core Type Definitions
//!
//! Shared primitives for the sequencer and the view model:
//! - Time values (`Millis`)
//! - Bounded percentages (`Percent`)
//! - Error types (`GreanError`)
//!
//! ## Determinism Guarantees
//!
//! All types in this module:
//! - Use integer arithmetic only (no floating-point)
//! - Implement `Ord` for deterministic ordering in `BTreeMap`/`BTreeSet`
//! - Use saturating arithmetic so a long-running clock can never overflow

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// TIME
// =============================================================================

/// A point or span on the sequencer clock, in milliseconds since mount.
///
/// The sequencer never reads a wall clock. Whoever drives it (the virtual
/// [`crate::Sequencer`] or the app's tokio driver) supplies the time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Millis(pub u64);

impl Millis {
    /// Time zero: the instant the sequencer was mounted.
    pub const ZERO: Millis = Millis(0);

    /// Create a new time value.
    #[must_use]
    pub const fn new(ms: u64) -> Self {
        Self(ms)
    }

    /// Add a span using saturating arithmetic.
    #[must_use]
    pub const fn saturating_add(self, other: Millis) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Time elapsed since `earlier`, zero if `earlier` is in the future.
    #[must_use]
    pub const fn saturating_sub(self, earlier: Millis) -> Self {
        Self(self.0.saturating_sub(earlier.0))
    }

    /// Get the raw millisecond count.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Millis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

// =============================================================================
// PERCENT
// =============================================================================

/// An integer percentage clamped to `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Default)]
#[serde(transparent)]
pub struct Percent(u8);

impl Percent {
    /// Fully transparent / empty.
    pub const ZERO: Percent = Percent(0);

    /// Fully opaque / complete.
    pub const FULL: Percent = Percent(100);

    /// Create a percentage, clamping anything above 100.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        if value > 100 { Self(100) } else { Self(value) }
    }

    /// Add `step` points, saturating at 100.
    #[must_use]
    pub const fn saturating_step(self, step: u8) -> Self {
        Self::new(self.0.saturating_add(step))
    }

    /// Check if the percentage has reached 100.
    #[must_use]
    pub const fn is_full(self) -> bool {
        self.0 >= 100
    }

    /// Get the raw value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// CSS opacity string (`"0"`, `"0.5"`, `"1"`), computed without floats.
    #[must_use]
    pub fn css_opacity(self) -> String {
        match self.0 {
            0 => "0".to_string(),
            100 => "1".to_string(),
            v if v % 10 == 0 => format!("0.{}", v / 10),
            v => format!("0.{:02}", v),
        }
    }
}

impl std::fmt::Display for Percent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the GREAN WORLD site.
///
/// The sequencer itself never fails; these cover configuration, routing and
/// I/O at the edges.
#[derive(Debug, Error)]
pub enum GreanError {
    /// A configuration value is out of range or malformed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A lazily loaded section was requested that the page does not have.
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// A serialization or deserialization error occurred.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),
}

// =============================================================================
// TESTS
// =============================================================================
