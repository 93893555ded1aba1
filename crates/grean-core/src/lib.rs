//! # grean-core
//!
//! The deterministic logic behind the GREAN WORLD landing page.
//!
//! The hero section reveals itself in stages: a synthetic loading bar, an
//! overlay fade, the embedded 3D visualization and finally the hero copy.
//! This crate models that sequence as an explicit state machine with no
//! dependency on any UI runtime, plus the view model a renderer maps it to.
//!
//! ## Architectural Constraints
//!
//! - Pure Rust: no async, no network, no wall clock
//! - Integer arithmetic only (percentages, permille, milliseconds)
//! - Every timer is owned by the sequencer that scheduled it

// =============================================================================
// MODULES
// =============================================================================

pub mod decor;
pub mod page;
pub mod reveal;
pub mod scroll;
pub mod timing;
pub mod types;
pub mod view;

// =============================================================================
// RE-EXPORTS: Core Types
// =============================================================================

pub use types::{GreanError, Millis, Percent};

// =============================================================================
// RE-EXPORTS: Sequencer
// =============================================================================

pub use reveal::{
    Effect, Phase, ReadyHook, RevealEvent, RevealSnapshot, RevealState, Sequencer, TimelineEntry,
    TimerId, TimerTable, Transition, transition,
};
pub use timing::RevealTiming;

// =============================================================================
// RE-EXPORTS: Rendering
// =============================================================================

pub use decor::DecorConfig;
pub use page::{Section, SectionContent};
pub use scroll::{ScrollMetrics, ScrollProgress};
pub use view::{HeroContent, HeroView, OverlayState};
