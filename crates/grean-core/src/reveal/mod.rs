//! # Reveal Module
//!
//! The staged-reveal sequencer: a pure state machine, the timer table it asks
//! for, and a virtual-time driver that ties them together.
//!
//! The machine has no dependency on any UI runtime. Drivers (the virtual
//! [`Sequencer`] here, or the tokio driver in the app) own the clock and
//! carry out the requested [`Effect`]s.

mod machine;
mod sequencer;
mod snapshot;
mod timers;

pub use machine::*;
pub use sequencer::*;
pub use snapshot::*;
pub use timers::*;
