//! # GREAN WORLD Site
//!
//! Library half of the `grean` binary: HTTP server, HTML rendering,
//! configuration and the tokio-driven sequencer. The reveal logic itself
//! lives in `grean-core`.

pub mod api;
pub mod config;
pub mod live;
pub mod preview;
pub mod render;
