//! # API Request/Response Types
//!
//! Query strings and JSON bodies for the HTTP API.

use crate::preview::Preview;
use grean_core::{
    GreanError, HeroView, Millis, RevealSnapshot, ScrollMetrics, TimelineEntry, TimerId,
};
use serde::{Deserialize, Serialize};

// =============================================================================
// HEALTH RESPONSE
// =============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// =============================================================================
// ERROR RESPONSE
// =============================================================================

/// JSON body for failed requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&GreanError> for ErrorResponse {
    fn from(e: &GreanError) -> Self {
        Self {
            error: e.to_string(),
        }
    }
}

// =============================================================================
// PREVIEW QUERY
// =============================================================================

/// Query parameters selecting which instant of the reveal to render.
///
/// Without `at_ms` the settled page is rendered, with the visualization
/// loading at `loaded_at_ms` (default 0).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewQuery {
    pub at_ms: Option<u64>,
    pub loaded_at_ms: Option<u64>,
    pub reduced_motion: bool,
    /// Emit placeholders for the lazily loaded sections.
    pub lazy: bool,
}

impl PreviewQuery {
    #[must_use]
    pub fn preview(&self) -> Preview {
        Preview {
            at: self.at_ms.map(Millis),
            loaded_at: self.loaded_at_ms.map(Millis),
            reduced_motion: self.reduced_motion,
        }
    }
}

// =============================================================================
// REVEAL RESPONSE
// =============================================================================

/// A timer still waiting to fire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingTimer {
    pub timer: String,
    pub due_ms: u64,
}

impl From<(TimerId, Millis)> for PendingTimer {
    fn from((id, due): (TimerId, Millis)) -> Self {
        Self {
            timer: id.name().to_string(),
            due_ms: due.as_u64(),
        }
    }
}

/// Full state of a preview run.
#[derive(Debug, Clone, Serialize)]
pub struct RevealResponse {
    pub snapshot: RevealSnapshot,
    pub view: HeroView,
    pub timeline: Vec<TimelineEntry>,
    pub pending: Vec<PendingTimer>,
}

// =============================================================================
// SCROLL QUERY / RESPONSE
// =============================================================================

/// Scroll measurements in CSS pixels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScrollQuery {
    pub offset: u64,
    pub document_height: u64,
    pub viewport_height: u64,
}

impl From<ScrollQuery> for ScrollMetrics {
    fn from(q: ScrollQuery) -> Self {
        ScrollMetrics {
            offset: q.offset,
            document_height: q.document_height,
            viewport_height: q.viewport_height,
        }
    }
}

/// Computed scroll progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollResponse {
    pub permille: u16,
    pub width: String,
}

// =============================================================================
// TESTS
// =============================================================================
