//! # API Endpoint Handlers

use super::{
    AppState,
    types::{
        ErrorResponse, HealthResponse, PendingTimer, PreviewQuery, RevealResponse, ScrollQuery,
        ScrollResponse,
    },
};
use crate::render::{self, SectionMode};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use grean_core::{GreanError, HeroView, ScrollMetrics, Section, SectionContent, Sequencer};

// =============================================================================
// ERROR MAPPING
// =============================================================================

fn status_for(e: &GreanError) -> StatusCode {
    match e {
        GreanError::UnknownSection(_) => StatusCode::NOT_FOUND,
        GreanError::InvalidConfig(_) | GreanError::SerializationError(_) => {
            StatusCode::BAD_REQUEST
        }
        GreanError::IoError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(e: &GreanError) -> Response {
    (status_for(e), Json(ErrorResponse::from(e))).into_response()
}

/// Timing comes from the server configuration, so a failure here is a server fault.
fn run_preview(state: &AppState, query: &PreviewQuery) -> Result<Sequencer, Response> {
    query.preview().run(&state.config.timing).map_err(|e| {
        tracing::error!("Preview run failed: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::from(&e)),
        )
            .into_response()
    })
}

// =============================================================================
// HEALTH HANDLER
// =============================================================================

/// Health check endpoint.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::default())
}

// =============================================================================
// PAGE HANDLERS
// =============================================================================

/// Full landing page.
pub async fn page_handler(
    State(state): State<AppState>,
    Query(query): Query<PreviewQuery>,
) -> Response {
    let sequencer = match run_preview(&state, &query) {
        Ok(sequencer) => sequencer,
        Err(response) => return response,
    };
    let config = &state.config;
    let view = HeroView::from_snapshot(&sequencer.snapshot(), &config.hero, &config.timing);
    let mode = if query.lazy {
        SectionMode::Deferred
    } else {
        SectionMode::Inline
    };

    Html(render::page(&view, &config.hero, &state.decor, mode).into_string()).into_response()
}

/// Hero section fragment at one instant of the reveal.
pub async fn hero_handler(
    State(state): State<AppState>,
    Query(query): Query<PreviewQuery>,
) -> Response {
    let sequencer = match run_preview(&state, &query) {
        Ok(sequencer) => sequencer,
        Err(response) => return response,
    };
    let config = &state.config;
    let view = HeroView::from_snapshot(&sequencer.snapshot(), &config.hero, &config.timing);

    Html(render::hero_section(&view, &state.decor).into_string()).into_response()
}

/// One lazily loaded section, as a standalone document for its frame.
pub async fn section_handler(Path(slug): Path<String>) -> Response {
    let section = match slug.parse::<Section>() {
        Ok(section) if section.is_lazy() => section,
        Ok(_) => {
            let e = GreanError::UnknownSection(slug);
            tracing::debug!("{}", e);
            return error_response(&e);
        }
        Err(e) => {
            tracing::debug!("{}", e);
            return error_response(&e);
        }
    };

    Html(render::section_document(&SectionContent::for_section(section)).into_string())
        .into_response()
}

// =============================================================================
// JSON HANDLERS
// =============================================================================

/// Snapshot, derived view and timeline of a preview run.
pub async fn reveal_handler(
    State(state): State<AppState>,
    Query(query): Query<PreviewQuery>,
) -> Response {
    let sequencer = match run_preview(&state, &query) {
        Ok(sequencer) => sequencer,
        Err(response) => return response,
    };
    let config = &state.config;
    let snapshot = sequencer.snapshot();

    let response = RevealResponse {
        snapshot,
        view: HeroView::from_snapshot(&snapshot, &config.hero, &config.timing),
        timeline: sequencer.timeline().to_vec(),
        pending: sequencer
            .pending_timers()
            .into_iter()
            .map(PendingTimer::from)
            .collect(),
    };

    (StatusCode::OK, Json(response)).into_response()
}

/// Scroll progress for the given measurements.
pub async fn scroll_handler(Query(query): Query<ScrollQuery>) -> impl IntoResponse {
    let progress = ScrollMetrics::from(query).progress();
    Json(ScrollResponse {
        permille: progress.permille,
        width: progress.css_width(),
    })
}

/// Decorative animation parameters.
pub async fn decor_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.decor.as_ref().clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_section_is_not_found() {
        let e = GreanError::UnknownSection("pricing".into());
        assert_eq!(status_for(&e), StatusCode::NOT_FOUND);
    }

    #[test]
    fn io_error_is_server_error() {
        let e = GreanError::IoError("disk".into());
        assert_eq!(status_for(&e), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
