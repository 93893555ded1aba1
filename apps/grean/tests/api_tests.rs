//! Integration tests for the GREAN WORLD HTTP server.
//!
//! Uses axum-test to exercise the router without binding a port.

// Allow holding MutexGuard across await - tests are serialized intentionally
// to avoid env var conflicts
#![allow(clippy::unwrap_used, clippy::panic, clippy::await_holding_lock)]

use axum::http::StatusCode;
use axum_test::TestServer;
use grean::api::{AppState, HealthResponse, ScrollResponse, create_router};
use grean::config::AppConfig;
use serde_json::Value;
use std::sync::Mutex;

/// Mutex to serialize tests since some of them modify env vars.
static ENV_TEST_MUTEX: Mutex<()> = Mutex::new(());

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

struct TestGuard {
    _guard: std::sync::MutexGuard<'static, ()>,
}

impl Drop for TestGuard {
    fn drop(&mut self) {
        // SAFETY: Tests run sequentially under ENV_TEST_MUTEX, so no concurrent env access.
        unsafe { std::env::remove_var("GREAN_RATE_LIMIT") };
    }
}

fn create_test_server_with(config: AppConfig, rate_limit: Option<&str>) -> (TestServer, TestGuard) {
    let guard = ENV_TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    // SAFETY: Tests run sequentially under ENV_TEST_MUTEX, so no concurrent env access.
    unsafe {
        match rate_limit {
            Some(value) => std::env::set_var("GREAN_RATE_LIMIT", value),
            None => std::env::remove_var("GREAN_RATE_LIMIT"),
        }
    }
    let router = create_router(AppState::new(config));
    (
        TestServer::new(router).unwrap(),
        TestGuard { _guard: guard },
    )
}

fn create_test_server() -> (TestServer, TestGuard) {
    create_test_server_with(AppConfig::default(), None)
}

// =============================================================================
// HEALTH
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let (server, _guard) = create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let health: HealthResponse = response.json();
    assert_eq!(health.status, "ok");
    assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
}

// =============================================================================
// PAGE
// =============================================================================

#[tokio::test]
async fn test_page_renders_settled_hero() {
    let (server, _guard) = create_test_server();

    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"id="hero-text""#));
    assert!(html.contains(r#"id="contact-badge""#));
    assert!(html.contains(r#"data-revealed="true""#));
    assert!(html.contains(r#"id="green-footer""#));
}

#[tokio::test]
async fn test_page_lazy_mode_uses_placeholders() {
    let (server, _guard) = create_test_server();

    let html = server.get("/").add_query_param("lazy", true).await.text();

    assert!(html.contains(r#"src="/sections/about""#));
    assert!(html.contains(r#"src="/sections/footer""#));
    assert_eq!(html.matches(r#"loading="lazy""#).count(), 5);
    assert!(html.contains(r#"id="green-home""#));
    assert!(!html.contains(r#"id="green-about""#));
}

#[tokio::test]
async fn test_lazy_placeholders_load_their_sections() {
    let (server, _guard) = create_test_server();

    let html = server.get("/").add_query_param("lazy", true).await.text();
    let src = html
        .split(r#"<iframe class="lazy-section" src=""#)
        .nth(1)
        .and_then(|rest| rest.split('"').next())
        .unwrap();
    assert_eq!(src, "/sections/about");

    let response = server.get(src).await;
    response.assert_status_ok();
    let section = response.text();
    assert!(section.starts_with("<!DOCTYPE html>"));
    assert!(section.contains(r#"id="green-about""#));
}

#[tokio::test]
async fn test_page_scroll_bar_tracks_document_scroll() {
    let (server, _guard) = create_test_server();

    let html = server.get("/").await.text();

    assert!(html.contains(r#"id="scroll-progress""#));
    assert!(html.contains("@keyframes scroll-progress"));
    assert!(html.contains("animation-timeline: scroll(root block)"));
}

#[tokio::test]
async fn test_page_uses_configured_phone() {
    let config = AppConfig::from_toml_str("[hero]\nphone = \"+251 111 222333\"\n").unwrap();
    let (server, _guard) = create_test_server_with(config, None);

    let html = server.get("/").await.text();
    assert!(html.contains("+251 111 222333"));
}

// =============================================================================
// HERO PREVIEW
// =============================================================================

#[tokio::test]
async fn test_hero_mid_loading() {
    let (server, _guard) = create_test_server();

    let html = server
        .get("/hero")
        .add_query_param("at_ms", 2_000)
        .add_query_param("loaded_at_ms", 0)
        .await
        .text();

    assert!(html.contains("Loading... 50%"));
    assert!(html.contains(r#"data-state="opaque""#));
    assert!(!html.contains(r#"id="hero-text""#));
}

#[tokio::test]
async fn test_hero_without_load_never_reveals() {
    let (server, _guard) = create_test_server();

    let html = server
        .get("/hero")
        .add_query_param("at_ms", 60_000)
        .await
        .text();

    assert!(html.contains(r#"data-state="fading""#));
    assert!(!html.contains(r#"id="hero-text""#));
    assert!(!html.contains(r#"id="contact-badge""#));
}

#[tokio::test]
async fn test_hero_reduced_motion() {
    let (server, _guard) = create_test_server();

    let html = server
        .get("/hero")
        .add_query_param("at_ms", 0)
        .add_query_param("loaded_at_ms", 0)
        .add_query_param("reduced_motion", true)
        .await
        .text();

    assert!(!html.contains(r#"id="loading-overlay""#));
    assert!(!html.contains(r#"id="hero-text""#));

    let html = server
        .get("/hero")
        .add_query_param("at_ms", 500)
        .add_query_param("loaded_at_ms", 0)
        .add_query_param("reduced_motion", true)
        .await
        .text();

    assert!(!html.contains(r#"id="loading-overlay""#));
    assert!(html.contains(r#"id="hero-text""#));
}

#[tokio::test]
async fn test_hero_with_unusable_timing_fails_fast() {
    let mut config = AppConfig::default();
    config.timing.progress_step = 0;
    let (server, _guard) = create_test_server_with(config, None);

    let response = server.get("/hero").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("progress_step"));
}

#[tokio::test]
async fn test_hero_bad_query_rejected() {
    let (server, _guard) = create_test_server();

    let response = server.get("/hero").add_query_param("at_ms", "soon").await;
    response.assert_status_bad_request();
}

// =============================================================================
// SECTIONS
// =============================================================================

#[tokio::test]
async fn test_section_fragment() {
    let (server, _guard) = create_test_server();

    let response = server.get("/sections/solutions").await;

    response.assert_status_ok();
    assert!(response.text().contains(r#"id="green-solutions""#));
}

#[tokio::test]
async fn test_unknown_section_404() {
    let (server, _guard) = create_test_server();

    let response = server.get("/sections/pricing").await;

    response.assert_status_not_found();
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("pricing"));
}

#[tokio::test]
async fn test_eager_section_not_served_as_fragment() {
    let (server, _guard) = create_test_server();

    server.get("/sections/intro").await.assert_status_not_found();
}

// =============================================================================
// JSON API
// =============================================================================

#[tokio::test]
async fn test_reveal_settled_timeline() {
    let (server, _guard) = create_test_server();

    let response = server.get("/api/reveal").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["snapshot"]["phase"], "fully_revealed");
    assert_eq!(body["snapshot"]["at"], 4_500);
    assert!(body["pending"].as_array().unwrap().is_empty());

    let timeline = body["timeline"].as_array().unwrap();
    let ticks = timeline
        .iter()
        .filter(|e| e["event"]["kind"] == "progress_tick")
        .count();
    assert_eq!(ticks, 20);
    assert!(body["view"]["hero_text"].is_object());
}

#[tokio::test]
async fn test_reveal_reports_pending_timers() {
    let (server, _guard) = create_test_server();

    let body: Value = server
        .get("/api/reveal")
        .add_query_param("at_ms", 4_200)
        .add_query_param("loaded_at_ms", 0)
        .await
        .json();

    assert_eq!(body["snapshot"]["loading_progress"], 100);
    assert_eq!(body["snapshot"]["loading_complete"], false);
    let pending = body["pending"].as_array().unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0]["timer"], "settle");
    assert_eq!(pending[0]["due_ms"], 4_500);
}

#[tokio::test]
async fn test_scroll_endpoint() {
    let (server, _guard) = create_test_server();

    let response = server
        .get("/api/scroll")
        .add_query_param("offset", 450)
        .add_query_param("document_height", 2_000)
        .add_query_param("viewport_height", 800)
        .await;

    response.assert_status_ok();
    let scroll: ScrollResponse = response.json();
    assert_eq!(scroll.permille, 375);
    assert_eq!(scroll.width, "37.5%");
}

#[tokio::test]
async fn test_scroll_requires_measurements() {
    let (server, _guard) = create_test_server();

    server
        .get("/api/scroll")
        .add_query_param("offset", 10)
        .await
        .assert_status_bad_request();
}

#[tokio::test]
async fn test_decor_endpoint() {
    let (server, _guard) = create_test_server();

    let body: Value = server.get("/api/decor").await.json();
    assert_eq!(body["lines"].as_array().unwrap().len(), 12);
    assert_eq!(body["points"].as_array().unwrap().len(), 8);
}

// =============================================================================
// MIDDLEWARE
// =============================================================================

#[tokio::test]
async fn test_rate_limit_rejects_burst() {
    let (server, _guard) = create_test_server_with(AppConfig::default(), Some("1"));

    server.get("/health").await.assert_status_ok();
    server
        .get("/health")
        .await
        .assert_status(StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn test_404_on_unknown_endpoint() {
    let (server, _guard) = create_test_server();

    server.get("/unknown").await.assert_status_not_found();
}

#[tokio::test]
async fn test_method_not_allowed() {
    let (server, _guard) = create_test_server();

    let response = server.post("/health").await;
    assert_eq!(response.status_code().as_u16(), 405);
}
