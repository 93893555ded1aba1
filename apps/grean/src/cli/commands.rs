//! # CLI Command Implementations

use grean::{api, config::AppConfig, live::LiveSequencer, preview::Preview};
use grean_core::{
    DecorConfig, GreanError, Millis, ReadyHook, RevealSnapshot, ScrollMetrics, TimelineEntry,
};
use std::time::Duration;

fn print_json(value: &serde_json::Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_default()
    );
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, GreanError> {
    serde_json::to_value(value).map_err(|e| GreanError::SerializationError(e.to_string()))
}

fn flag(on: bool) -> &'static str {
    if on { "yes" } else { "-" }
}

// =============================================================================
// SERVE COMMAND
// =============================================================================

/// Start the HTTP server.
pub async fn cmd_serve(
    mut config: AppConfig,
    host: Option<String>,
    port: Option<u16>,
) -> Result<(), GreanError> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    println!("GREAN WORLD Server Starting...");
    println!();
    println!("Configuration:");
    println!("  Address:       {}", config.server.addr());
    println!("  Tick interval: {}", config.timing.tick_interval());
    println!("  Visualization: {}", config.hero.visualization_url);
    println!();
    println!("Endpoints:");
    println!("  GET  /                 - Landing page");
    println!("  GET  /hero             - Hero preview (?at_ms=&loaded_at_ms=&reduced_motion=)");
    println!("  GET  /sections/{{slug}}  - Lazy section fragment");
    println!("  GET  /api/reveal       - Reveal snapshot and timeline");
    println!("  GET  /api/scroll       - Scroll progress");
    println!("  GET  /api/decor        - Decoration parameters");
    println!("  GET  /health           - Health check");
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    api::run_server(config).await
}

// =============================================================================
// TIMELINE COMMAND
// =============================================================================

/// Replay the reveal in virtual time and print every state change.
pub fn cmd_timeline(
    config: &AppConfig,
    json_mode: bool,
    reduced_motion: bool,
    load_at: Option<u64>,
    until: Option<u64>,
) -> Result<(), GreanError> {
    let preview = Preview {
        at: until.map(Millis),
        loaded_at: load_at.map(Millis),
        reduced_motion,
    };
    let sequencer = preview.run(&config.timing)?;
    let final_snapshot = sequencer.snapshot();

    if json_mode {
        let output = serde_json::json!({
            "timeline": to_json(&sequencer.timeline())?,
            "final": to_json(&final_snapshot)?,
            "ready_notifications": sequencer.ready_count(),
        });
        print_json(&output);
        return Ok(());
    }

    println!("Reveal Timeline");
    println!("===============");
    println!(
        "{:>8}  {:<22} {:<18} {:>5}  {:<8} {:<6} {:<7} {:<5}",
        "at", "event", "phase", "load", "complete", "loaded", "content", "label"
    );
    for entry in sequencer.timeline() {
        print_entry(entry);
    }
    println!();
    println!(
        "Final: {} at {} ({} ready notification{})",
        final_snapshot.phase,
        final_snapshot.at,
        sequencer.ready_count(),
        if sequencer.ready_count() == 1 { "" } else { "s" }
    );

    Ok(())
}

fn print_entry(entry: &TimelineEntry) {
    let s = &entry.snapshot;
    println!(
        "{:>8}  {:<22} {:<18} {:>4}%  {:<8} {:<6} {:<7} {:<5}",
        s.at.to_string(),
        entry.event.name(),
        s.phase.name(),
        s.loading_progress,
        flag(s.loading_complete),
        flag(s.external_content_loaded),
        flag(s.content_visible),
        flag(s.secondary_label_visible),
    );
}

// =============================================================================
// SIMULATE COMMAND
// =============================================================================

/// Run the reveal against the real clock, logging each change.
pub async fn cmd_simulate(
    config: &AppConfig,
    json_mode: bool,
    verbose: bool,
    reduced_motion: bool,
    load_at: Option<u64>,
    timeout_ms: u64,
) -> Result<(), GreanError> {
    let hook: ReadyHook = Box::new(|snapshot: &RevealSnapshot| {
        tracing::info!(at = %snapshot.at, "Hero text and contact badge mounted");
    });
    let mut live = LiveSequencer::spawn_with_hook(config.timing, reduced_motion, Some(hook))?;
    let mut updates = live.subscribe();

    let load = async {
        match load_at {
            Some(ms) => tokio::time::sleep(Duration::from_millis(ms)).await,
            None => std::future::pending::<()>().await,
        }
    };
    tokio::pin!(load);
    let deadline = tokio::time::sleep(Duration::from_millis(timeout_ms));
    tokio::pin!(deadline);
    let mut loaded = false;

    loop {
        tokio::select! {
            () = &mut load, if !loaded => {
                loaded = true;
                live.external_load();
            }
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = *updates.borrow_and_update();
                if verbose && !json_mode {
                    println!(
                        "{:>8}  {:<18} {:>3}%",
                        snapshot.at.to_string(),
                        snapshot.phase.name(),
                        snapshot.loading_progress
                    );
                }
                if snapshot.phase.is_terminal() {
                    break;
                }
            }
            () = &mut deadline => {
                tracing::warn!("Simulation timed out after {}ms", timeout_ms);
                break;
            }
            result = tokio::signal::ctrl_c() => {
                if let Err(e) = result {
                    tracing::warn!("Cannot listen for ctrl-c: {}", e);
                }
                break;
            }
        }
    }

    let final_snapshot = live.unmount().await;
    if json_mode {
        print_json(&to_json(&final_snapshot)?);
    } else {
        println!(
            "Simulation ended in phase {} after {}",
            final_snapshot.phase, final_snapshot.at
        );
    }
    Ok(())
}

// =============================================================================
// SCROLL COMMAND
// =============================================================================

/// Print scroll progress for the given measurements.
pub fn cmd_scroll(
    json_mode: bool,
    offset: u64,
    document_height: u64,
    viewport_height: u64,
) -> Result<(), GreanError> {
    let progress = ScrollMetrics {
        offset,
        document_height,
        viewport_height,
    }
    .progress();

    if json_mode {
        print_json(&serde_json::json!({
            "permille": progress.permille,
            "width": progress.css_width(),
        }));
    } else {
        println!("Scroll progress: {}", progress.css_width());
    }
    Ok(())
}

// =============================================================================
// DECOR COMMAND
// =============================================================================

/// Print the decorative animation parameters.
pub fn cmd_decor(json_mode: bool) -> Result<(), GreanError> {
    let decor = DecorConfig::standard();

    if json_mode {
        print_json(&to_json(&decor)?);
        return Ok(());
    }

    println!("Energy lines");
    println!("============");
    for line in &decor.lines {
        println!(
            "  #{:<2} x2={:<12} y2={:<12} delay={}ms duration={}ms",
            line.index, line.x2, line.y2, line.delay_ms, line.duration_ms
        );
    }
    println!();
    println!("Energy points");
    println!("=============");
    for point in &decor.points {
        println!(
            "  #{:<2} cx={}% cy={}% r={} delay={}ms duration={}ms",
            point.index,
            point.cx_percent,
            point.cy_percent,
            point.radius,
            point.delay_ms,
            point.duration_ms
        );
    }
    println!();
    println!("Patterns");
    println!("========");
    for tile in &decor.patterns {
        println!(
            "  {:<22} {}x{} rotate({})",
            tile.id, tile.width, tile.height, tile.rotation_deg
        );
    }
    Ok(())
}
