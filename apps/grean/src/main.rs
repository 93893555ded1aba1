//! # GREAN WORLD - Landing Page Server
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     apps/grean (THE BINARY)                  │
//! │                                                              │
//! │  ┌─────────────┐   ┌──────────────┐   ┌──────────────────┐   │
//! │  │    CLI      │   │  HTTP + HTML │   │  Live Sequencer  │   │
//! │  │   (clap)    │   │ (axum, maud) │   │  (tokio actor)   │   │
//! │  └──────┬──────┘   └──────┬───────┘   └────────┬─────────┘   │
//! │         └─────────────────┼────────────────────┘             │
//! │                           ▼                                  │
//! │                  ┌────────────────┐                          │
//! │                  │   grean-core   │                          │
//! │                  │(THE SEQUENCER) │                          │
//! │                  └────────────────┘                          │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! grean serve --port 8080
//! grean timeline --load-at 0
//! grean simulate --load-at 1200 --verbose
//! grean scroll --offset 300 --document-height 2000 --viewport-height 800
//! ```

mod cli;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    // GREAN_LOG_FORMAT=json switches to machine-parseable output.
    let log_format = std::env::var("GREAN_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "grean=info,tower_http=debug".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    let cli = cli::Cli::parse();

    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    if let Err(e) = cli::execute(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

fn print_banner() {
    println!(
        r#"
   ██████╗ ██████╗ ███████╗ █████╗ ███╗   ██╗
  ██╔════╝ ██╔══██╗██╔════╝██╔══██╗████╗  ██║
  ██║  ███╗██████╔╝█████╗  ███████║██╔██╗ ██║
  ██║   ██║██╔══██╗██╔══╝  ██╔══██║██║╚██╗██║
  ╚██████╔╝██║  ██║███████╗██║  ██║██║ ╚████║
   ╚═════╝ ╚═╝  ╚═╝╚══════╝╚═╝  ╚═╝╚═╝  ╚═══╝

  GREAN WORLD v{}

  Staged Reveal • Server Rendered • Deterministic
"#,
        env!("CARGO_PKG_VERSION")
    );
}
