//! # GREAN WORLD CLI Module
//!
//! ## Available Commands
//!
//! - `serve` - Start the HTTP server
//! - `timeline` - Replay the reveal in virtual time and print every change
//! - `simulate` - Run the reveal against the real clock
//! - `scroll` - Compute scroll progress
//! - `decor` - Print the decorative animation parameters

mod commands;

use clap::{Parser, Subcommand};
use grean::config::AppConfig;
use grean_core::GreanError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// GREAN WORLD - landing page server
///
/// Serves the green-energy landing page and its staged hero reveal.
#[derive(Parser, Debug)]
#[command(name = "grean")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP server
    Serve {
        /// Host to bind to (overrides config)
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port to bind to (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Replay the reveal in virtual time
    Timeline {
        /// Honour a reduced-motion preference
        #[arg(short, long)]
        reduced_motion: bool,

        /// Millisecond at which the visualization finishes loading
        #[arg(short, long)]
        load_at: Option<u64>,

        /// Stop at this millisecond instead of running to completion
        #[arg(short, long)]
        until: Option<u64>,
    },

    /// Run the reveal against the real clock
    Simulate {
        /// Honour a reduced-motion preference
        #[arg(short, long)]
        reduced_motion: bool,

        /// Millisecond at which the visualization finishes loading
        #[arg(short, long)]
        load_at: Option<u64>,

        /// Give up after this many milliseconds
        #[arg(short, long, default_value = "10000")]
        timeout_ms: u64,
    },

    /// Compute scroll progress for a set of measurements
    Scroll {
        /// Current scroll offset in pixels
        #[arg(short, long)]
        offset: u64,

        /// Total document height in pixels
        #[arg(short, long)]
        document_height: u64,

        /// Viewport height in pixels
        #[arg(short = 'w', long)]
        viewport_height: u64,
    },

    /// Print the decorative animation parameters
    Decor,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), GreanError> {
    let json_mode = cli.json_mode;
    let config = AppConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Serve { host, port }) => cmd_serve(config, host, port).await,
        Some(Commands::Timeline {
            reduced_motion,
            load_at,
            until,
        }) => cmd_timeline(&config, json_mode, reduced_motion, load_at, until),
        Some(Commands::Simulate {
            reduced_motion,
            load_at,
            timeout_ms,
        }) => {
            cmd_simulate(
                &config,
                json_mode,
                cli.verbose,
                reduced_motion,
                load_at,
                timeout_ms,
            )
            .await
        }
        Some(Commands::Scroll {
            offset,
            document_height,
            viewport_height,
        }) => cmd_scroll(json_mode, offset, document_height, viewport_height),
        Some(Commands::Decor) => cmd_decor(json_mode),
        None => {
            // No subcommand - serve with the configured address
            cmd_serve(config, None, None).await
        }
    }
}
