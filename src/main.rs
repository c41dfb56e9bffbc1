//! LearnHub console application entry point.
//!
//! Wires configuration, logging and the service graph together, then
//! hands control to the interactive shell.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use learnhub_console::render::OutputFormat;
use learnhub_console::{AppState, Shell};
use learnhub_core::config::AppConfig;
use learnhub_core::error::AppError;

/// Academy LearnHub — interactive learning platform
#[derive(Debug, Parser)]
#[command(name = "learnhub-app", version, about, long_about = None)]
struct Cli {
    /// Configuration environment overlay (config/<env>.toml)
    #[arg(short, long, default_value = "development")]
    env: String,

    /// Output format for listings
    #[arg(short, long, value_enum, default_value = "table")]
    format: OutputFormat,
}

fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::load(&cli.env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config, cli.format) {
        tracing::error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().with_env_filter(filter).with_target(true).init();
        }
    }
}

fn run(config: AppConfig, format: OutputFormat) -> Result<(), AppError> {
    tracing::info!(
        "Starting {} v{}",
        config.app.name,
        env!("CARGO_PKG_VERSION")
    );

    let state = AppState::new(config)?;
    Shell::new(state, format).run()
}
