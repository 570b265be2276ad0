//! Arches settings resolver - command line entry point

use anyhow::{Context, Result};
use clap::Parser;
use config::{EnvSource, Environment, Resolver};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;

use cli::Cli;

fn main() -> Result<()> {
    // Load .env file if it exists
    let dotenv_result = dotenv::dotenv();

    let cli = Cli::parse();

    // The snapshot is taken once, after .env has been applied
    let env = Environment::capture();

    init_logging(&env, cli.log_format.as_deref())?;

    match dotenv_result {
        Ok(path) => info!("Loaded environment variables from {}", path.display()),
        Err(e) if !e.not_found() => warn!("Could not load .env file: {}", e),
        Err(_) => {}
    }

    info!("Starting arches-settings v{}", env!("CARGO_PKG_VERSION"));

    commands::run(&cli, &env)
}

/// Initialize logging from `RUST_LOG` and `LOG_FORMAT`
fn init_logging<E: EnvSource>(env: &E, format_override: Option<&str>) -> Result<()> {
    let r = Resolver::new(env);
    let log_level = r.optional("RUST_LOG", "info");
    let log_format = format_override
        .map(str::to_string)
        .unwrap_or_else(|| r.optional("LOG_FORMAT", "json"));

    let env_filter = tracing_subscriber::EnvFilter::try_new(&log_level)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // Logs go to stderr so `show` output stays machine readable
    let registry = tracing_subscriber::registry().with(env_filter);

    match log_format.as_str() {
        "pretty" => {
            registry
                .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
                .try_init()
                .context("Failed to initialize pretty logging")?;
        }
        _ => {
            registry
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .try_init()
                .context("Failed to initialize JSON logging")?;
        }
    }

    info!("Logging initialized");
    info!("Log level: {}", log_level);
    info!("Log format: {}", log_format);

    if log_level == "trace" || log_level == "debug" {
        warn!("Debug/trace logging enabled - variable names are logged for every lookup");
    }

    Ok(())
}
