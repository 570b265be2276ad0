//! Subcommand implementations

use crate::cli::{Cli, Command, OutputFormat};
use anyhow::{Context, Result};
use config::{EnvSource, Settings, SettingsLoader, SettingsValidator};
use std::io::Write;
use std::path::Path;
use tracing::{error, info, warn};
use types::ConfigError;

/// Dispatch the parsed command against an environment snapshot
pub fn run<E: EnvSource>(cli: &Cli, env: &E) -> Result<()> {
    match &cli.command {
        Command::Check => check(env, cli.static_config.as_deref()),
        Command::Show { format } => {
            let settings = load(env, cli.static_config.as_deref())?;
            let rendered = render(&settings, *format)?;
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", rendered).context("Failed to write settings")?;
            Ok(())
        }
        Command::Example { path } => {
            SettingsLoader::create_example(path)?;
            info!("Example static settings written to {}", path.display());
            Ok(())
        }
    }
}

fn load<E: EnvSource>(env: &E, static_path: Option<&Path>) -> Result<Settings> {
    SettingsLoader::load(env, static_path).context("Failed to resolve settings")
}

/// Resolve settings, then validate them; any validation error fails the check
fn check<E: EnvSource>(env: &E, static_path: Option<&Path>) -> Result<()> {
    let settings = load(env, static_path)?;
    let report = SettingsValidator::validate(&settings);

    if report.has_warnings() {
        for issue in &report.warnings {
            warn!(field = %issue.field, "{}", issue.message);
        }
    }

    info!("{}", report.summary());

    if !report.is_valid() {
        for issue in &report.errors {
            error!(field = %issue.field, "{}", issue.message);
        }
        let first = &report.errors[0];
        return Err(ConfigError::ValidationError {
            field: first.field.clone(),
            message: first.message.clone(),
        })
        .context("Settings failed validation");
    }

    info!("Mode: {}", settings.mode);
    info!("Allowed hosts: {}", settings.allowed_hosts.join(", "));
    info!("Search endpoints: {}", settings.search.endpoints().join(", "));
    info!(
        "Authentication backends: {}",
        settings.authentication_backends().join(", ")
    );

    Ok(())
}

/// Render settings in the requested format
pub fn render(settings: &Settings, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(settings).context("Failed to serialize settings as JSON")
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(settings).context("Failed to serialize settings as YAML")
        }
    }
}
