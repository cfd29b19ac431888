//! Mergington Activities Server Entry Point

use clap::Parser;
use mergington_activities::{cli::Cli, config, logging, registry, server, AppState};
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = logging::init(config::log_format(cli.log_format)) {
        eprintln!("failed to initialize logging: {err}");
        return ExitCode::FAILURE;
    }

    info!("Mergington Activities v{}", env!("CARGO_PKG_VERSION"));
    let config = cli.apply(config::load_from_env());

    let catalog = match registry::seed::load_catalog(config.seed_file.as_deref()) {
        Ok(catalog) => catalog,
        Err(err) => {
            error!("Failed to load activity catalog: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let registry = match registry::ActivityRegistry::from_catalog(catalog) {
        Ok(registry) => registry,
        Err(err) => {
            error!("Invalid activity catalog: {}", err);
            return ExitCode::FAILURE;
        }
    };
    info!(activities = registry.len().await, "Activity registry initialized");

    if let Err(err) = server::run(AppState::new(registry), &config).await {
        error!("Server error: {}", err);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
