mod main_runtime;

use anyhow::Context;
use clap::Parser;
use crease::adapters::{load_store, start_api_server};
use crease::cli::output::OutputMode;
use crease::cli::summary::run_summary;
use crease::cli::{Cli, Commands};
use crease::config::AppConfig;
use crease::domain::TeamFilter;
use main_runtime::{init_logging, init_logging_simple, shutdown_signal};
use std::sync::Arc;
use tracing::info;

fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut config = AppConfig::load_from(&cli.config_dir)
        .with_context(|| format!("loading config from {}", cli.config_dir.display()))?;
    cli.apply_overrides(&mut config);
    config.ensure_valid()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match &cli.command {
        Some(Commands::Summary { team, json }) => {
            init_logging_simple();
            let store = load_store(&config.data).context("loading datasets")?;
            let team = team.as_deref().map_or(TeamFilter::All, TeamFilter::parse);
            run_summary(&store, &team, OutputMode::from_json_flag(*json))?;
        }
        Some(Commands::Serve { .. }) | None => {
            init_logging(&config.logging);
            info!(version = env!("CARGO_PKG_VERSION"), "starting crease");

            let store = Arc::new(load_store(&config.data).context("loading datasets")?);
            start_api_server(store, &config.bind_addr(), shutdown_signal()).await?;
        }
    }

    Ok(())
}
