//! Portico - command-line entry point
//!
//! Loads the provider configuration, resolves the requested provider and
//! runs one step of the authorization code flow, printing JSON to stdout.
//! Logs go to stderr; set `RUST_LOG=debug` for request-level detail.

mod args;
mod commands;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::args::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = portico_infrastructure::load_config(cli.config.as_deref())?;
    let registry = commands::build_registry(config);
    let provider = registry.get_by_name(&cli.provider)?;

    tracing::info!(provider = %provider.provider_id(), "running command");

    let output = commands::execute(provider.as_ref(), cli.command).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
