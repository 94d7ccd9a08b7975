//! `namesilo` command-line client
//!
//! Lists and edits DNS records of a NameSilo-registered zone. Logs go to
//! stderr, record output to stdout.

mod cli;
mod commands;
mod config;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use namesilo_provider::create_provider;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let config = config::load(&cli.global)?;
    tracing::debug!(?config, "resolved configuration");

    let provider = create_provider(&config)?;
    commands::dispatch(cli.command, provider.as_ref()).await
}
