//! Copay CLI Application
//!
//! Command-line interface for the copay program store.

mod args;
mod cli;
mod renderer;

use std::{process::ExitCode, time::Duration};

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use copay_core::{display::OperationStatus, ProgramStoreBuilder};
use log::{error, info};
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::init();

    let Args {
        database,
        busy_timeout_ms,
        no_color,
        command,
    } = Args::parse();

    let mut builder = ProgramStoreBuilder::new().with_connection_string(database);
    if let Some(ms) = busy_timeout_ms {
        builder = builder.with_busy_timeout(Duration::from_millis(ms));
    }

    let store = builder
        .build()
        .await
        .context("Failed to initialize program store")?;

    info!("Copay started on {}", store.connection_string());

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(store, renderer);

    let outcome = match command {
        Some(Commands::Program { command }) => cli.handle_program_command(command).await,
        None => cli.list_programs().await,
    };

    match outcome {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            error!("Command failed: {e:?}");
            cli.render_error(&OperationStatus::from_error(&e).to_string());
            Ok(ExitCode::FAILURE)
        }
    }
}
