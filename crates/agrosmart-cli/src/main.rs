//! agrosmart - command-line client for the AgroSmart farm management API.
//!
//! A thin wrapper over `agrosmart-core`: every subcommand maps onto one
//! library operation and prints its result as JSON.

mod cli;
mod commands;
mod output;

use std::io;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use agrosmart_core::models::{Animal, Breed, Lot, Milking, Paddock};
use agrosmart_core::{ApiClient, ApiError, Config};

use cli::{Cli, Commands};
use commands::{auth, dashboard, resource, resolve_farm};

/// Log file name prefix inside `--log-dir`
const LOG_FILE_PREFIX: &str = "agrosmart.log";

/// Initialize the tracing subscriber. Use RUST_LOG to override the level
/// picked from `-v` flags.
fn init_logging(verbosity: u8, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(file_layer)
        .init();

    guard
}

async fn run(cli: Cli) -> Result<()> {
    if let Commands::Config(args) = cli.command {
        return commands::config::run(args, cli.pretty);
    }

    let config = Config::load()?;
    let session = config.open_session_store()?;
    let client = ApiClient::from_config(&config, session)?;
    debug!(client = ?client, "Client ready");

    let farm = || resolve_farm(cli.farm, &config, client.session());

    match cli.command {
        Commands::Login(args) => auth::login(&client, args).await,
        Commands::Register(args) => auth::register(&client, args).await,
        Commands::Logout => auth::logout(&client),
        Commands::Status => auth::status(&client, &config),
        Commands::Dashboard => dashboard::run(&client, farm()?, cli.pretty).await,
        Commands::Animals(cmd) => resource::run::<Animal>(&client, farm()?, cmd.action, cli.pretty).await,
        Commands::Breeds(cmd) => resource::run::<Breed>(&client, farm()?, cmd.action, cli.pretty).await,
        Commands::Lots(cmd) => resource::run::<Lot>(&client, farm()?, cmd.action, cli.pretty).await,
        Commands::Paddocks(cmd) => resource::run::<Paddock>(&client, farm()?, cmd.action, cli.pretty).await,
        Commands::Milkings(cmd) => resource::run::<Milking>(&client, farm()?, cmd.action, cli.pretty).await,
        Commands::Config(_) => Ok(()),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let _guard = init_logging(cli.verbose, cli.log_dir.as_deref());
    info!("agrosmart starting");

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            if e
                .downcast_ref::<ApiError>()
                .is_some_and(ApiError::requires_login)
            {
                output::hint("Your session has ended. Run 'agrosmart login' to sign in again.");
            }
            ExitCode::FAILURE
        }
    }
}
