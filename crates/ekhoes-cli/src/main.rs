//! ekhoes - command-line client for the ekhoes remote service.
//!
//! Authenticates against a configured server, stores the bearer token
//! locally, and lists or terminates active sessions and live connections.

mod cli;
mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::Cli;
use context::App;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.json_logs);

    if let Err(e) = run(cli).await {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let dir = config::config_dir()?;

    // First run: write the default config and stop. The user edits the URL
    // if needed, then logs in.
    if !config::is_initialized(&dir) {
        println!("Initializing...");
        config::bootstrap(&dir)?;
        println!("Done. Now login to continue");
        return Ok(());
    }

    let config = config::load(&dir)?;

    let Some(command) = cli.command else {
        // Bare invocation is a no-op, matching `ekhoes --help` being the
        // place to discover verbs.
        return Ok(());
    };

    let app = App::new(&config, dir)?;
    commands::handle(command, &app).await
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .init();
    }
}
