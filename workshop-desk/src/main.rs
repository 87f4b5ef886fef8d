//! workshop-desk — command line front desk for the vehicle workshop backend
//!
//! Signs staff and customers in, then drives the bookings, vehicles,
//! services, users and work-order screens of `workshop-client`.

mod cli;
mod commands;
mod logging;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use cli::Cli;

fn default_home() -> PathBuf {
    std::env::var_os("HOME")
        .map(|home| PathBuf::from(home).join(".workshop-desk"))
        .unwrap_or_else(|| PathBuf::from(".workshop-desk"))
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let home = cli.home.clone().unwrap_or_else(default_home);

    let _guard = match logging::init(&home, cli.verbose) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("warning: file logging disabled: {e:#}");
            None
        }
    };

    match commands::run(cli, home).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %format!("{e:#}"), "Command failed");
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
