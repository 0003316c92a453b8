mod domain;
mod api;
mod clients;
mod forms;
mod ui;

mod app_system;
mod commands;
mod config;
mod error;
mod format;
mod location;

#[cfg(test)]
mod mock_framework;

mod actor_framework;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, Instrument};

use crate::api::ApiClient;
use crate::app_system::{setup_tracing, DashboardSystem};
use crate::commands::{execute, shell, Command, Session};
use crate::config::PanelConfig;
use crate::ui::error_page::render_error_page;

/// Terminal panel for pizza.shop restaurant managers.
#[derive(Parser, Debug)]
#[command(name = "pizzashop_panel", about = "pizza.shop restaurant panel")]
struct Cli {
    /// Base URL of the API (overrides PIZZASHOP_API_URL and the config file).
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Path to the config file (default: ~/.pizzashop/config.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Setup tracing once for the entire application
    setup_tracing();

    let cli = Cli::parse();
    ui::enable_colors(std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none());

    let config = PanelConfig::resolve(cli.config.as_deref(), cli.api_url)?;
    let api = ApiClient::new(&config.api_url)?;

    info!(api_url = api.base_url(), "Starting pizza.shop panel");
    let mut session = Session::new(DashboardSystem::new(api));

    let result = match cli.command {
        Command::Shell => shell::run_shell(&mut session).await,
        command => {
            let span = tracing::info_span!("command");
            execute(command, &mut session)
                .instrument(span)
                .await
                .map(|output| {
                    if !output.is_empty() {
                        println!("{}", output);
                    }
                })
        }
    };

    session.shutdown().await.map_err(anyhow::Error::msg)?;

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            error!(error = %e, "Command failed");
            println!("{}", render_error_page(&format!("{:#}", e)));
            Ok(ExitCode::FAILURE)
        }
    }
}
