mod adapters;
mod app;
mod cli;
mod core;
mod global_constants;
mod infrastructure;
mod presentation;


use std::process::ExitCode;

use clap::Parser;

use crate::cli::Cli;
use crate::core::models::PageSettings;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::init();

    log::info!("[MAIN] Starting {}", global_constants::APPLICATION_NAME);

    let cli = Cli::parse();

    let settings = match cli.settings.as_deref() {
        Some(settings_path) => match PageSettings::load_from(settings_path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("[MAIN] Failed to load settings: {}", e);
                eprintln!("error: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => PageSettings::load().unwrap_or_else(|e| {
            log::warn!("[MAIN] Failed to load settings: {}, using defaults", e);
            PageSettings::default()
        }),
    };

    let outreach_app = app::OutreachApp::build(settings);

    match outreach_app.run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("[MAIN] {}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
