mod backend_bridge;
mod controller;
mod ui;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use client_core::{load_settings, render::APP_TITLE, HomeworkClient};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::{HomeworkApp, StartupConfig};

#[derive(Parser, Debug)]
#[command(name = "homework_gui", about = "Desktop window for the homework list")]
struct Args {
    /// Base URL of the homework API; overrides homework.toml and env settings.
    #[arg(long)]
    server_url: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let settings = load_settings()
        .context("failed to load client settings")?
        .with_server_url(args.server_url.as_deref())?;
    tracing::info!(server_url = %settings.api_base_url, "starting homework window");
    let client = HomeworkClient::new(settings.api_base_url);
    let startup = StartupConfig {
        server_url: client.server_url().to_string(),
    };

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    backend_bridge::runtime::launch(client, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([720.0, 760.0])
            .with_min_inner_size([420.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(HomeworkApp::bootstrap(cmd_tx, ui_rx, startup)))),
    )
    .map_err(|err| anyhow!("homework window failed: {err}"))
}
