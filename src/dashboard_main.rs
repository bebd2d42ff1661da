use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use hr_assist::assistant::{DashboardController, FileModeStore};
use hr_assist::logging::initialize_tracing;
use hr_assist::messaging::EventBus;
use hr_assist::runtime;
use hr_assist::view::{ConsoleSurface, ViewTarget};
use hr_assist::{AppResult, DemoConfig};

const LOG_TARGET_STARTUP: &str = "hr_assist::startup";

/// AI assistant approvals dashboard
#[derive(Parser, Debug)]
#[command(name = "assistant-dashboard", version)]
#[command(about = "Review what the AI assistant prepared and approve or reject it")]
struct Cli {
    /// Configuration file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Skip mode selection when a drive mode was saved earlier
    #[arg(long)]
    restore_mode: bool,

    /// File the selected drive mode is saved to
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    initialize_tracing("assistant-dashboard.log");
    tracing::info!(
        target: LOG_TARGET_STARTUP,
        "Starting assistant-dashboard v{}",
        env!("CARGO_PKG_VERSION")
    );

    let mut config =
        DemoConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if cli.restore_mode {
        config.restore_saved_mode = true;
    }

    let store = match cli.settings {
        Some(path) => FileModeStore::new(path),
        None => FileModeStore::default_location()?,
    };
    tracing::info!(target: LOG_TARGET_STARTUP, "Drive mode file: {}", store.path().display());

    let bus = EventBus::new();
    let (events, _) = bus.subscribe();

    let surface = ConsoleSurface::new(
        "HR Assist · AI Assistant",
        &[
            ViewTarget::TOASTS,
            ViewTarget::MODE_SELECTION,
            ViewTarget::DASHBOARD,
            ViewTarget::APPROVALS_HEADER,
            ViewTarget::APPROVAL_LIST,
            ViewTarget::REVIEW_MODAL,
            ViewTarget::CHAT_PANEL,
        ],
    );
    let mut dashboard = DashboardController::new(surface, store, config, bus)?;

    runtime::run(&mut dashboard, &events)
}
