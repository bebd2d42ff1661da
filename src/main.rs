use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use hr_assist::logging::initialize_tracing;
use hr_assist::messaging::EventBus;
use hr_assist::runtime;
use hr_assist::view::{ConsoleSurface, ViewTarget};
use hr_assist::wizard::WizardFlow;
use hr_assist::{AppResult, DemoConfig};

const LOG_TARGET_STARTUP: &str = "hr_assist::startup";

/// Step through processing an employee document with simulated extraction
#[derive(Parser, Debug)]
#[command(name = "hr-wizard", version)]
#[command(about = "Step through processing an employee document with simulated extraction")]
struct Cli {
    /// Configuration file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for the simulated confidence values
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    initialize_tracing("hr-wizard.log");
    tracing::info!(target: LOG_TARGET_STARTUP, "Starting hr-wizard v{}", env!("CARGO_PKG_VERSION"));

    let config = DemoConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    let bus = EventBus::new();
    let (events, _) = bus.subscribe();

    let surface = ConsoleSurface::new(
        "HR Assist · Document Processing",
        &[ViewTarget::PAGE_TITLE, ViewTarget::STEPPER, ViewTarget::APP_ROOT],
    );
    let mut flow = WizardFlow::new(surface, config, bus)?;
    if let Some(seed) = cli.seed {
        tracing::debug!(target: LOG_TARGET_STARTUP, "Using seed {}", seed);
        flow = flow.with_seed(seed);
    }

    runtime::run(&mut flow, &events)
}
