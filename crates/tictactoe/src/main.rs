//! Tic-tac-toe console front end.

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe::{BoundView, Cli, GameView, ReactiveView, Settings, ViewKind};
use tictactoe_core::SharedEngine;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;
    if let Some(view) = cli.view {
        settings = settings.with_view(view);
    }

    info!(view = %settings.view(), "Starting tic-tac-toe");

    let mut view: Box<dyn GameView> = match settings.view() {
        ViewKind::Bound => Box::new(BoundView::new(settings.clone())),
        ViewKind::Reactive => {
            Box::new(ReactiveView::attach(SharedEngine::new(), settings.clone()))
        }
    };

    let stdin = std::io::stdin();
    tictactoe::run(view.as_mut(), stdin.lock(), std::io::stdout())
        .context("Console I/O failed")?;

    Ok(())
}
