//! tasklist - A terminal to-do list.
//!
//! This is the main binary that loads configuration, seeds the task store
//! and launches the TUI application.

use std::{fs::OpenOptions, path::Path, sync::Mutex};

use anyhow::Context;
use tasklist_config::Config;
use tasklist_protocol::TaskStore;
use tasklist_tui::{App, terminal};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Sends log output to `path`.
///
/// The terminal belongs to the UI, so without a log file nothing is logged.
/// `RUST_LOG` takes precedence over the configured filter.
fn init_logging(path: &Path, filter: &str) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    if let Some(log_file) = &config.log_file {
        init_logging(log_file, &config.log_filter)?;
    }

    let seed = config
        .seed_entries()
        .context("failed to load seed tasks")?;
    let store = TaskStore::from_seed(seed);
    info!(tasks = store.len(), "task store seeded");

    // Restore the terminal if anything below panics
    terminal::install_panic_hook();

    let mut terminal = terminal::setup_terminal()?;
    let mut app = App::with_config(store, &config);

    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    result
}
