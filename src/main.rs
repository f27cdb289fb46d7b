//! cinetui - Main entry point
//!
//! Seeds and loads the catalog, then hands control to the TUI event loop.

use std::io::stdout;

use anyhow::Context;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cinetui::app::App;
use cinetui::cli::Cli;
use cinetui::store::CsvStore;

/// Initialize the logger with appropriate settings.
///
/// Logs go to stderr so they do not fight the TUI; RUST_LOG overrides the
/// default `info` filter.
fn init_logger() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logger();
    info!("cinetui starting up");

    let cli = Cli::parse_args();

    let store = CsvStore::new(&cli.data_file);
    if store.seed_if_missing().context("failed to seed catalog")? {
        info!(path = %store.path().display(), "seeded default movies");
    }
    let catalog = store.load().context("failed to load catalog")?;

    // Initialize terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen)
        .context("failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;

    let mut app = App::new(store, catalog);
    let result = app.run(&mut terminal);

    // Cleanup terminal (always attempt cleanup, even if the app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    result.context("application error")
}
