// Entry point.
// Sets up file logging, loads config, and runs the TUI.

mod app;
mod config;
mod error;
mod state;
mod ui;

use std::fs;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::config::Config;
use crate::error::Result;

fn main() -> Result<()> {
    init_logging();

    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err.to_string())),
    };

    let mut app = App::new(config);
    if let Some(message) = config_error {
        tracing::error!(message = "config rejected", error = message.as_str());
        app.console
            .error(format!("config ignored, using defaults: {message}"));
    }
    tracing::info!(message = "tabgate starting", tabs = app.tabs.len());

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();
    result?;
    Ok(())
}

/// Tracing goes to a file since stdout belongs to the TUI. Filter with
/// RUST_LOG; best-effort, an unwritable log path just means no log.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let Some(path) = config::log_path() else {
        return;
    };
    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return;
        }
    }
    let Ok(file) = fs::File::create(&path) else {
        return;
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();
}
