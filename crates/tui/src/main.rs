mod app;
mod config;
mod error;
mod forms;
mod phone;
mod ui;

use crate::error::Result;

fn main() -> Result<()> {
    let config = config::load()?;
    init_tracing(&config)?;

    let mut app = app::App::new(config)?;
    app.run()?;
    Ok(())
}

/// Sends logs to the configured file. Stdout belongs to the alternate screen,
/// so an empty path disables logging entirely.
fn init_tracing(config: &config::AppConfig) -> Result<()> {
    if config.log_file.is_empty() {
        return Ok(());
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;

    let filter = tracing_subscriber::EnvFilter::try_new(format!(
        "engine={level},mishwar_tui={level}",
        level = config.log_level
    ))
    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
