//! Contact Book - Main entry point
//!
//! Loads the address book, runs the interactive assistant on stdin/stdout, and
//! saves the book on exit.

use anyhow::{Context, Result};
use contact_book::{CommandHandler, Config, JsonFileStore, Session, SystemClock};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL from .env applies
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // Initialize logging (stderr only, stdout is the conversation with the user)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        path = %config.book_path.display(),
        horizon_days = config.birthday_horizon_days,
        weekend_policy = config.weekend_policy.as_str(),
        "Starting contact book"
    );

    let store = JsonFileStore::new(config.book_path.clone());
    let handler = CommandHandler::from_config(SystemClock, &config);

    let mut session = Session::open(store, handler)
        .with_context(|| format!("Failed to open {}", config.book_path.display()))?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session
        .run(stdin.lock(), &mut stdout)
        .context("Contact book session failed")?;

    info!(contacts = session.book().len(), "Contact book shutdown complete");
    Ok(())
}
