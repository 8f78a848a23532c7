//! Address Book - Main entry point
//!
//! Runs the interactive assistant on stdin/stdout. Logs go to stderr.

use address_book::{repl, AddressBook, Config, Session};
use anyhow::Result;
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env();

    // RUST_LOG wins over LOG_LEVEL; fall back to the default level if the config is broken
    let level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| Config::default().log_level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

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
        "Birthday window: {} days",
        config.birthday_window_days
    );

    let mut session = Session::new(AddressBook::new()).window_days(config.birthday_window_days);

    let stdin = io::stdin();
    let stdout = io::stdout();
    repl::run(&mut session, stdin.lock(), stdout.lock(), &config.prompt)?;

    Ok(())
}
