//! Contact Manager - Main entry point
//!
//! Loads configuration, optionally imports a seed CSV file and prints the
//! stored contacts as JSON on stdout. Logs go to stderr.

use anyhow::{Context, Result};
use contact_manager::{Config, ContactManager};
use std::io::{self, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    // RUST_LOG wins over LOG_LEVEL
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Configuration loaded (environment: {})", config.environment);

    let mut manager = ContactManager::new();

    if let Some(path) = &config.seed_file {
        match manager.import_csv(path) {
            Ok(added) => info!("Imported {} contacts from {}", added, path.display()),
            Err(e) => {
                error!("Failed to import {}: {}", path.display(), e);
                return Err(e.into());
            }
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, manager.get_all_contacts())?;
    writeln!(out)?;

    info!("Listed {} contacts", manager.len());
    Ok(())
}
