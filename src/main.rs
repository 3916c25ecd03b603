//! Contact Assistant - Main entry point
//!
//! Runs the interactive address book assistant on the console. The book is
//! loaded from the configured snapshot file and saved back on exit.

use anyhow::Result;
use contact_assistant::{Assistant, Config, ConsoleView, JsonFileRepository};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging (stderr only to keep the console conversation clean)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Using address book at {}", config.book_path.display());

    let repository = JsonFileRepository::new(&config.book_path);
    let mut assistant = match Assistant::new(ConsoleView::new(), repository, &config) {
        Ok(assistant) => assistant,
        Err(e) => {
            error!("Failed to load address book: {}", e);
            return Err(e.into());
        }
    };

    assistant.run()?;

    info!("Contact assistant shutdown complete");
    Ok(())
}
