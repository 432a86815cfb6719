//! Contact Assistant - Main entry point
//!
//! Runs the interactive assistant on stdin/stdout. Logs go to stderr so they
//! never mix with the transcript.

use anyhow::Result;
use contact_assistant::{run_session, Assistant, Config, SystemClock};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only, RUST_LOG wins over LOG_LEVEL)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        "Starting contact assistant, birthday window: {} days",
        config.birthday_window_days
    );

    let mut assistant = Assistant::new(Box::new(SystemClock), config.birthday_window_days);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if let Err(e) = run_session(&mut assistant, stdin.lock(), &mut stdout) {
        error!("Session failed: {}", e);
        return Err(e.into());
    }

    info!("Contact assistant shutdown complete");
    Ok(())
}
