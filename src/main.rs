//! HTTPX - interactive HTTP client
//!
//! Logs go to `~/.httpx/httpx.log` so they never mix with the console.

use std::io;
use std::path::PathBuf;

use httpx::constants::{LOG_DIR_NAME, LOG_FILE_NAME};
use httpx::Shell;

/// `~/.httpx`, or the current directory when it cannot be created
fn log_dir() -> PathBuf {
    let dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(LOG_DIR_NAME);
    match std::fs::create_dir_all(&dir) {
        Ok(()) => dir,
        Err(_) => PathBuf::from("."),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(log_dir(), LOG_FILE_NAME);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting");

    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), io::stdout());
    shell.run().await?;

    Ok(())
}
