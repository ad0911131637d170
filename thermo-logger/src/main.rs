use std::{
    process::ExitCode,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use clap::Parser;

// Local imports
mod config;
mod error;
mod logger;

pub use error::Error;
use logger::Logger;

/// Rewrites a log file with the last 20 CPU temperature readings every 4 seconds
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {}

fn main() -> ExitCode {
    // Initialize the logger
    env_logger::init();
    // Parse command line arguments
    let args = Args::parse();
    log::debug!("Arguments: {args:#?}");
    match run() {
        Ok(()) => {
            log::info!("[LOG] Stopped");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("[LOG] {e}");
            e.exit_code()
        }
    }
}

fn run() -> Result<(), Error> {
    // Synchronizer
    let running = Arc::new(AtomicBool::new(true));
    // Stop after the current sleep on Ctrl+C or SIGTERM
    {
        let running = running.clone();
        ctrlc::set_handler(move || {
            log::info!("Received termination signal, stopping after this interval...");
            running.store(false, Ordering::Relaxed);
        })?;
    }
    let mut logger = Logger::new(config::LOG_PATH);
    log::info!(
        "[LOG] Logging {} to {}",
        logger
            .sources()
            .iter()
            .map(|p| p.to_string_lossy())
            .collect::<Vec<_>>()
            .join(", "),
        logger.destination().display()
    );
    logger.run(&running)?;
    log::info!("[LOG] {} records at shutdown", logger.history().len());
    Ok(())
}
