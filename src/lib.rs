pub mod modules;
mod schema;
pub mod shared;

use modules::tracking::{initialize_store, run_check, JikanClient};
use shared::errors::AppResult;
use shared::utils::{init_logger, RateLimiter};
use shared::TrackerConfig;
use std::io;
use std::process::ExitCode;
use std::sync::Arc;

/// Initialize the store, then run one check over the identifier list.
///
/// Only fatal errors (configuration, storage, stdout) produce a failure exit
/// code; per-identifier problems are part of the normal report. The fatal
/// diagnostic is printed once, without a log prefix.
pub async fn run() -> ExitCode {
    init_logger();

    match run_tracker().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run_tracker() -> AppResult<()> {
    let config = TrackerConfig::from_env()?;
    log_debug!("Loaded configuration: {:?}", config);

    initialize_store(&config.database_path)?;

    let source = Arc::new(JikanClient::from_config(&config)?);
    let throttle = Arc::new(RateLimiter::new(config.request_interval));

    let mut stdout = io::stdout();
    run_check(&config, source, throttle, &mut stdout).await?;

    Ok(())
}
