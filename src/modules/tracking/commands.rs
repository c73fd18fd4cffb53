use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use crate::modules::tracking::application::{read_identifiers, AnimeStatusSource, CheckRunner};
use crate::modules::tracking::domain::CheckSummary;
use crate::modules::tracking::infrastructure::TrackedAnimeRepositoryImpl;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Throttle;
use crate::shared::{Database, TrackerConfig};
use crate::{log_error, log_info};

/// Make sure the store exists with its table. Opens and releases its own
/// connection.
pub fn initialize_store(database_path: &Path) -> AppResult<()> {
    let database = Database::open(database_path)?;
    database.ensure_schema()
}

/// One full check run.
///
/// Returns `Ok(None)` when the identifier list is missing: the user gets a
/// message and neither the store nor the network is touched. Every write of
/// the run is committed together at the end; a fatal error rolls them back.
pub async fn run_check(
    config: &TrackerConfig,
    source: Arc<dyn AnimeStatusSource>,
    throttle: Arc<dyn Throttle>,
    out: &mut dyn Write,
) -> AppResult<Option<CheckSummary>> {
    let ids = match read_identifiers(&config.id_list_path) {
        Ok(ids) => ids,
        Err(AppError::ConfigurationError(reason)) => {
            log_info!("Identifier list unavailable: {}", reason);
            writeln!(
                out,
                "Error: '{}' file not found. Please create it with the anime IDs.",
                config.id_list_path.display()
            )?;
            return Ok(None);
        }
        Err(e) => return Err(e),
    };

    let database = Arc::new(Database::open(&config.database_path)?);
    database.begin()?;

    let repository = Arc::new(TrackedAnimeRepositoryImpl::new(Arc::clone(&database)));
    let runner = CheckRunner::new(source, repository, throttle);

    let summary = match runner.run(&ids, out).await {
        Ok(summary) => summary,
        Err(e) => {
            if let Err(rollback_error) = database.rollback() {
                log_error!("Failed to roll back check run: {}", rollback_error);
            }
            return Err(e);
        }
    };

    database.commit()?;
    log_info!("Check run finished: {}", summary);

    Ok(Some(summary))
}
