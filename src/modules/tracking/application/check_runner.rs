use std::io::Write;
use std::sync::Arc;

use crate::modules::tracking::application::ports::AnimeStatusSource;
use crate::modules::tracking::domain::{
    AnimeId, CheckOutcome, CheckSummary, TrackedAnimeRepository,
};
use crate::shared::errors::AppResult;
use crate::shared::utils::{LogContext, Throttle};
use crate::log_debug;

pub const START_BANNER: &str = "--- Starting check ---";
pub const END_BANNER: &str = "--- Check complete ---";

/// Sequential fetch-compare-update loop over the identifier list.
///
/// Each identifier goes `Fetching -> (Failed | Fetched) -> (New | Changed |
/// Unchanged)` in one pass. Recoverable errors end as `CheckOutcome::Skipped`;
/// storage errors abort the whole run. The throttle pauses after every
/// completed identifier; a skipped one moves straight on to the next.
pub struct CheckRunner {
    source: Arc<dyn AnimeStatusSource>,
    repository: Arc<dyn TrackedAnimeRepository>,
    throttle: Arc<dyn Throttle>,
}

impl CheckRunner {
    pub fn new(
        source: Arc<dyn AnimeStatusSource>,
        repository: Arc<dyn TrackedAnimeRepository>,
        throttle: Arc<dyn Throttle>,
    ) -> Self {
        Self {
            source,
            repository,
            throttle,
        }
    }

    /// Process every identifier in order, writing one line per identifier
    /// between the start and end banners.
    pub async fn run(&self, ids: &[String], out: &mut dyn Write) -> AppResult<CheckSummary> {
        let mut summary = CheckSummary::default();

        writeln!(out, "{}", START_BANNER)?;

        for (index, raw_id) in ids.iter().enumerate() {
            LogContext::check_progress(index + 1, ids.len(), raw_id);

            let outcome = self.check_one(raw_id).await?;
            writeln!(out, "{}", outcome)?;
            summary.record(&outcome);
        }

        writeln!(out, "{}", END_BANNER)?;
        out.flush()?;

        Ok(summary)
    }

    pub async fn check_one(&self, raw_id: &str) -> AppResult<CheckOutcome> {
        let id = match AnimeId::parse(raw_id) {
            Ok(id) => id,
            Err(error) => {
                log_debug!("Skipping identifier '{}': {}", raw_id, error);
                return Ok(CheckOutcome::Skipped {
                    id: raw_id.to_string(),
                    error,
                });
            }
        };

        let snapshot = match self.source.fetch_snapshot(&id).await {
            Ok(snapshot) => snapshot,
            Err(error) if error.is_recoverable() => {
                log_debug!(
                    "{}: skipping ID {} after fetch failure: {}",
                    self.source.provider_name(),
                    id,
                    error
                );
                return Ok(CheckOutcome::Skipped {
                    id: id.as_str().to_string(),
                    error,
                });
            }
            Err(error) => return Err(error),
        };

        let outcome = match self.repository.get_status(id.value()).await? {
            None => {
                self.repository
                    .upsert(id.value(), &snapshot.title, &snapshot.status)
                    .await?;
                CheckOutcome::New {
                    title: snapshot.title,
                    status: snapshot.status,
                }
            }
            Some(previous_status) if previous_status != snapshot.status => {
                self.repository
                    .upsert(id.value(), &snapshot.title, &snapshot.status)
                    .await?;
                CheckOutcome::Changed {
                    title: snapshot.title,
                    previous_status,
                    status: snapshot.status,
                }
            }
            Some(_) => CheckOutcome::Unchanged {
                title: snapshot.title,
                status: snapshot.status,
            },
        };

        log_debug!("ID {} -> {:?}", id, outcome);
        self.throttle.wait().await;
        Ok(outcome)
    }
}
