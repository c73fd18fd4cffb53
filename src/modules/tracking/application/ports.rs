use async_trait::async_trait;

use crate::modules::tracking::domain::{AnimeId, AnimeSnapshot};
use crate::shared::errors::AppResult;

/// Port (interface) for the remote anime-information API
/// Infrastructure implements this for Jikan; tests substitute stubs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnimeStatusSource: Send + Sync {
    /// Short provider name used in logs
    fn provider_name(&self) -> &'static str;

    /// Fetch the current title and status for one identifier.
    /// Transport, HTTP and decoding failures come back as recoverable errors.
    async fn fetch_snapshot(&self, id: &AnimeId) -> AppResult<AnimeSnapshot>;
}
