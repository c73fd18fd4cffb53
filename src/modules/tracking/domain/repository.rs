/// Repository trait for the tracked anime store
///
/// Constructed once per run and handed to the check runner explicitly.
use crate::modules::tracking::domain::entities::TrackedAnime;
use crate::shared::errors::AppResult;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrackedAnimeRepository: Send + Sync {
    /// Stored status for an identifier, `None` if it was never seen
    async fn get_status(&self, id: i64) -> AppResult<Option<String>>;

    /// Insert a new row, or update only the status of an existing one.
    /// The stored title is never overwritten.
    async fn upsert(&self, id: i64, title: &str, status: &str) -> AppResult<()>;

    async fn find(&self, id: i64) -> AppResult<Option<TrackedAnime>>;

    /// All rows ordered by identifier
    async fn list_all(&self) -> AppResult<Vec<TrackedAnime>>;
}
