use crate::modules::tracking::domain::AnimeSnapshot;
use crate::shared::errors::{AppError, AppResult};
use serde::Deserialize;

/// `GET /anime/{id}` envelope. Only the fields the tracker reads are modelled;
/// everything else in the payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct JikanAnimeResponse {
    pub data: Option<JikanAnimeData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JikanAnimeData {
    pub mal_id: Option<i64>,
    pub title: Option<String>,
    pub status: Option<String>,
}

impl JikanAnimeResponse {
    pub fn parse(body: &str) -> AppResult<Self> {
        serde_json::from_str(body).map_err(|e| {
            AppError::MalformedResponse(format!("Failed to parse Jikan response: {}", e))
        })
    }

    /// Require `data.title` and `data.status`. Missing or null values are a
    /// `MalformedResponse`, never a panic.
    pub fn into_snapshot(self) -> AppResult<AnimeSnapshot> {
        let data = self.data.ok_or_else(|| {
            AppError::MalformedResponse("Jikan response has no `data` object".to_string())
        })?;

        let title = data.title.ok_or_else(|| {
            AppError::MalformedResponse("Jikan response is missing `data.title`".to_string())
        })?;
        let status = data.status.ok_or_else(|| {
            AppError::MalformedResponse("Jikan response is missing `data.status`".to_string())
        })?;

        Ok(AnimeSnapshot { title, status })
    }
}
