use crate::modules::tracking::application::ports::AnimeStatusSource;
use crate::modules::tracking::domain::{AnimeId, AnimeSnapshot};
use crate::shared::config::TrackerConfig;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::{LogContext, TimedOperation};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::dto::JikanAnimeResponse;

const PROVIDER: &str = "Jikan";
const USER_AGENT: &str = concat!("anitrack/", env!("CARGO_PKG_VERSION"));

/// Jikan (MyAnimeList) REST client: one GET per identifier, no retries
pub struct JikanClient {
    client: Client,
    base_url: String,
}

impl JikanClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                AppError::ConfigurationError(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &TrackerConfig) -> AppResult<Self> {
        Self::new(config.api_base_url.clone(), config.request_timeout)
    }

    pub fn anime_url(&self, id: &AnimeId) -> String {
        format!("{}/anime/{}", self.base_url, id.as_str())
    }
}

#[async_trait]
impl AnimeStatusSource for JikanClient {
    fn provider_name(&self) -> &'static str {
        PROVIDER
    }

    async fn fetch_snapshot(&self, id: &AnimeId) -> AppResult<AnimeSnapshot> {
        let url = self.anime_url(id);
        LogContext::api_call(PROVIDER, &url, "pending", None);

        let timer = TimedOperation::start();
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        LogContext::api_call(PROVIDER, &url, status.as_str(), Some(timer.elapsed_ms()));

        if !status.is_success() {
            return Err(AppError::from_http_status(status));
        }

        let body = response.text().await?;
        JikanAnimeResponse::parse(&body)?.into_snapshot()
    }
}
