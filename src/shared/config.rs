use crate::shared::errors::{AppError, AppResult};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_DATABASE_PATH: &str = "anime_tracker.db";
pub const DEFAULT_ID_LIST_PATH: &str = "animes.txt";
pub const DEFAULT_API_BASE_URL: &str = "https://api.jikan.moe/v4";
pub const DEFAULT_REQUEST_INTERVAL_MS: u64 = 1000;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

const INTERVAL_KEY: &str = "ANITRACK_REQUEST_INTERVAL_MS";
const TIMEOUT_KEY: &str = "ANITRACK_REQUEST_TIMEOUT_SECS";

/// Runtime settings. Every value falls back to the fixed defaults above, so an
/// empty environment gives the plain `anime_tracker.db` + `animes.txt` setup.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    pub database_path: PathBuf,
    pub id_list_path: PathBuf,
    pub api_base_url: String,
    pub request_interval: Duration,
    pub request_timeout: Duration,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            id_list_path: PathBuf::from(DEFAULT_ID_LIST_PATH),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_interval: Duration::from_millis(DEFAULT_REQUEST_INTERVAL_MS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl TrackerConfig {
    /// Load from the process environment, reading `.env` first if present
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            database_path: value("ANITRACK_DATABASE")
                .map(PathBuf::from)
                .unwrap_or(defaults.database_path),
            id_list_path: value("ANITRACK_ID_LIST")
                .map(PathBuf::from)
                .unwrap_or(defaults.id_list_path),
            api_base_url: value("ANITRACK_API_BASE_URL")
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            request_interval: match value(INTERVAL_KEY) {
                Some(raw) => Duration::from_millis(parse_number(INTERVAL_KEY, &raw)?),
                None => defaults.request_interval,
            },
            request_timeout: match value(TIMEOUT_KEY) {
                Some(raw) => Duration::from_secs(parse_number(TIMEOUT_KEY, &raw)?),
                None => defaults.request_timeout,
            },
        })
    }
}

fn parse_number(key: &str, raw: &str) -> AppResult<u64> {
    raw.trim().parse::<u64>().map_err(|_| {
        AppError::ConfigurationError(format!(
            "{} must be a non-negative integer, got '{}'",
            key, raw
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = TrackerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, TrackerConfig::default());
        assert_eq!(config.database_path, PathBuf::from("anime_tracker.db"));
        assert_eq!(config.id_list_path, PathBuf::from("animes.txt"));
        assert_eq!(config.api_base_url, "https://api.jikan.moe/v4");
        assert_eq!(config.request_interval, Duration::from_secs(1));
    }

    #[test]
    fn test_overrides() {
        let config = TrackerConfig::from_lookup(lookup_from(&[
            ("ANITRACK_DATABASE", "/tmp/tracker.db"),
            ("ANITRACK_ID_LIST", "ids.txt"),
            ("ANITRACK_API_BASE_URL", "http://localhost:8080/v4/"),
            ("ANITRACK_REQUEST_INTERVAL_MS", "250"),
            ("ANITRACK_REQUEST_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();

        assert_eq!(config.database_path, PathBuf::from("/tmp/tracker.db"));
        assert_eq!(config.id_list_path, PathBuf::from("ids.txt"));
        assert_eq!(config.api_base_url, "http://localhost:8080/v4");
        assert_eq!(config.request_interval, Duration::from_millis(250));
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config =
            TrackerConfig::from_lookup(lookup_from(&[("ANITRACK_DATABASE", "   ")])).unwrap();
        assert_eq!(config.database_path, PathBuf::from(DEFAULT_DATABASE_PATH));
    }

    #[test]
    fn test_invalid_interval_is_configuration_error() {
        let result =
            TrackerConfig::from_lookup(lookup_from(&[("ANITRACK_REQUEST_INTERVAL_MS", "fast")]));
        assert!(matches!(result, Err(AppError::ConfigurationError(_))));
    }
}
