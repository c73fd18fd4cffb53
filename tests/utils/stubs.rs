/// Hand-written stand-ins for the API client and the throttle
use anitrack_lib::modules::tracking::{AnimeId, AnimeSnapshot, AnimeStatusSource};
use anitrack_lib::shared::errors::{AppError, AppResult};
use anitrack_lib::shared::utils::Throttle;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Debug, Clone)]
pub enum StubReply {
    Anime { title: String, status: String },
    Http(u16),
    Malformed(String),
}

impl StubReply {
    pub fn anime(title: &str, status: &str) -> Self {
        StubReply::Anime {
            title: title.to_string(),
            status: status.to_string(),
        }
    }

    fn to_result(&self) -> AppResult<AnimeSnapshot> {
        match self {
            StubReply::Anime { title, status } => Ok(AnimeSnapshot::new(title, status)),
            StubReply::Http(code) => Err(AppError::from_http_status(
                StatusCode::from_u16(*code).expect("invalid status code"),
            )),
            StubReply::Malformed(detail) => Err(AppError::MalformedResponse(detail.clone())),
        }
    }
}

/// Replies from a fixed table keyed by the request text; unknown ids get 404.
/// Every requested id is recorded in order.
#[derive(Default)]
pub struct StubSource {
    replies: Mutex<HashMap<String, StubReply>>,
    requests: Mutex<Vec<String>>,
}

impl StubSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, id: &str, reply: StubReply) -> Self {
        self.set(id, reply);
        self
    }

    pub fn set(&self, id: &str, reply: StubReply) {
        self.replies.lock().unwrap().insert(id.to_string(), reply);
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnimeStatusSource for StubSource {
    fn provider_name(&self) -> &'static str {
        "Stub"
    }

    async fn fetch_snapshot(&self, id: &AnimeId) -> AppResult<AnimeSnapshot> {
        self.requests.lock().unwrap().push(id.as_str().to_string());

        match self.replies.lock().unwrap().get(id.as_str()) {
            Some(reply) => reply.to_result(),
            None => Err(AppError::from_http_status(StatusCode::NOT_FOUND)),
        }
    }
}

/// Counts waits instead of sleeping
#[derive(Default)]
pub struct CountingThrottle {
    waits: AtomicUsize,
}

impl CountingThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn waits(&self) -> usize {
        self.waits.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Throttle for CountingThrottle {
    async fn wait(&self) {
        self.waits.fetch_add(1, Ordering::SeqCst);
    }
}
