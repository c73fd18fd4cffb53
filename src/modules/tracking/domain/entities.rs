/// One row of the store: an anime seen at least once by a check run.
///
/// `title` is recorded on first sight and never rewritten afterwards;
/// only `last_known_status` follows the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedAnime {
    pub id: i64,
    pub title: String,
    pub last_known_status: String,
}

impl TrackedAnime {
    pub fn new(id: i64, title: impl Into<String>, last_known_status: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            last_known_status: last_known_status.into(),
        }
    }
}

/// What the API currently reports for an anime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimeSnapshot {
    pub title: String,
    pub status: String,
}

impl AnimeSnapshot {
    pub fn new(title: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            status: status.into(),
        }
    }
}
