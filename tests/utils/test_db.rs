/// Isolated on-disk store for tests
///
/// Each `TestStore` owns a temporary directory holding the SQLite file and the
/// identifier list; both disappear when the store is dropped.
use anitrack_lib::modules::tracking::{
    initialize_store, TrackedAnime, TrackedAnimeRepository, TrackedAnimeRepositoryImpl,
};
use anitrack_lib::shared::{Database, TrackerConfig};
use std::fs;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

pub struct TestStore {
    pub config: TrackerConfig,
    _dir: TempDir,
}

impl TestStore {
    /// Config pointing into a fresh temp dir. The list file is not created.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        let config = TrackerConfig {
            database_path: dir.path().join("anime_tracker.db"),
            id_list_path: dir.path().join("animes.txt"),
            api_base_url: "http://127.0.0.1:9/v4".to_string(),
            request_interval: Duration::ZERO,
            request_timeout: Duration::from_secs(5),
        };

        Self { config, _dir: dir }
    }

    /// Same as `new`, with the table already created
    pub fn initialized() -> Self {
        let store = Self::new();
        initialize_store(&store.config.database_path).expect("Failed to initialize store");
        store
    }

    pub fn write_ids(&self, ids: &[&str]) {
        let mut contents = ids.join("\n");
        contents.push('\n');
        fs::write(&self.config.id_list_path, contents).expect("Failed to write id list");
    }

    pub fn open(&self) -> Arc<Database> {
        Arc::new(Database::open(&self.config.database_path).expect("Failed to open database"))
    }

    pub fn repository(&self) -> TrackedAnimeRepositoryImpl {
        TrackedAnimeRepositoryImpl::new(self.open())
    }

    /// Insert rows directly, committed
    pub async fn seed(&self, rows: &[(i64, &str, &str)]) {
        let repo = self.repository();
        for (id, title, status) in rows {
            repo.upsert(*id, title, status).await.expect("Failed to seed row");
        }
    }

    pub async fn rows(&self) -> Vec<TrackedAnime> {
        self.repository()
            .list_all()
            .await
            .expect("Failed to list rows")
    }

    pub fn database_exists(&self) -> bool {
        self.config.database_path.exists()
    }
}
