pub mod application;
pub mod commands;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{AnimeStatusSource, CheckRunner};
pub use commands::{initialize_store, run_check};
pub use domain::{
    AnimeId, AnimeSnapshot, CheckOutcome, CheckSummary, TrackedAnime, TrackedAnimeRepository,
};
pub use infrastructure::{JikanClient, TrackedAnimeRepositoryImpl};
