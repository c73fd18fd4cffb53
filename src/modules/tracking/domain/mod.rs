pub mod entities;
pub mod repository;
pub mod value_objects;

// Re-exports for easy access
pub use entities::{AnimeSnapshot, TrackedAnime};
pub use repository::TrackedAnimeRepository;
pub use value_objects::{AnimeId, CheckOutcome, CheckSummary};
