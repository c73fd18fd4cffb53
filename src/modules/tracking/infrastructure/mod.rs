pub mod jikan;
pub mod models;
pub mod repository;

pub use jikan::JikanClient;
pub use repository::TrackedAnimeRepositoryImpl;
