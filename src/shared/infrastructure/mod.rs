/// Shared infrastructure concerns
pub mod database;

// Re-exports for convenience
pub use database::Database;
