// Shared kernel: configuration, errors, storage plumbing and utilities

pub mod config;
pub mod errors;
pub mod infrastructure;
pub mod utils;

// Re-exports for convenience
pub use config::TrackerConfig;
pub use infrastructure::database::Database;
