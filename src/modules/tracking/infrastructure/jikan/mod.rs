pub mod client;
pub mod dto;

pub use client::JikanClient;
pub use dto::{JikanAnimeData, JikanAnimeResponse};
