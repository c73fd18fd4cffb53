pub mod check_runner;
pub mod id_source;
pub mod ports;

pub use check_runner::{CheckRunner, END_BANNER, START_BANNER};
pub use id_source::{parse_identifiers, read_identifiers};
pub use ports::AnimeStatusSource;
