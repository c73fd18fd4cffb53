#![allow(dead_code)]

pub mod stubs;
pub mod test_db;

pub use stubs::{CountingThrottle, StubReply, StubSource};
pub use test_db::TestStore;
