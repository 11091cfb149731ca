//! Repository layer bridging the probe model to SQLite

mod rows;
mod sqlite_repo;

pub use sqlite_repo::SqliteProbeStore;
