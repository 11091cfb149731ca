//! Probex Store - SQLite persistence for probes
//!
//! Provides:
//! - Connection management (`db`)
//! - Embedded, checksummed schema migrations
//! - `SqliteProbeStore`, the durable implementation of `ProbeStore`

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use errors::Result;
pub use repo::SqliteProbeStore;
