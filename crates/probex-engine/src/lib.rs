//! Probex Engine - Orchestration layer
//!
//! Coordinates the probe kernel with the SQLite store and owns operation
//! lifecycle logging and request correlation.

pub mod commands;

pub use commands::engine_command::{apply_engine_command, EngineCommand, EngineCommandResult};
