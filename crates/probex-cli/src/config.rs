//! Runtime settings
//!
//! Values come from flags, then `PROBEX_*` environment variables (a `.env`
//! file in the working directory is loaded first), then defaults.

use std::path::PathBuf;

use clap::ValueEnum;
use probex_core::logging_facility::{self, Profile};
use probex_store::errors::Result;
use rusqlite::Connection;

pub const DEFAULT_DB_PATH: &str = ".probex/probes.db";

/// Where log output goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogMode {
    /// Human-readable logs on stderr
    Development,
    /// JSON logs on stderr
    Production,
    /// No log output
    Quiet,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub db_path: PathBuf,
    pub log: LogMode,
}

impl Settings {
    pub fn new(db_path: PathBuf, log: LogMode) -> Self {
        Self { db_path, log }
    }

    pub fn init_logging(&self) {
        match self.log {
            LogMode::Development => logging_facility::init(Profile::Development),
            LogMode::Production => logging_facility::init(Profile::Production),
            LogMode::Quiet => {}
        }
    }

    /// Open the database, creating it and its directory on first use
    pub fn open_db(&self) -> Result<Connection> {
        probex_store::db::open_and_migrate(&self.db_path)
    }
}
