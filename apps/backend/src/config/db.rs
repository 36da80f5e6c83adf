use std::path::PathBuf;
use std::time::Duration;

/// Fixed location of the production store, relative to the working directory.
pub const TODO_DB_URL: &str = "sqlite://todo.sqlite";

/// Which SQLite database to open.
#[derive(Debug, Clone, PartialEq)]
pub enum DbProfile {
    /// `todo.sqlite` in the working directory
    Prod,
    /// A file at an explicit path (tests, tooling)
    File(PathBuf),
    /// Private in-memory database, gone when the pool closes
    Memory,
}

impl DbProfile {
    pub fn is_memory(&self) -> bool {
        matches!(self, DbProfile::Memory)
    }
}

/// Connection string for a profile.
pub fn db_url(profile: &DbProfile) -> String {
    match profile {
        DbProfile::Prod => TODO_DB_URL.to_string(),
        DbProfile::File(path) => format!("sqlite://{}", path.display()),
        DbProfile::Memory => "sqlite::memory:".to_string(),
    }
}

/// Pool sizing and per-connection SQLite settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionSettings {
    pub pool_min: u32,
    pub pool_max: u32,
    pub acquire_timeout: Duration,
    pub busy_timeout_ms: u64,
}

/// Settings for a profile.
///
/// Every `sqlite::memory:` connection is a separate database, so the memory
/// profile is pinned to one connection.
pub fn connection_settings(profile: &DbProfile) -> ConnectionSettings {
    match profile {
        DbProfile::Memory => ConnectionSettings {
            pool_min: 1,
            pool_max: 1,
            acquire_timeout: Duration::from_secs(5),
            busy_timeout_ms: 0,
        },
        DbProfile::Prod | DbProfile::File(_) => ConnectionSettings {
            pool_min: 1,
            pool_max: 5,
            acquire_timeout: Duration::from_secs(5),
            busy_timeout_ms: 5_000,
        },
    }
}

/// Statements run on every new pooled connection.
pub fn session_statements(settings: &ConnectionSettings) -> Vec<String> {
    vec![
        "PRAGMA foreign_keys = ON;".to_string(),
        format!("PRAGMA busy_timeout = {};", settings.busy_timeout_ms),
    ]
}
