use sea_orm::DatabaseConnection;

/// Shared application state handed to every handler via `web::Data`.
///
/// Holds the pool handle only; cloning shares the same pool.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database pool (absent in handler-only tests)
    db: Option<DatabaseConnection>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db: Some(db) }
    }

    /// State without a pool; every storage access reports `DbUnavailable`.
    pub fn without_db() -> Self {
        Self { db: None }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }

    /// Take the pool out, leaving the state without one.
    pub(crate) fn take_db(&mut self) -> Option<DatabaseConnection> {
        self.db.take()
    }
}
