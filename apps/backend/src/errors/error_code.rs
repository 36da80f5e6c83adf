//! Error codes for the todo API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! Every code is SCREAMING_SNAKE_CASE and appears verbatim in the
//! `code` field of problem details responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Malformed Requests
    /// Body or query string could not be parsed
    BadRequest,

    // Resource Not Found
    /// No to-do item with the requested title
    TodoNotFound,
    /// Generic not found (unmatched routes, DB-driven not found)
    NotFound,

    // Business Logic Conflicts
    /// Another to-do item already uses this title
    TodoTitleTaken,
    /// Generic conflict (fallback for unmatched unique violations)
    Conflict,

    // System Errors
    DbError,
    DbUnavailable,
    /// Database timeout (gateway timeout)
    DbTimeout,
    ConfigError,
    InternalError,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",

            Self::TodoNotFound => "TODO_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::TodoTitleTaken => "TODO_TITLE_TAKEN",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::ConfigError => "CONFIG_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
