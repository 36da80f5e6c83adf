//! To-do repository functions (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;
use tracing::debug;

use crate::adapters::todo_items_sea::{self as todos_adapter, TodoCreate, TodoUpdate};
use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind};
use crate::infra::db_errors::map_db_err;

/// To-do domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub title: String,
    pub done: bool,
}

/// Replace the generic unique-violation detail with one naming `title`.
fn with_title_conflict(err: DomainError, title: &str) -> DomainError {
    match err {
        DomainError::Conflict(ConflictKind::TodoTitleTaken, _) => {
            DomainError::todo_title_taken(title)
        }
        other => other,
    }
}

/// Collapse a unique violation into the generic storage fault.
fn as_storage_fault(err: DomainError) -> DomainError {
    match err {
        DomainError::Conflict(_, _) => DomainError::infra(
            InfraErrorKind::Other("DbErr".into()),
            "Database operation failed",
        ),
        other => other,
    }
}

pub async fn list_todos<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    done: Option<bool>,
) -> Result<Vec<Todo>, DomainError> {
    let rows = todos_adapter::list(conn, done).await.map_err(map_db_err)?;
    Ok(rows.into_iter().map(Todo::from).collect())
}

pub async fn find_by_title<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    title: &str,
) -> Result<Option<Todo>, DomainError> {
    let row = todos_adapter::find_by_title(conn, title)
        .await
        .map_err(map_db_err)?;
    Ok(row.map(Todo::from))
}

/// Exact-title lookup; zero rows is `NotFound` naming the title.
pub async fn require_by_title<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    title: &str,
) -> Result<Todo, DomainError> {
    find_by_title(conn, title)
        .await?
        .ok_or_else(|| DomainError::todo_not_found(title))
}

/// Insert a new item; a taken title is `Conflict` naming the title.
pub async fn create_todo<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    title: &str,
    done: bool,
) -> Result<Todo, DomainError> {
    let row = todos_adapter::create(conn, TodoCreate::new(title, done))
        .await
        .map_err(|e| with_title_conflict(map_db_err(e), title))?;
    debug!(done = row.done, "todo.created");
    Ok(Todo::from(row))
}

/// Overwrite both fields of the item currently titled `current_title`.
///
/// Missing item is `NotFound` (nothing is inserted). Renaming onto a title
/// held by another row is an unclassified storage fault.
pub async fn update_todo<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    current_title: &str,
    title: &str,
    done: bool,
) -> Result<Todo, DomainError> {
    require_by_title(conn, current_title).await?;

    let row = todos_adapter::update(conn, TodoUpdate::new(current_title, title, done))
        .await
        .map_err(|e| as_storage_fault(map_db_err(e)))?;
    debug!(renamed = current_title != title, done = row.done, "todo.updated");
    Ok(Todo::from(row))
}

impl From<crate::entities::todo_items::Model> for Todo {
    fn from(model: crate::entities::todo_items::Model) -> Self {
        Self {
            title: model.title,
            done: model.done,
        }
    }
}
