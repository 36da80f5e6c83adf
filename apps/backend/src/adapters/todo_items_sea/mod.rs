//! SeaORM adapter for the todo_items table - generic over ConnectionTrait.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::entities::todo_items;

pub mod dto;

pub use dto::{TodoCreate, TodoUpdate};

// Adapter functions return DbErr; the repos layer maps to DomainError.

pub async fn find_by_title<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    title: &str,
) -> Result<Option<todo_items::Model>, sea_orm::DbErr> {
    todo_items::Entity::find_by_id(title.to_string())
        .one(conn)
        .await
}

/// All items, optionally only those whose `done` equals the filter.
pub async fn list<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    done: Option<bool>,
) -> Result<Vec<todo_items::Model>, sea_orm::DbErr> {
    let mut query = todo_items::Entity::find();
    if let Some(done) = done {
        query = query.filter(todo_items::Column::Done.eq(done));
    }
    query
        .order_by_asc(todo_items::Column::Title)
        .all(conn)
        .await
}

/// Insert a new row. A duplicate title surfaces as the driver's unique
/// constraint error.
pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: TodoCreate,
) -> Result<todo_items::Model, sea_orm::DbErr> {
    let active = todo_items::ActiveModel {
        title: Set(dto.title),
        done: Set(dto.done),
    };
    active.insert(conn).await
}

/// Overwrite title and done of the row at `dto.current_title`, then refetch
/// it under its new title.
///
/// The title is the primary key, so this goes through `update_many` with an
/// explicit filter on the old key rather than `ActiveModel::update`, which
/// would filter on the new one.
pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: TodoUpdate,
) -> Result<todo_items::Model, sea_orm::DbErr> {
    let result = todo_items::Entity::update_many()
        .col_expr(todo_items::Column::Title, Expr::value(dto.title.clone()))
        .col_expr(todo_items::Column::Done, Expr::value(dto.done))
        .filter(todo_items::Column::Title.eq(dto.current_title.as_str()))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return Err(sea_orm::DbErr::RecordNotFound(format!(
            "TODO_NOT_FOUND:{}",
            dto.current_title
        )));
    }

    find_by_title(conn, &dto.title)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound(format!("TODO_NOT_FOUND:{}", dto.title)))
}
