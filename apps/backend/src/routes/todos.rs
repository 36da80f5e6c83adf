use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::ValidatedJson;
use crate::repos::todos::{self, Todo};
use crate::state::app_state::AppState;

/// Wire shape of a to-do item, both in requests and responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub title: String,
    pub done: bool,
}

impl From<Todo> for TodoItem {
    fn from(todo: Todo) -> Self {
        Self {
            title: todo.title,
            done: todo.done,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub done: Option<bool>,
}

/// GET /
///
/// All items, or only those whose `done` matches `?done=`.
async fn list_todos(
    query: web::Query<ListQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let filter = query.into_inner().done;

    let items: Vec<TodoItem> = todos::list_todos(db, filter)
        .await?
        .into_iter()
        .map(TodoItem::from)
        .collect();

    info!(filter = ?filter, count = items.len(), "todo.listed");
    Ok(HttpResponse::Ok().json(items))
}

/// POST /
async fn add_item(
    body: ValidatedJson<TodoItem>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let TodoItem { title, done } = body.into_inner();

    let created = with_txn(&app_state, move |txn| {
        Box::pin(async move { Ok(todos::create_todo(txn, &title, done).await?) })
    })
    .await?;

    Ok(HttpResponse::Created().json(TodoItem::from(created)))
}

/// PUT /{title}
///
/// Overwrites both fields of an existing item; never inserts.
async fn update_item(
    path: web::Path<String>,
    body: ValidatedJson<TodoItem>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let current_title = path.into_inner();
    let TodoItem { title, done } = body.into_inner();

    let updated = with_txn(&app_state, move |txn| {
        Box::pin(async move { Ok(todos::update_todo(txn, &current_title, &title, done).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(TodoItem::from(updated)))
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        AppError::bad_request(ErrorCode::BadRequest, format!("Invalid query string: {err}")).into()
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .app_data(query_config())
            .route(web::get().to(list_todos))
            .route(web::post().to(add_item)),
    )
    .service(web::resource("/{title}").route(web::put().to(update_item)));
}
