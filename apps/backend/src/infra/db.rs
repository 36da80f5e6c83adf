use std::str::FromStr;

use sea_orm::{DatabaseConnection, SqlxSqliteConnector};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{info, trace};

use crate::config::db::{connection_settings, db_url, session_statements, ConnectionSettings, DbProfile};
use crate::error::AppError;

/// Apply per-connection PRAGMAs.
async fn apply_sqlite_config(
    conn: &mut sqlx::SqliteConnection,
    settings: &ConnectionSettings,
) -> Result<(), sqlx::Error> {
    for stmt in session_statements(settings) {
        sqlx::query(&stmt).execute(&mut *conn).await?;
    }
    Ok(())
}

/// Build the SQLite pool for `profile` and hand it to SeaORM.
///
/// Does not touch the schema; see [`bootstrap_db`].
pub async fn build_pool(profile: &DbProfile) -> Result<DatabaseConnection, AppError> {
    let url = db_url(profile);
    let settings = connection_settings(profile);

    let connect_opts = SqliteConnectOptions::from_str(&url)
        .map_err(|e| AppError::config(format!("invalid SQLite connection options: {e}")))?
        .create_if_missing(true);

    let hook_settings = settings.clone();
    let mut pool_opts = SqlitePoolOptions::new()
        .min_connections(settings.pool_min)
        .max_connections(settings.pool_max)
        .acquire_timeout(settings.acquire_timeout)
        .after_connect(move |conn, _meta| {
            let settings = hook_settings.clone();
            Box::pin(async move {
                apply_sqlite_config(conn, &settings).await?;
                trace!("db=sqlite hook=after_connect ok");
                Ok::<_, sqlx::Error>(())
            })
        });

    if profile.is_memory() {
        // The single connection *is* the database; never recycle it.
        pool_opts = pool_opts.idle_timeout(None).max_lifetime(None);
    }

    let pool: SqlitePool = pool_opts
        .connect_with(connect_opts)
        .await
        .map_err(|e| AppError::config(format!("failed to create SQLite connection pool: {e}")))?;

    info!(
        "pool=create engine=sqlite path={} min={} max={} acquire_timeout_ms={}",
        url,
        settings.pool_min,
        settings.pool_max,
        settings.acquire_timeout.as_millis()
    );

    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
}

/// Build the pool and make sure `todo_items` exists.
pub async fn bootstrap_db(profile: &DbProfile) -> Result<DatabaseConnection, AppError> {
    let db = build_pool(profile).await?;
    migration::ensure_schema(&db).await?;

    let version = migration::latest_migration_version(&db).await?;
    info!(
        profile = ?profile,
        schema_version = version.as_deref().unwrap_or("none"),
        "db=ready"
    );
    Ok(db)
}
