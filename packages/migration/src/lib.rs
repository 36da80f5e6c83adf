pub use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{DatabaseConnection, Statement};

mod m20250101_000001_todo_items; // keep filename + module name in sync

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250101_000001_todo_items::Migration)]
    }
}

/// Bring the schema up to date.
///
/// Idempotent: already-applied migrations are skipped and the table
/// migration itself is create-if-absent.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let before = count_applied_migrations(db).await?;
    let defined = Migrator::migrations().len();

    tracing::info!(
        backend = ?db.get_database_backend(),
        database = %database_name(db).await?,
        defined,
        applied = before,
        "schema=check"
    );

    if let Err(e) = Migrator::up(db, None).await {
        tracing::error!(error = %e, "schema=up failed");
        return Err(e);
    }

    let after = count_applied_migrations(db).await?;
    if after > before {
        tracing::info!(applied = after - before, "schema=up ok");
    } else {
        tracing::debug!("schema=up skipped up_to_date=true");
    }
    Ok(())
}

/// File path of the main SQLite database, `:memory:` for in-memory ones.
async fn database_name(db: &DatabaseConnection) -> Result<String, DbErr> {
    let stmt = Statement::from_string(
        db.get_database_backend(),
        String::from("SELECT file FROM pragma_database_list WHERE name = 'main'"),
    );
    let name = match db.query_one(stmt).await? {
        Some(row) => match row.try_get::<String>("", "file") {
            Ok(file) if file.is_empty() => ":memory:".to_string(),
            Ok(file) => file,
            Err(_) => "<unknown>".to_string(),
        },
        None => "<unknown>".to_string(),
    };
    Ok(name)
}

/// Count applied migrations; 0 when the bookkeeping table does not exist yet.
pub async fn count_applied_migrations(db: &DatabaseConnection) -> Result<usize, DbErr> {
    match Migrator::get_applied_migrations(db).await {
        Ok(migrations) => Ok(migrations.len()),
        Err(DbErr::Exec(_)) => Ok(0),
        Err(e) => Err(e),
    }
}

/// Name of the latest applied migration, if any.
pub async fn latest_migration_version(db: &DatabaseConnection) -> Result<Option<String>, DbErr> {
    match Migrator::get_applied_migrations(db).await {
        Ok(migrations) => Ok(migrations.last().map(|m| m.name().to_string())),
        Err(DbErr::Exec(_)) => Ok(None),
        Err(e) => Err(e),
    }
}
