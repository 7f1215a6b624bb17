use futures_util::future::BoxFuture;
use log::{debug, info, warn};
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, DatabaseTransaction, DbErr,
    Statement, TransactionError, TransactionTrait,
};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;

use crate::config::AppConfig;

pub async fn connect_db(config: &AppConfig) -> Result<DatabaseConnection, DbErr> {
    let url = config.database_url();
    if let Err(e) = ensure_sqlite_path(&url) {
        warn!("cannot prepare sqlite file for {}: {}", url, e);
    }

    let mut options = ConnectOptions::new(url);
    options
        .max_connections(config.max_connections)
        .min_connections(1)
        .sqlx_logging(config.sql_logging);
    let db = Database::connect(options).await?;
    init_schema(&db).await?;
    Ok(db)
}

/// Runs `f` inside one transaction: commit on `Ok`, rollback on any `Err`.
/// Store errors come back unchanged, whether raised by `f` or by commit.
pub async fn in_transaction<T, F>(db: &DatabaseConnection, f: F) -> Result<T, DbErr>
where
    F: for<'c> FnOnce(&'c DatabaseTransaction) -> BoxFuture<'c, Result<T, DbErr>> + Send,
    T: Send,
{
    db.transaction::<F, T, DbErr>(f).await.map_err(map_tx_error)
}

fn map_tx_error(err: TransactionError<DbErr>) -> DbErr {
    match err {
        TransactionError::Connection(e) => e,
        TransactionError::Transaction(e) => e,
    }
}

/// Creates the SQLite file and its directory. Other URLs are left alone.
fn ensure_sqlite_path(url: &str) -> io::Result<()> {
    let Some(path) = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))
    else {
        return Ok(());
    };
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() || path.contains(":memory:") {
        return Ok(());
    }
    let path = Path::new(path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)?;
    Ok(())
}

async fn init_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let sql = match backend {
        DatabaseBackend::Sqlite => include_str!("../schema-sqlite.sql"),
        DatabaseBackend::MySql => include_str!("../schema-mysql.sql"),
        DatabaseBackend::Postgres => {
            return Err(DbErr::Custom("postgres is not supported".to_string()));
        }
    };
    for stmt in split_sql(sql) {
        debug!("schema: {}", stmt);
        db.execute(Statement::from_string(backend, stmt)).await?;
    }
    info!("schema ready ({:?})", backend);
    Ok(())
}

fn split_sql(input: &str) -> Vec<String> {
    let mut buf = String::new();
    for line in input.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("--") || trimmed.is_empty() {
            continue;
        }
        buf.push_str(line);
        buf.push('\n');
    }
    buf.split(';')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
pub async fn memory_db() -> DatabaseConnection {
    let config = AppConfig {
        database_url: Some("sqlite::memory:".to_string()),
        max_connections: 1,
        ..AppConfig::default()
    };
    connect_db(&config).await.expect("in-memory sqlite")
}
