//! Persistence for users, characters, planets and favorites.
//!
//! The pool is an `Any` pool so `DATABASE_URL` picks the backend at runtime:
//! SQLite (`sqlite:`) or PostgreSQL (`postgres://` / `postgresql://`).
//! Repositories are zero-sized structs whose deletes take any executor, so
//! the same call works against the pool or inside a transaction.

use sqlx::any::AnyPoolOptions;
use sqlx::migrate::{MigrateError, Migrator};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::AnyPool;

static SQLITE_MIGRATOR: Migrator = sqlx::migrate!("./migrations/sqlite");
static POSTGRES_MIGRATOR: Migrator = sqlx::migrate!("./migrations/postgres");

/// The store behind a database URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Sqlite,
    Postgres,
}

impl Backend {
    /// Detect the backend from a URL scheme. `None` for anything unsupported.
    pub fn from_url(url: &str) -> Option<Self> {
        if url.starts_with("sqlite:") {
            Some(Self::Sqlite)
        } else if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Some(Self::Postgres)
        } else {
            None
        }
    }

    /// The backend a pool was created for.
    pub fn of_pool(pool: &DbPool) -> Option<Self> {
        Self::from_url(pool.connect_options().database_url.as_str())
    }
}

/// Rewrite the legacy `postgres://` scheme to `postgresql://`.
pub fn normalize_database_url(url: &str) -> String {
    match url.strip_prefix("postgres://") {
        Some(rest) => format!("postgresql://{rest}"),
        None => url.to_string(),
    }
}

/// Create a connection pool from a database URL.
///
/// A SQLite database file is created when it does not exist yet. In-memory
/// SQLite databases get a single connection, since each connection would
/// otherwise see its own empty database.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    sqlx::any::install_default_drivers();

    let url = normalize_database_url(database_url);
    let (url, max_connections) = match Backend::from_url(&url) {
        Some(Backend::Postgres) => (url, 20),
        Some(Backend::Sqlite) if is_sqlite_memory(&url) => (url, 1),
        Some(Backend::Sqlite) => (sqlite_create_if_missing(url), 5),
        None => {
            return Err(sqlx::Error::Configuration(
                format!("unsupported database URL scheme: {database_url}").into(),
            ))
        }
    };

    AnyPoolOptions::new()
        .max_connections(max_connections)
        .connect(&url)
        .await
}

/// Round-trip a trivial query to prove the store is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations for the pool's backend.
pub async fn run_migrations(pool: &DbPool) -> Result<(), MigrateError> {
    match Backend::of_pool(pool) {
        Some(Backend::Sqlite) => SQLITE_MIGRATOR.run(pool).await,
        Some(Backend::Postgres) => POSTGRES_MIGRATOR.run(pool).await,
        None => Err(MigrateError::Execute(sqlx::Error::Configuration(
            "pool was not created for a supported backend".into(),
        ))),
    }
}

fn is_sqlite_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// Ask the SQLite driver to create the file unless the URL already picks a mode.
fn sqlite_create_if_missing(url: String) -> String {
    if url.contains("mode=") {
        url
    } else if url.contains('?') {
        format!("{url}&mode=rwc")
    } else {
        format!("{url}?mode=rwc")
    }
}
