//! Shared helpers for the repository tests.

use holonet_db::DbPool;
use sqlx::any::AnyPoolOptions;
use sqlx::SqlitePool;

/// Open the database behind a `#[sqlx::test]` SQLite pool as an `Any` pool,
/// the pool type the repositories take.
pub fn any_pool(sqlite: &SqlitePool) -> DbPool {
    sqlx::any::install_default_drivers();
    let path = std::fs::canonicalize(sqlite.connect_options().get_filename())
        .expect("test database file should exist");
    AnyPoolOptions::new()
        .max_connections(5)
        .connect_lazy(&format!("sqlite://{}", path.display()))
        .expect("test database URL should parse")
}
