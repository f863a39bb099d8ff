use std::str::FromStr;
#[cfg(test)]
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

pub mod event_repo;
pub mod member_repo;
pub mod participation_repo;
pub mod photo_repo;
pub mod schema;

/// Opens the pool (creating the database file when missing) and makes sure
/// the schema exists.
pub async fn connect(db_url: &str, max_connections: u32) -> sqlx::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(db_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .connect_with(options)
        .await?;

    schema::ensure_schema(&pool).await?;
    Ok(pool)
}

// In-memory databases live per connection, so the test pool keeps exactly one.
#[cfg(test)]
pub(crate) async fn memory_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("memory url")
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect_with(options)
        .await
        .expect("open memory pool");
    schema::ensure_schema(&pool).await.expect("schema");
    pool
}
