use std::{str::FromStr, sync::Arc, time::Duration};

use anyhow::Result;
use sqlx::{
    Pool, Sqlite,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

use crate::config::DatabaseConfig;

pub type DbPool = Pool<Sqlite>;
pub type DbPoolManager = Arc<DbPool>;

pub async fn create_pool(config: &DatabaseConfig) -> Result<DbPoolManager> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true);

    let mut pool_options = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(5))
        .test_before_acquire(true);

    // an in-memory database lives exactly as long as its connection does
    pool_options = if config.is_in_memory() {
        pool_options.max_lifetime(None).idle_timeout(None)
    } else {
        pool_options
            .max_lifetime(Duration::from_secs(30 * 60)) // 30 minutes
            .idle_timeout(Duration::from_secs(10 * 60)) // 10 minutes
    };

    let pool = pool_options.connect_with(options).await?;

    Ok(Arc::new(pool))
}

/// Creates the `clans` table and its indexes when they are missing.
/// Existing tables are left untouched, so this runs on every start.
///
/// `name_folded` holds the lowercased name so search can ignore case beyond
/// ascii. Column limits are checked, since sqlite ignores varchar lengths.
pub async fn ensure_schema(db: &DbPool) -> Result<()> {
    sqlx::query(
        "create table if not exists clans (
            id char(36) primary key not null,
            name varchar(255) not null check (length(name) <= 255),
            name_folded varchar(255) not null,
            region varchar(10) not null check (length(region) <= 10),
            created_at datetime not null
        )",
    )
    .execute(db)
    .await?;

    sqlx::query("create index if not exists idx_clans_name on clans (name)")
        .execute(db)
        .await?;

    sqlx::query("create index if not exists idx_clans_name_folded on clans (name_folded)")
        .execute(db)
        .await?;

    Ok(())
}

#[cfg(test)]
pub async fn create_memory_pool() -> Result<DbPoolManager> {
    let pool = create_pool(&DatabaseConfig::in_memory()).await?;
    ensure_schema(&pool).await?;

    Ok(pool)
}
