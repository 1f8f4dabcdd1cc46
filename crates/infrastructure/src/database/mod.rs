use std::path::Path;
use std::time::Duration;

use sqlx::migrate::Migrator;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use v6crawl_domain::config::DatabaseConfig;

/// Creates the Postgres pool and runs pending migrations, the one place
/// this crate talks to the database before any repository is handed a
/// connection.
pub async fn create_pool(cfg: &DatabaseConfig) -> Result<sqlx::PgPool, sqlx::Error> {
    let options: PgConnectOptions = cfg.url.parse::<PgConnectOptions>()?.ssl_mode(PgSslMode::Prefer);

    let pool = PgPoolOptions::new()
        .max_connections(cfg.pool_max_connections)
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .connect_with(options)
        .await?;

    let migrator = Migrator::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("migrations")).await?;
    migrator.run(&pool).await?;

    Ok(pool)
}
