use sqlx::PgPool;
use tracing::{error, info};
use v6crawl_domain::config::DatabaseConfig;
use v6crawl_infrastructure::database::create_pool;

pub async fn init_database(cfg: &DatabaseConfig) -> anyhow::Result<PgPool> {
    info!("initializing database pool");

    let pool = create_pool(cfg).await.map_err(|e| {
        error!(error = %e, "failed to initialize database pool");
        anyhow::anyhow!(e)
    })?;

    info!(max_connections = cfg.pool_max_connections, "database pool ready, migrations applied");

    Ok(pool)
}
