use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use tracing::{error, instrument};
use v6crawl_application::ports::MetricsRepository;
use v6crawl_domain::DomainError;

pub struct PgMetricsRepository {
    pool: PgPool,
}

impl PgMetricsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MetricsRepository for PgMetricsRepository {
    #[instrument(skip(self, payload))]
    async fn store_metric(&self, measurement: &str, payload: Value) -> Result<(), DomainError> {
        sqlx::query("INSERT INTO metric (ts, measurement, payload) VALUES (now(), $1, $2)")
            .bind(measurement)
            .bind(payload)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, measurement, "failed to store metric");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(())
    }

    #[instrument(skip(self, payload))]
    async fn store_campaign_domain_log(
        &self,
        campaign_domain_id: i64,
        payload: Value,
    ) -> Result<(), DomainError> {
        sqlx::query(
            "INSERT INTO campaign_domain_log (ts, campaign_domain_id, payload)
             VALUES (now(), $1, $2)",
        )
        .bind(campaign_domain_id)
        .bind(payload)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, campaign_domain_id, "failed to store campaign domain log");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }
}
