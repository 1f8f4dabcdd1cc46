use async_trait::async_trait;
use serde_json::Value;
use v6crawl_domain::DomainError;

/// Append-only metric and campaign-observation sinks.
#[async_trait]
pub trait MetricsRepository: Send + Sync {
    /// `measurement` is one of `crawler`, `crawler_campaign`, `domains`.
    async fn store_metric(&self, measurement: &str, payload: Value) -> Result<(), DomainError>;

    /// Snapshot of the four new statuses for one campaign-domain
    /// observation, written unconditionally after every campaign job.
    async fn store_campaign_domain_log(
        &self,
        campaign_domain_id: i64,
        payload: Value,
    ) -> Result<(), DomainError>;
}
