use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: i64,
    pub uuid: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Append-only per-observation snapshot keyed by campaign-domain id,
/// written after every campaign crawl job regardless of whether any
/// measurement changed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignDomainLog {
    pub campaign_domain_id: i64,
    pub ts: DateTime<Utc>,
    pub payload: Value,
}
