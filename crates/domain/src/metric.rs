use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An append-only metric sample. `measurement` is one of `crawler`,
/// `crawler_campaign`, or `domains`; `payload` is an arbitrary
/// JSON blob, stored as-is for the out-of-scope statistics dashboards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricSample {
    pub measurement: String,
    pub ts: DateTime<Utc>,
    pub payload: Value,
}

/// Summary written at the end of every crawl cycle (general or campaign).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CycleSummary {
    pub duration_seconds: f64,
    pub total: u64,
    pub success: u64,
    pub failed: u64,
}

/// Aggregate snapshot over the whole general domain pool, written under the
/// `domains` measurement once per general cycle. `top_1k`/`top_ns` restrict
/// the same counts to domains with `rank < 1000`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DomainStats {
    pub total_sites: i64,
    pub total_aaaa: i64,
    pub total_www: i64,
    pub total_both: i64,
    pub total_ns: i64,
    pub top_1k: i64,
    pub top_ns: i64,
}
