use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::status::Status;

/// An append-only changelog row produced by the transition detector for one
/// changed measurement. Never updated after insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangelogEntry {
    pub id: i64,
    pub ts: DateTime<Utc>,
    pub domain_id: i64,
    pub campaign_id: Option<Uuid>,
    pub message: String,
    pub new_status: Status,
}

/// A changelog row not yet assigned an id or timestamp — what the
/// transition detector returns; the repository stamps both on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogDraft {
    pub domain_id: i64,
    pub campaign_id: Option<Uuid>,
    pub message: String,
    pub new_status: Status,
}
