use async_trait::async_trait;
use v6crawl_domain::{ChangelogDraft, DomainError};

/// Append-only changelog writes. General and campaign drafts share the
/// same `ChangelogDraft` shape; the presence of `campaign_id` routes the
/// write to the campaign-partitioned table.
#[async_trait]
pub trait ChangelogRepository: Send + Sync {
    async fn insert(&self, draft: &ChangelogDraft) -> Result<(), DomainError>;
}
