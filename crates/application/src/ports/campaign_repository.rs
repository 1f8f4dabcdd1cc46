use async_trait::async_trait;
use v6crawl_domain::{CampaignDomain, DomainError};

use crate::ports::domain_repository::PageCursor;

/// Persistence contract for the campaign-scoped domain pools. The campaign
/// crawler never disables a domain, so there's no `disable` here.
#[async_trait]
pub trait CampaignDomainRepository: Send + Sync {
    async fn next_page(
        &self,
        cursor: PageCursor,
        limit: i64,
    ) -> Result<(Vec<CampaignDomain>, PageCursor), DomainError>;

    async fn update(&self, domain: &CampaignDomain) -> Result<(), DomainError>;

    async fn ping(&self) -> Result<(), DomainError>;
}
