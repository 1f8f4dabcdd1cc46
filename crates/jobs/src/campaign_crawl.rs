use std::sync::Arc;

use async_trait::async_trait;
use v6crawl_application::ports::{CampaignDomainRepository, PageCursor};
use v6crawl_application::CrawlCampaignDomainUseCase;
use v6crawl_domain::{CampaignDomain, DomainError};

use crate::scheduler::CycleSource;

/// Drives one campaign's domain pool. Never disables a domain — that's the
/// general crawl's prerogative.
pub struct CampaignCrawlSource {
    campaign_repo: Arc<dyn CampaignDomainRepository>,
    use_case: Arc<CrawlCampaignDomainUseCase>,
}

impl CampaignCrawlSource {
    pub fn new(
        campaign_repo: Arc<dyn CampaignDomainRepository>,
        use_case: Arc<CrawlCampaignDomainUseCase>,
    ) -> Self {
        Self { campaign_repo, use_case }
    }
}

#[async_trait]
impl CycleSource for CampaignCrawlSource {
    type Item = CampaignDomain;

    async fn next_page(
        &self,
        cursor: PageCursor,
        limit: i64,
    ) -> Result<(Vec<CampaignDomain>, PageCursor), DomainError> {
        self.campaign_repo.next_page(cursor, limit).await
    }

    async fn process(&self, item: CampaignDomain) -> Result<(), DomainError> {
        self.use_case.execute(item).await
    }
}
