use std::sync::Arc;

use async_trait::async_trait;
use v6crawl_application::ports::{DomainRepository, PageCursor};
use v6crawl_application::CrawlDomainUseCase;
use v6crawl_domain::{Domain, DomainError, DomainStats};

use crate::scheduler::CycleSource;

/// Drives the general domain pool: fetches due domains and runs each
/// through `CrawlDomainUseCase`, which owns the disable-on-NXDOMAIN policy.
pub struct GeneralCrawlSource {
    domain_repo: Arc<dyn DomainRepository>,
    use_case: Arc<CrawlDomainUseCase>,
}

impl GeneralCrawlSource {
    pub fn new(domain_repo: Arc<dyn DomainRepository>, use_case: Arc<CrawlDomainUseCase>) -> Self {
        Self { domain_repo, use_case }
    }
}

#[async_trait]
impl CycleSource for GeneralCrawlSource {
    type Item = Domain;

    async fn next_page(
        &self,
        cursor: PageCursor,
        limit: i64,
    ) -> Result<(Vec<Domain>, PageCursor), DomainError> {
        self.domain_repo.next_page(cursor, limit).await
    }

    async fn process(&self, item: Domain) -> Result<(), DomainError> {
        self.use_case.execute(item).await
    }

    async fn domain_stats(&self) -> Option<Result<DomainStats, DomainError>> {
        Some(self.domain_repo.stats().await)
    }
}
