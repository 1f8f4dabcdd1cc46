use std::sync::Arc;

use tracing::info;

use crate::campaign_crawl::CampaignCrawlSource;
use crate::general_crawl::GeneralCrawlSource;
use crate::scheduler::BatchScheduler;

/// Central orchestrator for both crawl flavors.
///
/// Use the builder pattern to register schedulers, then call `.start()`
/// once.
///
/// ```rust,ignore
/// JobRunner::new()
///     .with_general_crawl(general_scheduler)
///     .with_campaign_crawl(campaign_scheduler)
///     .start()
///     .await;
/// ```
pub struct JobRunner {
    general: Option<Arc<BatchScheduler<GeneralCrawlSource>>>,
    campaign: Option<Arc<BatchScheduler<CampaignCrawlSource>>>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self { general: None, campaign: None }
    }

    pub fn with_general_crawl(mut self, scheduler: BatchScheduler<GeneralCrawlSource>) -> Self {
        self.general = Some(Arc::new(scheduler));
        self
    }

    pub fn with_campaign_crawl(mut self, scheduler: BatchScheduler<CampaignCrawlSource>) -> Self {
        self.campaign = Some(Arc::new(scheduler));
        self
    }

    /// Start all registered crawl schedulers.
    pub async fn start(self) {
        info!("Starting background job runner");

        if let Some(job) = self.general {
            job.start().await;
        }

        if let Some(job) = self.campaign {
            job.start().await;
        }

        info!("All background jobs started");
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
