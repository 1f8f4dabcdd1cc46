pub mod campaign_crawl;
pub mod general_crawl;
pub mod runner;
pub mod scheduler;
pub mod worker_pool;

pub use campaign_crawl::CampaignCrawlSource;
pub use general_crawl::GeneralCrawlSource;
pub use runner::JobRunner;
pub use scheduler::{BatchScheduler, CycleSource};
pub use worker_pool::{BatchOutcome, WorkerPool};
