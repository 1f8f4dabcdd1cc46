pub mod crawl_campaign_domain;
pub mod crawl_domain;

pub use crawl_campaign_domain::CrawlCampaignDomainUseCase;
pub use crawl_domain::CrawlDomainUseCase;
