pub mod ports;
pub mod services;
pub mod use_cases;

pub use services::TransitionDetectorService;
pub use use_cases::{CrawlCampaignDomainUseCase, CrawlDomainUseCase};
