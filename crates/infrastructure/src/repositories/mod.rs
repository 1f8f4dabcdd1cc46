pub mod asn_repository;
pub mod campaign_repository;
pub mod changelog_repository;
pub mod country_repository;
pub mod domain_repository;
pub mod metrics_repository;

pub use asn_repository::PgAsnRepository;
pub use campaign_repository::PgCampaignDomainRepository;
pub use changelog_repository::PgChangelogRepository;
pub use country_repository::PgCountryRepository;
pub use domain_repository::PgDomainRepository;
pub use metrics_repository::PgMetricsRepository;
