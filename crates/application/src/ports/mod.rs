pub mod asn_repository;
pub mod campaign_repository;
pub mod changelog_repository;
pub mod country_repository;
pub mod dns_resolver;
pub mod domain_repository;
pub mod geo_enricher;
pub mod heartbeat;
pub mod metrics_repository;
pub mod notifier;

pub use asn_repository::AsnRepository;
pub use campaign_repository::CampaignDomainRepository;
pub use changelog_repository::ChangelogRepository;
pub use country_repository::CountryRepository;
pub use dns_resolver::{ClassifyResult, DnsResolver};
pub use domain_repository::{DomainRepository, PageCursor};
pub use geo_enricher::GeoEnricher;
pub use heartbeat::Heartbeat;
pub use metrics_repository::MetricsRepository;
pub use notifier::Notifier;
