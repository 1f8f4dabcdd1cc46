use std::net::{SocketAddr, ToSocketAddrs};
use std::sync::Arc;
use std::time::Duration;

use sqlx::PgPool;
use v6crawl_application::ports::{
    AsnRepository, CampaignDomainRepository, ChangelogRepository, CountryRepository, DnsResolver,
    DomainRepository, GeoEnricher, Heartbeat, MetricsRepository, Notifier,
};
use v6crawl_application::{CrawlCampaignDomainUseCase, CrawlDomainUseCase};
use v6crawl_domain::config::Config;
use v6crawl_infrastructure::dns::HickoryDnsResolver;
use v6crawl_infrastructure::geoip::MaxmindGeoEnricher;
use v6crawl_infrastructure::observers::{HttpHeartbeat, WebhookNotifier};
use v6crawl_infrastructure::repositories::{
    PgAsnRepository, PgCampaignDomainRepository, PgChangelogRepository, PgCountryRepository,
    PgDomainRepository, PgMetricsRepository,
};
use v6crawl_jobs::{BatchScheduler, CampaignCrawlSource, GeneralCrawlSource};

/// Everything `main` needs to hand off to a `JobRunner`, wired once at
/// startup: concrete adapters assembled behind port trait objects.
pub struct Runtime {
    pub general_scheduler: BatchScheduler<GeneralCrawlSource>,
    pub campaign_scheduler: BatchScheduler<CampaignCrawlSource>,
    /// Kept alongside `general_scheduler` (which owns its own clone via
    /// `GeneralCrawlSource`) so `main` can run the one-time `ts_check`
    /// spread before starting the general crawl loop.
    pub domain_repo: Arc<dyn DomainRepository>,
}

pub fn build(pool: PgPool, config: &Config) -> anyhow::Result<Runtime> {
    let nameservers = resolve_nameservers(&config.resolver.nameservers)?;
    let resolver: Arc<dyn DnsResolver> = Arc::new(HickoryDnsResolver::new(
        nameservers,
        Duration::from_secs(config.resolver.query_timeout_secs),
    ));

    let domain_repo: Arc<dyn DomainRepository> = Arc::new(PgDomainRepository::new(pool.clone()));
    let campaign_repo: Arc<dyn CampaignDomainRepository> =
        Arc::new(PgCampaignDomainRepository::new(pool.clone()));
    let changelog_repo: Arc<dyn ChangelogRepository> =
        Arc::new(PgChangelogRepository::new(pool.clone()));
    let asn_repo: Arc<dyn AsnRepository> = Arc::new(PgAsnRepository::new(pool.clone()));
    let country_repo: Arc<dyn CountryRepository> = Arc::new(PgCountryRepository::new(pool.clone()));
    let metrics_repo: Arc<dyn MetricsRepository> = Arc::new(PgMetricsRepository::new(pool.clone()));

    let enricher: Arc<dyn GeoEnricher> = Arc::new(MaxmindGeoEnricher::open(
        &config.geoip.dir,
        Arc::clone(&resolver),
        Arc::clone(&asn_repo),
        Arc::clone(&country_repo),
    )?);

    let http_client = reqwest::Client::new();
    let notifier: Arc<dyn Notifier> =
        Arc::new(WebhookNotifier::new(http_client, config.notifier.clone()));
    let heartbeat: Arc<dyn Heartbeat> = Arc::new(HttpHeartbeat::new()?);

    let crawl_use_case = Arc::new(CrawlDomainUseCase::new(
        Arc::clone(&resolver),
        Arc::clone(&enricher),
        Arc::clone(&domain_repo),
        Arc::clone(&changelog_repo),
        config.general.disable_on_nxdomain,
    ));
    let campaign_use_case = Arc::new(CrawlCampaignDomainUseCase::new(
        Arc::clone(&resolver),
        Arc::clone(&enricher),
        Arc::clone(&campaign_repo),
        Arc::clone(&changelog_repo),
        Arc::clone(&metrics_repo),
    ));

    let general_source = Arc::new(GeneralCrawlSource::new(Arc::clone(&domain_repo), crawl_use_case));
    let campaign_source = Arc::new(CampaignCrawlSource::new(campaign_repo, campaign_use_case));

    let general_heartbeat = config
        .healthcheck
        .crawler_uuid
        .clone()
        .map(|uuid| (Arc::clone(&heartbeat), uuid));
    let campaign_heartbeat = config
        .healthcheck
        .campaign_uuid
        .clone()
        .map(|uuid| (Arc::clone(&heartbeat), uuid));

    let general_scheduler = BatchScheduler::new(
        general_source,
        Arc::clone(&metrics_repo),
        Arc::clone(&notifier),
        general_heartbeat,
        "crawler",
        "general",
        config.general.page_size,
        config.general.workers,
        config.general.interval_secs,
        config.general.batch_timeout_secs,
    );

    let campaign_scheduler = BatchScheduler::new(
        campaign_source,
        metrics_repo,
        notifier,
        campaign_heartbeat,
        "crawler_campaign",
        "campaign",
        config.campaign.page_size,
        config.campaign.workers,
        config.campaign.interval_secs,
        config.campaign.batch_timeout_secs,
    );

    Ok(Runtime { general_scheduler, campaign_scheduler, domain_repo })
}

/// Resolves each configured `host:port` nameserver entry, bracketed-IPv6
/// literals included, to a concrete socket address via the stdlib resolver.
fn resolve_nameservers(entries: &[String]) -> anyhow::Result<Vec<SocketAddr>> {
    let mut out = Vec::with_capacity(entries.len());
    for entry in entries {
        let addr = entry
            .to_socket_addrs()
            .map_err(|e| anyhow::anyhow!("invalid nameserver address '{entry}': {e}"))?
            .next()
            .ok_or_else(|| anyhow::anyhow!("nameserver '{entry}' resolved to no addresses"))?;
        out.push(addr);
    }
    Ok(out)
}
