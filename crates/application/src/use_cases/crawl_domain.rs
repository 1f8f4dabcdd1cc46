use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument, warn};
use v6crawl_domain::{
    is_terminal, Domain, DomainError, NewMeasurements, Status, RCODE_OK, UNKNOWN_ASN_ID,
    UNKNOWN_COUNTRY_ID,
};

use crate::ports::{ChangelogRepository, DnsResolver, DomainRepository, GeoEnricher};
use crate::services::transition_detector::TransitionDetectorService;

/// The per-job pipeline for one general-pool domain:
/// validate → classify → enrich (or pin Unknown) → detect transitions →
/// persist. Any step failing surfaces as a job failure with the site as
/// context; nothing here retries within a cycle.
pub struct CrawlDomainUseCase {
    resolver: Arc<dyn DnsResolver>,
    enricher: Arc<dyn GeoEnricher>,
    domain_repo: Arc<dyn DomainRepository>,
    changelog_repo: Arc<dyn ChangelogRepository>,
    disable_on_nxdomain: bool,
}

impl CrawlDomainUseCase {
    pub fn new(
        resolver: Arc<dyn DnsResolver>,
        enricher: Arc<dyn GeoEnricher>,
        domain_repo: Arc<dyn DomainRepository>,
        changelog_repo: Arc<dyn ChangelogRepository>,
        disable_on_nxdomain: bool,
    ) -> Self {
        Self {
            resolver,
            enricher,
            domain_repo,
            changelog_repo,
            disable_on_nxdomain,
        }
    }

    #[instrument(skip(self, domain), fields(site = %domain.site))]
    pub async fn execute(&self, mut domain: Domain) -> Result<(), DomainError> {
        let rcode = self.resolver.validate(&domain.site).await?;
        if rcode != RCODE_OK {
            if self.disable_on_nxdomain && is_terminal(rcode) {
                self.domain_repo.disable(&domain.site).await?;
                info!(rcode, "domain disabled after terminal validate rcode");
            }
            return Err(DomainError::InvalidDomainName(format!(
                "validate failed for {} (rcode {})",
                domain.site, rcode
            )));
        }

        let classify = self.resolver.classify(&domain.site).await?;

        let (asn_id, country_id) =
            if classify.base != Status::NoRecord || classify.www != Status::NoRecord {
                (
                    self.enricher.resolve_network(&domain.site).await,
                    self.enricher.resolve_country(&domain.site).await,
                )
            } else {
                (UNKNOWN_ASN_ID, UNKNOWN_COUNTRY_ID)
            };

        let new = NewMeasurements {
            base: classify.base,
            www: classify.www,
            ns: classify.ns,
            mx: classify.mx,
            asn_id,
            country_id,
        };

        let now = Utc::now();
        let drafts = TransitionDetectorService::apply(&mut domain, new, now)?;

        self.domain_repo.update(&domain).await?;
        for draft in &drafts {
            if let Err(e) = self.changelog_repo.insert(draft).await {
                warn!(error = %e, message = %draft.message, "failed to write changelog entry");
            }
        }

        Ok(())
    }
}
