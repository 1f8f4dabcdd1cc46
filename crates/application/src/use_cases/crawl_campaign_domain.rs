use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use tracing::{instrument, warn};
use v6crawl_domain::{
    CampaignDomain, DomainError, NewMeasurements, Status, RCODE_OK, UNKNOWN_ASN_ID,
    UNKNOWN_COUNTRY_ID,
};

use crate::ports::{CampaignDomainRepository, ChangelogRepository, DnsResolver, GeoEnricher, MetricsRepository};
use crate::services::transition_detector::TransitionDetectorService;

/// The campaign-flavor counterpart to `CrawlDomainUseCase`. Differs only
/// in source type, changelog target (carries `campaign_id`), the absence
/// of a disable path, and an unconditional per-observation log write.
pub struct CrawlCampaignDomainUseCase {
    resolver: Arc<dyn DnsResolver>,
    enricher: Arc<dyn GeoEnricher>,
    campaign_repo: Arc<dyn CampaignDomainRepository>,
    changelog_repo: Arc<dyn ChangelogRepository>,
    metrics_repo: Arc<dyn MetricsRepository>,
}

impl CrawlCampaignDomainUseCase {
    pub fn new(
        resolver: Arc<dyn DnsResolver>,
        enricher: Arc<dyn GeoEnricher>,
        campaign_repo: Arc<dyn CampaignDomainRepository>,
        changelog_repo: Arc<dyn ChangelogRepository>,
        metrics_repo: Arc<dyn MetricsRepository>,
    ) -> Self {
        Self {
            resolver,
            enricher,
            campaign_repo,
            changelog_repo,
            metrics_repo,
        }
    }

    #[instrument(skip(self, domain), fields(site = %domain.site, campaign_id = %domain.campaign_id))]
    pub async fn execute(&self, mut domain: CampaignDomain) -> Result<(), DomainError> {
        let result = self.run_pipeline(&mut domain).await;

        let payload = json!({
            "base": domain.base.as_str(),
            "www": domain.www.as_str(),
            "ns": domain.ns.as_str(),
            "mx": domain.mx.as_str(),
        });
        if let Err(e) = self
            .metrics_repo
            .store_campaign_domain_log(domain.id, payload)
            .await
        {
            warn!(error = %e, "failed to write campaign domain log");
        }

        result
    }

    /// The resolve -> classify -> enrich -> detect -> persist pipeline.
    /// `domain`'s status fields are only as fresh as the last step that ran;
    /// `execute` logs whatever made it into `domain` regardless of where
    /// this returns.
    async fn run_pipeline(&self, domain: &mut CampaignDomain) -> Result<(), DomainError> {
        let rcode = self.resolver.validate(&domain.site).await?;
        if rcode != RCODE_OK {
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
        let drafts = TransitionDetectorService::apply(domain, new, now)?;

        self.campaign_repo.update(domain).await?;
        for draft in &drafts {
            if let Err(e) = self.changelog_repo.insert(draft).await {
                warn!(error = %e, message = %draft.message, "failed to write campaign changelog entry");
            }
        }

        Ok(())
    }
}
