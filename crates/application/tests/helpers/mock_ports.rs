#![allow(dead_code)]

use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use v6crawl_application::ports::{
    AsnRepository, CampaignDomainRepository, ChangelogRepository, ClassifyResult,
    CountryRepository, DnsResolver, DomainRepository, GeoEnricher, MetricsRepository, PageCursor,
};
use v6crawl_domain::{
    Asn, CampaignDomain, ChangelogDraft, Country, Domain, DomainError, DomainStats, UNKNOWN_ASN_ID,
    UNKNOWN_COUNTRY_ID,
};

// ============================================================================
// Mock DnsResolver
// ============================================================================

pub struct MockDnsResolver {
    classify_responses: RwLock<HashMap<String, ClassifyResult>>,
    validate_responses: RwLock<HashMap<String, u16>>,
    default_rcode: u16,
}

impl MockDnsResolver {
    pub fn new() -> Self {
        Self {
            classify_responses: RwLock::new(HashMap::new()),
            validate_responses: RwLock::new(HashMap::new()),
            default_rcode: 0,
        }
    }

    pub async fn set_classify(&self, host: &str, result: ClassifyResult) {
        self.classify_responses
            .write()
            .await
            .insert(host.to_string(), result);
    }

    pub async fn set_validate(&self, host: &str, rcode: u16) {
        self.validate_responses
            .write()
            .await
            .insert(host.to_string(), rcode);
    }
}

#[async_trait]
impl DnsResolver for MockDnsResolver {
    async fn classify(&self, host: &str) -> Result<ClassifyResult, DomainError> {
        Ok(self
            .classify_responses
            .read()
            .await
            .get(host)
            .copied()
            .unwrap_or(ClassifyResult {
                base: v6crawl_domain::Status::NoRecord,
                www: v6crawl_domain::Status::NoRecord,
                ns: v6crawl_domain::Status::NoRecord,
                mx: v6crawl_domain::Status::NoRecord,
            }))
    }

    async fn validate(&self, host: &str) -> Result<u16, DomainError> {
        Ok(self
            .validate_responses
            .read()
            .await
            .get(host)
            .copied()
            .unwrap_or(self.default_rcode))
    }

    async fn resolve_ip(&self, _host: &str) -> Result<Option<IpAddr>, DomainError> {
        Ok(None)
    }
}

// ============================================================================
// Mock GeoEnricher
// ============================================================================

pub struct MockGeoEnricher {
    pub network_id: i64,
    pub country_id: i64,
    pub call_count: AtomicU64,
}

impl MockGeoEnricher {
    pub fn new() -> Self {
        Self {
            network_id: UNKNOWN_ASN_ID,
            country_id: UNKNOWN_COUNTRY_ID,
            call_count: AtomicU64::new(0),
        }
    }

    pub fn with_ids(asn_id: i64, country_id: i64) -> Self {
        Self {
            network_id: asn_id,
            country_id,
            call_count: AtomicU64::new(0),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl GeoEnricher for MockGeoEnricher {
    async fn resolve_network(&self, _host: &str) -> i64 {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        self.network_id
    }

    async fn resolve_country(&self, _host: &str) -> i64 {
        self.country_id
    }
}

// ============================================================================
// Mock DomainRepository
// ============================================================================

pub struct MockDomainRepository {
    domains: RwLock<HashMap<String, Domain>>,
    disabled: RwLock<Vec<String>>,
    pub ping_fails: std::sync::atomic::AtomicBool,
}

impl MockDomainRepository {
    pub fn new() -> Self {
        Self {
            domains: RwLock::new(HashMap::new()),
            disabled: RwLock::new(Vec::new()),
            ping_fails: std::sync::atomic::AtomicBool::new(false),
        }
    }

    pub async fn insert(&self, domain: Domain) {
        self.domains.write().await.insert(domain.site.clone(), domain);
    }

    pub async fn get(&self, site: &str) -> Option<Domain> {
        self.domains.read().await.get(site).cloned()
    }

    pub async fn disabled_sites(&self) -> Vec<String> {
        self.disabled.read().await.clone()
    }
}

#[async_trait]
impl DomainRepository for MockDomainRepository {
    async fn next_page(
        &self,
        _cursor: PageCursor,
        limit: i64,
    ) -> Result<(Vec<Domain>, PageCursor), DomainError> {
        let domains: Vec<Domain> = self
            .domains
            .read()
            .await
            .values()
            .take(limit as usize)
            .cloned()
            .collect();
        Ok((domains, PageCursor(limit)))
    }

    async fn update(&self, domain: &Domain) -> Result<(), DomainError> {
        self.domains
            .write()
            .await
            .insert(domain.site.clone(), domain.clone());
        Ok(())
    }

    async fn disable(&self, site: &str) -> Result<(), DomainError> {
        self.disabled.write().await.push(site.to_string());
        Ok(())
    }

    async fn ping(&self) -> Result<(), DomainError> {
        if self.ping_fails.load(Ordering::Relaxed) {
            return Err(DomainError::DatabaseError("ping failed".to_string()));
        }
        Ok(())
    }

    async fn stats(&self) -> Result<DomainStats, DomainError> {
        Ok(DomainStats::default())
    }

    async fn init_space_timestamps(
        &self,
        _interval_secs: i64,
        _page_size: i64,
    ) -> Result<(), DomainError> {
        Ok(())
    }
}

// ============================================================================
// Mock CampaignDomainRepository
// ============================================================================

pub struct MockCampaignDomainRepository {
    domains: RwLock<HashMap<String, CampaignDomain>>,
}

impl MockCampaignDomainRepository {
    pub fn new() -> Self {
        Self {
            domains: RwLock::new(HashMap::new()),
        }
    }

    pub async fn insert(&self, domain: CampaignDomain) {
        self.domains.write().await.insert(domain.site.clone(), domain);
    }

    pub async fn get(&self, site: &str) -> Option<CampaignDomain> {
        self.domains.read().await.get(site).cloned()
    }
}

#[async_trait]
impl CampaignDomainRepository for MockCampaignDomainRepository {
    async fn next_page(
        &self,
        _cursor: PageCursor,
        limit: i64,
    ) -> Result<(Vec<CampaignDomain>, PageCursor), DomainError> {
        let domains: Vec<CampaignDomain> = self
            .domains
            .read()
            .await
            .values()
            .take(limit as usize)
            .cloned()
            .collect();
        Ok((domains, PageCursor(limit)))
    }

    async fn update(&self, domain: &CampaignDomain) -> Result<(), DomainError> {
        self.domains
            .write()
            .await
            .insert(domain.site.clone(), domain.clone());
        Ok(())
    }

    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }
}

// ============================================================================
// Mock ChangelogRepository
// ============================================================================

pub struct MockChangelogRepository {
    entries: RwLock<Vec<ChangelogDraft>>,
}

impl MockChangelogRepository {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    pub async fn entries(&self) -> Vec<ChangelogDraft> {
        self.entries.read().await.clone()
    }
}

#[async_trait]
impl ChangelogRepository for MockChangelogRepository {
    async fn insert(&self, draft: &ChangelogDraft) -> Result<(), DomainError> {
        self.entries.write().await.push(draft.clone());
        Ok(())
    }
}

// ============================================================================
// Mock AsnRepository / CountryRepository / MetricsRepository
// ============================================================================

pub struct MockAsnRepository {
    by_number: RwLock<HashMap<i64, Asn>>,
    next_id: AtomicU64,
    pub insert_count: AtomicU64,
}

impl MockAsnRepository {
    pub fn new() -> Self {
        Self {
            by_number: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(2),
            insert_count: AtomicU64::new(0),
        }
    }
}

#[async_trait]
impl AsnRepository for MockAsnRepository {
    async fn get_by_number(&self, number: i64) -> Result<Option<Asn>, DomainError> {
        Ok(self.by_number.read().await.get(&number).cloned())
    }

    async fn insert(&self, number: i64, name: &str) -> Result<Asn, DomainError> {
        self.insert_count.fetch_add(1, Ordering::Relaxed);
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) as i64;
        let asn = Asn {
            id,
            number,
            name: name.to_string(),
        };
        self.by_number.write().await.insert(number, asn.clone());
        Ok(asn)
    }
}

pub struct MockCountryRepository {
    by_tld: HashMap<String, Country>,
}

impl MockCountryRepository {
    pub fn new() -> Self {
        Self {
            by_tld: HashMap::new(),
        }
    }

    pub fn with_entry(mut self, tld: &str, country: Country) -> Self {
        self.by_tld.insert(tld.to_lowercase(), country);
        self
    }
}

#[async_trait]
impl CountryRepository for MockCountryRepository {
    async fn get_by_tld(&self, tld: &str) -> Result<Option<Country>, DomainError> {
        Ok(self.by_tld.get(&tld.to_lowercase()).cloned())
    }
}

pub struct MockMetricsRepository {
    pub metrics: RwLock<Vec<(String, Value)>>,
    pub campaign_logs: RwLock<Vec<(i64, Value)>>,
}

impl MockMetricsRepository {
    pub fn new() -> Self {
        Self {
            metrics: RwLock::new(Vec::new()),
            campaign_logs: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl MetricsRepository for MockMetricsRepository {
    async fn store_metric(&self, measurement: &str, payload: Value) -> Result<(), DomainError> {
        self.metrics
            .write()
            .await
            .push((measurement.to_string(), payload));
        Ok(())
    }

    async fn store_campaign_domain_log(
        &self,
        campaign_domain_id: i64,
        payload: Value,
    ) -> Result<(), DomainError> {
        self.campaign_logs
            .write()
            .await
            .push((campaign_domain_id, payload));
        Ok(())
    }
}
