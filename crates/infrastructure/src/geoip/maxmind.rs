use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;
use v6crawl_application::ports::{AsnRepository, CountryRepository, DnsResolver, GeoEnricher};
use v6crawl_domain::{DomainError, UNKNOWN_ASN_ID, UNKNOWN_COUNTRY_ID};

/// Extracts the last DNS label as a bare lowercase TLD, matching the
/// original crawler's `GetTLDFromDomain` regex closely enough: a final
/// run of 2+ ASCII letters after the last dot.
fn extract_tld(domain: &str) -> Option<String> {
    if !domain.contains('.') {
        return None;
    }
    let last = domain.rsplit('.').next()?;
    if last.len() >= 2 && last.chars().all(|c| c.is_ascii_alphabetic()) {
        Some(last.to_lowercase())
    } else {
        None
    }
}

/// GeoIP/ASN enrichment backed by local MaxMind GeoLite2 databases, with
/// ASN upsert-on-first-seen and a TLD-first, GeoIP-fallback country
/// lookup.
pub struct MaxmindGeoEnricher {
    asn_db: maxminddb::Reader<Vec<u8>>,
    country_db: maxminddb::Reader<Vec<u8>>,
    resolver: Arc<dyn DnsResolver>,
    asn_repo: Arc<dyn AsnRepository>,
    country_repo: Arc<dyn CountryRepository>,
}

impl MaxmindGeoEnricher {
    pub fn open(
        dir: &str,
        resolver: Arc<dyn DnsResolver>,
        asn_repo: Arc<dyn AsnRepository>,
        country_repo: Arc<dyn CountryRepository>,
    ) -> Result<Self, DomainError> {
        let asn_path = format!("{dir}/GeoLite2-ASN.mmdb");
        let country_path = format!("{dir}/GeoLite2-Country.mmdb");

        let asn_db = maxminddb::Reader::open_readfile(&asn_path)
            .map_err(|e| DomainError::ConfigError(format!("failed to open {asn_path}: {e}")))?;
        let country_db = maxminddb::Reader::open_readfile(&country_path)
            .map_err(|e| DomainError::ConfigError(format!("failed to open {country_path}: {e}")))?;

        Ok(Self {
            asn_db,
            country_db,
            resolver,
            asn_repo,
            country_repo,
        })
    }
}

#[async_trait]
impl GeoEnricher for MaxmindGeoEnricher {
    async fn resolve_network(&self, host: &str) -> i64 {
        let Ok(Some(ip)) = self.resolver.resolve_ip(host).await else {
            return UNKNOWN_ASN_ID;
        };

        let record: maxminddb::geoip2::Asn = match self.asn_db.lookup(ip) {
            Ok(r) => r,
            Err(_) => return UNKNOWN_ASN_ID,
        };

        let Some(number) = record.autonomous_system_number else {
            return UNKNOWN_ASN_ID;
        };
        let name = record.autonomous_system_organization.unwrap_or("Unknown");

        match self.asn_repo.get_by_number(number as i64).await {
            Ok(Some(existing)) => existing.id,
            Ok(None) => match self.asn_repo.insert(number as i64, name).await {
                Ok(created) => created.id,
                Err(e) => {
                    warn!(error = %e, number, "failed to insert new asn");
                    UNKNOWN_ASN_ID
                }
            },
            Err(e) => {
                warn!(error = %e, number, "failed to look up asn by number");
                UNKNOWN_ASN_ID
            }
        }
    }

    async fn resolve_country(&self, host: &str) -> i64 {
        if let Some(tld) = extract_tld(host) {
            if let Ok(Some(country)) = self.country_repo.get_by_tld(&tld).await {
                return country.id;
            }
        }

        let Ok(Some(ip)) = self.resolver.resolve_ip(host).await else {
            return UNKNOWN_COUNTRY_ID;
        };

        let record: maxminddb::geoip2::Country = match self.country_db.lookup(ip) {
            Ok(r) => r,
            Err(_) => return UNKNOWN_COUNTRY_ID,
        };

        let iso_code = record.country.and_then(|c| c.iso_code);
        let Some(iso_code) = iso_code else {
            return UNKNOWN_COUNTRY_ID;
        };

        match self.country_repo.get_by_tld(&iso_code.to_lowercase()).await {
            Ok(Some(country)) => country.id,
            _ => UNKNOWN_COUNTRY_ID,
        }
    }
}
