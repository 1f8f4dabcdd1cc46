use async_trait::async_trait;
use v6crawl_domain::DomainError;

/// Maps a host to `(asn_id, country_id)`, upserting unknown ASNs on first
/// sighting. Never blocks the pipeline on failure — every
/// operation resolves to the Unknown sentinel rather than erroring, so the
/// return type carries no `Option`/error for the miss case.
#[async_trait]
pub trait GeoEnricher: Send + Sync {
    /// Resolves `host` to an IP (preferring AAAA), looks up its ASN, and
    /// upserts a new `(number, name)` row if the ASN hasn't been seen
    /// before. Returns `UNKNOWN_ASN_ID` on any failure or missing data.
    async fn resolve_network(&self, host: &str) -> i64;

    /// Resolves `host`'s country id: first via the static ccTLD map, then
    /// by GeoIP country lookup on the host's IP, retrying the ccTLD map
    /// with the looked-up ISO code. Returns `UNKNOWN_COUNTRY_ID` on any
    /// miss.
    async fn resolve_country(&self, host: &str) -> i64;
}
