use async_trait::async_trait;
use v6crawl_domain::{Country, DomainError};

/// Static ccTLD → country reference data.
#[async_trait]
pub trait CountryRepository: Send + Sync {
    /// `tld` is a bare lowercase label without the leading dot (e.g. `"no"`)
    /// or an ISO country code used as a pseudo-TLD on retry.
    async fn get_by_tld(&self, tld: &str) -> Result<Option<Country>, DomainError>;
}
