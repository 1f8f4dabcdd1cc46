use async_trait::async_trait;
use v6crawl_domain::{Asn, DomainError};

/// Upsert-on-first-seen ASN storage (`number` is
/// unique and a second sighting never inserts).
#[async_trait]
pub trait AsnRepository: Send + Sync {
    async fn get_by_number(&self, number: i64) -> Result<Option<Asn>, DomainError>;

    async fn insert(&self, number: i64, name: &str) -> Result<Asn, DomainError>;
}
