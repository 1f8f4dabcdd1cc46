use async_trait::async_trait;
use std::net::IpAddr;
use v6crawl_domain::{DomainError, Status};

/// The four measurements `Classify` produces in one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifyResult {
    pub base: Status,
    pub www: Status,
    pub ns: Status,
    pub mx: Status,
}

/// Ternary IPv6 classification of a host via DNS, with resolver failover
/// and CNAME following.
#[async_trait]
pub trait DnsResolver: Send + Sync {
    /// Resolves all four measurements for `host`. Never fails wholesale:
    /// any individual measurement that cannot be determined comes back as
    /// `Status::NoRecord`.
    async fn classify(&self, host: &str) -> Result<ClassifyResult, DomainError>;

    /// Lightweight TXT probe. Returns `RCODE_OK` on any successful
    /// non-error response, the observed DNS rcode otherwise, and
    /// `RCODE_IDNA_ERROR` when `host` fails IDNA conversion.
    async fn validate(&self, host: &str) -> Result<u16, DomainError>;

    /// First AAAA if present, else first A, else `None`. Used by
    /// enrichment to pick an IP to hand to the GeoIP databases.
    async fn resolve_ip(&self, host: &str) -> Result<Option<IpAddr>, DomainError>;
}
