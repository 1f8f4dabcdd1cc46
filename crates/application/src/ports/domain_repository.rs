use async_trait::async_trait;
use v6crawl_domain::{Domain, DomainError, DomainStats};

/// Opaque cursor over the general domain pool. An implementer may use an
/// offset or an id high-water mark; callers only ever pass back what a
/// prior page returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageCursor(pub i64);

/// Persistence contract for the general domain pool.
#[async_trait]
pub trait DomainRepository: Send + Sync {
    /// Returns the next `limit` due domains in crawl order (`ts_check`
    /// oldest-first, never-checked first), starting after `cursor`.
    /// An empty result means the cycle has drained the whole pool.
    async fn next_page(&self, cursor: PageCursor, limit: i64)
        -> Result<(Vec<Domain>, PageCursor), DomainError>;

    /// Writes all status/enrichment/timestamp fields atomically.
    async fn update(&self, domain: &Domain) -> Result<(), DomainError>;

    /// Marks a domain ineligible for future `next_page` calls.
    async fn disable(&self, site: &str) -> Result<(), DomainError>;

    /// Liveness probe distinguishing transient DB outage from empty pages.
    async fn ping(&self) -> Result<(), DomainError>;

    /// Aggregate snapshot over the whole pool, written under the `domains`
    /// measurement once per general cycle.
    async fn stats(&self) -> Result<DomainStats, DomainError>;

    /// One-time seeding step: spreads synthetic `ts_check` values across a
    /// window of `interval_secs * ceil(never_checked / page_size)` seconds
    /// for every domain that has never been checked, so the first real
    /// cycle doesn't find the whole pool tied for oldest and page through
    /// it in one uninterrupted burst. Idempotent — only rows with a null
    /// `ts_check` are touched, so domains already checked are left alone.
    async fn init_space_timestamps(
        &self,
        interval_secs: i64,
        page_size: i64,
    ) -> Result<(), DomainError>;
}
