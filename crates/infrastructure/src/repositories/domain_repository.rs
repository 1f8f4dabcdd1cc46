use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::{error, instrument};
use v6crawl_application::ports::{DomainRepository, PageCursor};
use v6crawl_domain::{Domain, DomainError, DomainStats};

type DomainStatsRow = (i64, i64, i64, i64, i64, i64, i64);

type DomainRow = (
    i64,
    String,
    String,
    String,
    String,
    String,
    Option<DateTime<Utc>>,
    Option<DateTime<Utc>>,
    Option<DateTime<Utc>>,
    Option<DateTime<Utc>>,
    Option<DateTime<Utc>>,
    Option<DateTime<Utc>>,
    i64,
    i64,
    i64,
    bool,
);

pub struct PgDomainRepository {
    pool: PgPool,
}

impl PgDomainRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_domain(row: DomainRow) -> Domain {
        let (
            id, site, base, www, ns, mx, ts_base, ts_www, ts_ns, ts_mx, ts_check, ts_updated,
            asn_id, country_id, rank, enabled,
        ) = row;

        Domain {
            id,
            site,
            base: base.parse().unwrap(),
            www: www.parse().unwrap(),
            ns: ns.parse().unwrap(),
            mx: mx.parse().unwrap(),
            ts_base,
            ts_www,
            ts_ns,
            ts_mx,
            ts_check,
            ts_updated,
            asn_id,
            country_id,
            rank,
            enabled,
        }
    }
}

#[async_trait]
impl DomainRepository for PgDomainRepository {
    #[instrument(skip(self))]
    async fn next_page(
        &self,
        cursor: PageCursor,
        limit: i64,
    ) -> Result<(Vec<Domain>, PageCursor), DomainError> {
        let rows = sqlx::query_as::<_, DomainRow>(
            "SELECT id, site, base, www, ns, mx, ts_base, ts_www, ts_ns, ts_mx, ts_check,
                    ts_updated, asn_id, country_id, rank, enabled
             FROM domain
             WHERE enabled = true
             ORDER BY ts_check ASC NULLS FIRST, id ASC
             OFFSET $1
             LIMIT $2",
        )
        .bind(cursor.0)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "failed to fetch domain page");
            DomainError::DatabaseError(e.to_string())
        })?;

        let domains: Vec<Domain> = rows.into_iter().map(Self::row_to_domain).collect();
        let next_cursor = PageCursor(cursor.0 + domains.len() as i64);

        Ok((domains, next_cursor))
    }

    #[instrument(skip(self, domain))]
    async fn update(&self, domain: &Domain) -> Result<(), DomainError> {
        sqlx::query(
            "UPDATE domain
             SET base = $1, www = $2, ns = $3, mx = $4,
                 ts_base = $5, ts_www = $6, ts_ns = $7, ts_mx = $8,
                 ts_check = $9, ts_updated = $10, asn_id = $11, country_id = $12
             WHERE id = $13",
        )
        .bind(domain.base.as_str())
        .bind(domain.www.as_str())
        .bind(domain.ns.as_str())
        .bind(domain.mx.as_str())
        .bind(domain.ts_base)
        .bind(domain.ts_www)
        .bind(domain.ts_ns)
        .bind(domain.ts_mx)
        .bind(domain.ts_check)
        .bind(domain.ts_updated)
        .bind(domain.asn_id)
        .bind(domain.country_id)
        .bind(domain.id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, site = %domain.site, "failed to update domain");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn disable(&self, site: &str) -> Result<(), DomainError> {
        sqlx::query("UPDATE domain SET enabled = false WHERE site = $1")
            .bind(site)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, site, "failed to disable domain");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn stats(&self) -> Result<DomainStats, DomainError> {
        let row = sqlx::query_as::<_, DomainStatsRow>(
            "SELECT
                count(1) filter (WHERE ts_check IS NOT NULL) AS total_sites,
                count(1) filter (WHERE ts_check IS NOT NULL AND base = 'supported') AS total_aaaa,
                count(1) filter (WHERE ts_check IS NOT NULL AND www = 'supported') AS total_www,
                count(1) filter (WHERE ts_check IS NOT NULL AND base = 'supported' AND www = 'supported') AS total_both,
                count(1) filter (WHERE ts_check IS NOT NULL AND ns = 'supported') AS total_ns,
                count(1) filter (WHERE ts_check IS NOT NULL AND base = 'supported' AND www = 'supported' AND rank < 1000) AS top_1k,
                count(1) filter (WHERE ts_check IS NOT NULL AND ns = 'supported' AND rank < 1000) AS top_ns
             FROM domain",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "failed to compute domain stats");
            DomainError::DatabaseError(e.to_string())
        })?;

        let (total_sites, total_aaaa, total_www, total_both, total_ns, top_1k, top_ns) = row;
        Ok(DomainStats { total_sites, total_aaaa, total_www, total_both, total_ns, top_1k, top_ns })
    }

    #[instrument(skip(self))]
    async fn init_space_timestamps(
        &self,
        interval_secs: i64,
        page_size: i64,
    ) -> Result<(), DomainError> {
        sqlx::query(
            "WITH ordered AS (
                SELECT id,
                       row_number() OVER (ORDER BY id) - 1 AS idx,
                       count(*) OVER () AS total
                FROM domain
                WHERE ts_check IS NULL
             )
             UPDATE domain
             SET ts_check = now() - make_interval(secs =>
                 $1::float8
                 * ceil(ordered.total::float8 / $2::float8)
                 * (ordered.idx::float8 / GREATEST(ordered.total - 1, 1)::float8)
             )
             FROM ordered
             WHERE domain.id = ordered.id",
        )
        .bind(interval_secs as f64)
        .bind(page_size as f64)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "failed to space out initial ts_check values");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }
}
