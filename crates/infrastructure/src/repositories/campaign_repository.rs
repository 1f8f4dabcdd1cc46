use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::{error, instrument};
use uuid::Uuid;
use v6crawl_application::ports::{CampaignDomainRepository, PageCursor};
use v6crawl_domain::{CampaignDomain, DomainError};

type CampaignDomainRow = (
    i64,
    Uuid,
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

pub struct PgCampaignDomainRepository {
    pool: PgPool,
}

impl PgCampaignDomainRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_domain(row: CampaignDomainRow) -> CampaignDomain {
        let (
            id, campaign_id, site, base, www, ns, mx, ts_base, ts_www, ts_ns, ts_mx, ts_check,
            ts_updated, asn_id, country_id, rank, enabled,
        ) = row;

        CampaignDomain {
            id,
            campaign_id,
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
impl CampaignDomainRepository for PgCampaignDomainRepository {
    #[instrument(skip(self))]
    async fn next_page(
        &self,
        cursor: PageCursor,
        limit: i64,
    ) -> Result<(Vec<CampaignDomain>, PageCursor), DomainError> {
        let rows = sqlx::query_as::<_, CampaignDomainRow>(
            "SELECT id, campaign_id, site, base, www, ns, mx, ts_base, ts_www, ts_ns, ts_mx,
                    ts_check, ts_updated, asn_id, country_id, rank, enabled
             FROM campaign_domain
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
            error!(error = %e, "failed to fetch campaign domain page");
            DomainError::DatabaseError(e.to_string())
        })?;

        let domains: Vec<CampaignDomain> = rows.into_iter().map(Self::row_to_domain).collect();
        let next_cursor = PageCursor(cursor.0 + domains.len() as i64);

        Ok((domains, next_cursor))
    }

    #[instrument(skip(self, domain))]
    async fn update(&self, domain: &CampaignDomain) -> Result<(), DomainError> {
        sqlx::query(
            "UPDATE campaign_domain
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
            error!(error = %e, site = %domain.site, "failed to update campaign domain");
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
}
