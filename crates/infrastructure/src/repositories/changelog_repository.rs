use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{error, instrument};
use v6crawl_application::ports::ChangelogRepository;
use v6crawl_domain::{ChangelogDraft, DomainError};

pub struct PgChangelogRepository {
    pool: PgPool,
}

impl PgChangelogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChangelogRepository for PgChangelogRepository {
    #[instrument(skip(self, draft))]
    async fn insert(&self, draft: &ChangelogDraft) -> Result<(), DomainError> {
        sqlx::query(
            "INSERT INTO changelog (ts, domain_id, campaign_id, message, new_status)
             VALUES (now(), $1, $2, $3, $4)",
        )
        .bind(draft.domain_id)
        .bind(draft.campaign_id)
        .bind(&draft.message)
        .bind(draft.new_status.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, domain_id = draft.domain_id, "failed to insert changelog row");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }
}
