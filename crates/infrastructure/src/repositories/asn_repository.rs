use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{error, instrument};
use v6crawl_application::ports::AsnRepository;
use v6crawl_domain::{Asn, DomainError};

type AsnRow = (i64, i64, String);

pub struct PgAsnRepository {
    pool: PgPool,
}

impl PgAsnRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_asn(row: AsnRow) -> Asn {
        let (id, number, name) = row;
        Asn { id, number, name }
    }
}

#[async_trait]
impl AsnRepository for PgAsnRepository {
    #[instrument(skip(self))]
    async fn get_by_number(&self, number: i64) -> Result<Option<Asn>, DomainError> {
        let row = sqlx::query_as::<_, AsnRow>("SELECT id, number, name FROM asn WHERE number = $1")
            .bind(number)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, number, "failed to look up asn by number");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(row.map(Self::row_to_asn))
    }

    #[instrument(skip(self))]
    async fn insert(&self, number: i64, name: &str) -> Result<Asn, DomainError> {
        let row = sqlx::query_as::<_, AsnRow>(
            "INSERT INTO asn (number, name) VALUES ($1, $2) RETURNING id, number, name",
        )
        .bind(number)
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, number, "failed to insert new asn");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(Self::row_to_asn(row))
    }
}
