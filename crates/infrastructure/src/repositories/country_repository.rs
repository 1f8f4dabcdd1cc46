use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{error, instrument};
use v6crawl_application::ports::CountryRepository;
use v6crawl_domain::{Country, DomainError};

type CountryRow = (i64, String, String, String);

pub struct PgCountryRepository {
    pool: PgPool,
}

impl PgCountryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_country(row: CountryRow) -> Country {
        let (id, name, cc_tld, iso_code) = row;
        Country { id, name, cc_tld, iso_code }
    }
}

#[async_trait]
impl CountryRepository for PgCountryRepository {
    #[instrument(skip(self))]
    async fn get_by_tld(&self, tld: &str) -> Result<Option<Country>, DomainError> {
        let row = sqlx::query_as::<_, CountryRow>(
            "SELECT id, name, cc_tld, iso_code FROM country WHERE lower(cc_tld) = lower($1)",
        )
        .bind(tld)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, tld, "failed to look up country by tld");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(Self::row_to_country))
    }
}
