use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("all resolvers failed: {0}")]
    AllResolversFailed(String),

    #[error("unknown status transition for {site} measurement {measurement}: {from} -> {to}")]
    UnknownTransition {
        site: String,
        measurement: String,
        from: String,
        to: String,
    },

    #[error("database error: {0}")]
    DatabaseError(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("configuration error: {0}")]
    ConfigError(String),
}
