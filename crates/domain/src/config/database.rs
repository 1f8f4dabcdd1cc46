use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// `DB_SOURCE` — Postgres connection string. No default: refusing to
    /// guess a connection string is safer than silently pointing at a local
    /// default that doesn't exist.
    pub url: String,

    /// Maximum connections in the pool shared by all repositories.
    /// Default: `max(general_workers, campaign_workers) + 2`, computed by
    /// `Config::load` once both job configs are known.
    #[serde(default = "default_pool_max_connections")]
    pub pool_max_connections: u32,

    /// Seconds to wait for a connection before giving up.
    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,
}

fn default_pool_max_connections() -> u32 {
    12
}

fn default_acquire_timeout_secs() -> u64 {
    10
}
