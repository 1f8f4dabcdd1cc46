use std::env;

use super::database::DatabaseConfig;
use super::errors::ConfigError;
use super::geoip::GeoipConfig;
use super::healthcheck::HealthcheckConfig;
use super::logging::LoggingConfig;
use super::notifier::NotifierConfig;
use super::resolver::{parse_nameserver_env, ResolverConfig};
use super::scheduler::CrawlConfig;

/// CLI-level overrides layered on top of environment configuration.
/// Mirrors the `--verbose` flag.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub verbose: bool,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub geoip: GeoipConfig,
    pub resolver: ResolverConfig,
    pub healthcheck: HealthcheckConfig,
    pub notifier: NotifierConfig,
    pub logging: LoggingConfig,
    pub general: CrawlConfig,
    pub campaign: CrawlConfig,
}

impl Config {
    /// Loads every sub-config from environment variables,
    /// applying `overrides` last so `--verbose` always wins over `RUST_LOG`.
    pub fn load(overrides: CliOverrides) -> Result<Self, ConfigError> {
        let url = required_var("DB_SOURCE")?;
        let geoip_dir = required_var("GEOIP_PATH")?;

        let nameservers = match env::var("NAMESERVER") {
            Ok(raw) if !raw.trim().is_empty() => parse_nameserver_env(&raw),
            _ => ResolverConfig::default().nameservers,
        };
        let resolver = ResolverConfig {
            nameservers,
            ..ResolverConfig::default()
        };

        let mut general = CrawlConfig::general_defaults();
        apply_crawl_overrides(&mut general, "GENERAL")?;

        let mut campaign = CrawlConfig::campaign_defaults();
        apply_crawl_overrides(&mut campaign, "CAMPAIGN")?;

        let mut database = DatabaseConfig {
            url,
            pool_max_connections: (general.workers.max(campaign.workers) as u32) + 2,
            acquire_timeout_secs: 10,
        };
        if let Ok(raw) = env::var("DB_POOL_MAX_CONNECTIONS") {
            database.pool_max_connections = parse_var("DB_POOL_MAX_CONNECTIONS", &raw)?;
        }

        let mut logging = LoggingConfig::default();
        if let Ok(level) = env::var("RUST_LOG") {
            logging.level = level;
        }
        if overrides.verbose {
            logging.level = "debug".to_string();
        }

        Ok(Config {
            database,
            geoip: GeoipConfig { dir: geoip_dir },
            resolver,
            healthcheck: HealthcheckConfig {
                crawler_uuid: env::var("HEALTHCHECK_CRAWLER").ok(),
                campaign_uuid: env::var("HEALTHCHECK_CAMPAIGN").ok(),
            },
            notifier: NotifierConfig {
                bearer_token: env::var("IRC_TOKEN").ok(),
                ..NotifierConfig::default()
            },
            logging,
            general,
            campaign,
        })
    }

    /// Sanity checks beyond what serde/env parsing already enforces.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.url.is_empty() {
            return Err(ConfigError::MissingVar("DB_SOURCE".to_string()));
        }
        if self.geoip.dir.is_empty() {
            return Err(ConfigError::MissingVar("GEOIP_PATH".to_string()));
        }
        if self.resolver.nameservers.is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "NAMESERVER".to_string(),
                message: "resolved to an empty list".to_string(),
            });
        }
        Ok(())
    }
}

fn apply_crawl_overrides(cfg: &mut CrawlConfig, prefix: &str) -> Result<(), ConfigError> {
    if let Ok(raw) = env::var(format!("{prefix}_PAGE_SIZE")) {
        cfg.page_size = parse_var(&format!("{prefix}_PAGE_SIZE"), &raw)?;
    }
    if let Ok(raw) = env::var(format!("{prefix}_WORKERS")) {
        cfg.workers = parse_var(&format!("{prefix}_WORKERS"), &raw)?;
    }
    if let Ok(raw) = env::var(format!("{prefix}_INTERVAL_SECS")) {
        cfg.interval_secs = parse_var(&format!("{prefix}_INTERVAL_SECS"), &raw)?;
    }
    if let Ok(raw) = env::var("BATCH_TIMEOUT_SECS") {
        cfg.batch_timeout_secs = parse_var("BATCH_TIMEOUT_SECS", &raw)?;
    }
    Ok(())
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVar(name.to_string()))
}

fn parse_var<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T, ConfigError> {
    raw.parse().map_err(|_| ConfigError::InvalidValue {
        var: name.to_string(),
        message: format!("could not parse '{raw}'"),
    })
}
