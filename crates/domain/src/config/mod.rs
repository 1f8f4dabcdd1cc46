//! Configuration module for the IPv6 readiness crawler.
//!
//! Organized by concern, matching the environment variable table each
//! sub-config owns:
//! - `database`: `DB_SOURCE`, pool sizing
//! - `resolver`: `NAMESERVER`
//! - `geoip`: `GEOIP_PATH`
//! - `healthcheck`: `HEALTHCHECK_CRAWLER` / `HEALTHCHECK_CAMPAIGN`
//! - `notifier`: `IRC_TOKEN`
//! - `logging`: `RUST_LOG` / `--verbose`
//! - `scheduler`: page size / worker count / inter-cycle sleep per flavor
//! - `errors`: `ConfigError`
//! - `root`: the aggregate `Config` and its loader

pub mod database;
pub mod errors;
pub mod geoip;
pub mod healthcheck;
pub mod logging;
pub mod notifier;
pub mod resolver;
pub mod root;
pub mod scheduler;

pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use geoip::GeoipConfig;
pub use healthcheck::HealthcheckConfig;
pub use logging::LoggingConfig;
pub use notifier::NotifierConfig;
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config};
pub use scheduler::CrawlConfig;
