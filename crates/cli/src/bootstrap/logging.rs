use tracing_subscriber::EnvFilter;
use v6crawl_domain::config::Config;

pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_new(&config.logging.level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_target(true)
        .with_thread_ids(false)
        .with_env_filter(filter)
        .init();

    tracing::info!(level = %config.logging.level, "logging initialized");
}
