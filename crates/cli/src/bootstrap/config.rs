use v6crawl_domain::config::{CliOverrides, Config};
use tracing::info;

pub fn load_config(overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(overrides)?;
    config.validate()?;

    info!(
        db_pool_max = config.database.pool_max_connections,
        general_page_size = config.general.page_size,
        general_workers = config.general.workers,
        campaign_page_size = config.campaign.page_size,
        campaign_workers = config.campaign.workers,
        "configuration loaded"
    );

    Ok(config)
}
