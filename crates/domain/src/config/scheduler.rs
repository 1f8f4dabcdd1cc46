use serde::{Deserialize, Serialize};

/// Per-flavor scheduler tuning. General and campaign crawls
/// share one `BatchScheduler` implementation parameterized by one of these.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct CrawlConfig {
    pub page_size: i64,
    pub workers: usize,
    pub interval_secs: u64,
    pub batch_timeout_secs: u64,
    pub disable_on_nxdomain: bool,
}

impl CrawlConfig {
    pub fn general_defaults() -> Self {
        Self {
            page_size: 200,
            workers: 10,
            interval_secs: 600,
            batch_timeout_secs: 120,
            disable_on_nxdomain: true,
        }
    }

    pub fn campaign_defaults() -> Self {
        Self {
            page_size: 50,
            workers: 5,
            interval_secs: 7200,
            batch_timeout_secs: 120,
            disable_on_nxdomain: false,
        }
    }
}
