use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HealthcheckConfig {
    /// `HEALTHCHECK_CRAWLER` — heartbeat UUID for the general crawler.
    /// Heartbeat pings are skipped entirely when unset.
    pub crawler_uuid: Option<String>,

    /// `HEALTHCHECK_CAMPAIGN` — heartbeat UUID for the campaign crawler.
    pub campaign_uuid: Option<String>,
}
