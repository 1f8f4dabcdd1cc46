use std::time::Duration;

use async_trait::async_trait;
use tracing::instrument;
use v6crawl_application::ports::Heartbeat;

/// Liveness ping to betteruptime's status-suffixed heartbeat endpoint:
/// `HEAD /api/v1/heartbeat/{uuid}/{status}`, `status` `0` for OK or `1` for
/// failure.
pub struct HttpHeartbeat {
    client: reqwest::Client,
    base_url: String,
}

impl HttpHeartbeat {
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_base_url("https://uptime.betteruptime.com/api/v1/heartbeat".to_string())
    }

    /// Same as [`HttpHeartbeat::new`] but pointed at an arbitrary base URL,
    /// for tests that stand up a local endpoint instead of dialing
    /// betteruptime.
    pub fn with_base_url(base_url: String) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl Heartbeat for HttpHeartbeat {
    #[instrument(skip(self))]
    async fn ping(&self, uuid: &str, ok: bool) -> Result<(), String> {
        let status = if ok { "0" } else { "1" };
        let url = format!("{}/{}/{}", self.base_url, uuid, status);

        let response = self.client.head(&url).send().await.map_err(|e| e.to_string())?;

        if !response.status().is_success() {
            return Err(format!("heartbeat endpoint returned {}", response.status()));
        }

        Ok(())
    }
}
