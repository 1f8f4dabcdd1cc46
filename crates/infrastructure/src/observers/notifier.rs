use async_trait::async_trait;
use serde_json::json;
use tracing::instrument;
use v6crawl_application::ports::Notifier;
use v6crawl_domain::config::NotifierConfig;

/// Chat webhook notifier, bearer-authenticated, posting to a single
/// fixed channel. Silently a no-op when no token is configured — callers
/// still get a `Result` back so they can log the skip if they care.
pub struct WebhookNotifier {
    client: reqwest::Client,
    config: NotifierConfig,
}

impl WebhookNotifier {
    pub fn new(client: reqwest::Client, config: NotifierConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    #[instrument(skip(self, message))]
    async fn notify(&self, message: &str) -> Result<(), String> {
        let Some(token) = &self.config.bearer_token else {
            return Ok(());
        };

        let response = self
            .client
            .post(&self.config.webhook_url)
            .bearer_auth(token)
            .json(&json!({
                "channel": self.config.channel,
                "message": message,
            }))
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !response.status().is_success() {
            return Err(format!("notifier webhook returned {}", response.status()));
        }

        Ok(())
    }
}
