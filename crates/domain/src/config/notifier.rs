use serde::{Deserialize, Serialize};

fn default_webhook_url() -> String {
    "https://partyvan.lasse.cloud/say".to_string()
}

fn default_channel() -> String {
    "legz".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotifierConfig {
    /// `IRC_TOKEN` — bearer token for the chat webhook. Notifications are
    /// skipped entirely when unset.
    pub bearer_token: Option<String>,

    /// Webhook URL. The original hardcodes `partyvan.lasse.cloud`; kept as
    /// the default here but made overridable so the adapter isn't
    /// hostname-locked.
    #[serde(default = "default_webhook_url")]
    pub webhook_url: String,

    #[serde(default = "default_channel")]
    pub channel: String,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            bearer_token: None,
            webhook_url: default_webhook_url(),
            channel: default_channel(),
        }
    }
}
