use async_trait::async_trait;

/// Chat webhook notification. Failures are log-only.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, message: &str) -> Result<(), String>;
}
