use async_trait::async_trait;

/// Liveness ping to an external uptime monitor. Failures are log-only at
/// the call site — the trait itself still surfaces a
/// `Result` so adapters can log with context, but no caller treats an
/// `Err` as fatal.
#[async_trait]
pub trait Heartbeat: Send + Sync {
    async fn ping(&self, uuid: &str, ok: bool) -> Result<(), String>;
}
