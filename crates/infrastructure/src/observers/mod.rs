pub mod heartbeat;
pub mod notifier;

pub use heartbeat::HttpHeartbeat;
pub use notifier::WebhookNotifier;
