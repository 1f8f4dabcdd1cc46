use v6crawl_application::ports::{Heartbeat, Notifier};
use v6crawl_domain::config::NotifierConfig;
use v6crawl_infrastructure::observers::{HttpHeartbeat, WebhookNotifier};

mod helpers;
use helpers::MockHttpServer;

#[tokio::test]
async fn heartbeat_ping_ok_hits_the_numeric_zero_suffixed_path() {
    let server = MockHttpServer::start(200).await;
    let heartbeat = HttpHeartbeat::with_base_url(server.base_url()).unwrap();

    heartbeat.ping("abc-uuid", true).await.unwrap();

    let requests = server.requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "HEAD");
    assert_eq!(requests[0].path, "/abc-uuid/0");
}

#[tokio::test]
async fn heartbeat_ping_failure_hits_the_numeric_one_suffixed_path() {
    let server = MockHttpServer::start(200).await;
    let heartbeat = HttpHeartbeat::with_base_url(server.base_url()).unwrap();

    heartbeat.ping("abc-uuid", false).await.unwrap();

    let requests = server.requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/abc-uuid/1");
}

#[tokio::test]
async fn heartbeat_surfaces_non_success_status_as_error() {
    let server = MockHttpServer::start(503).await;
    let heartbeat = HttpHeartbeat::with_base_url(server.base_url()).unwrap();

    let result = heartbeat.ping("abc-uuid", true).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn notifier_skips_send_when_no_bearer_token_configured() {
    let server = MockHttpServer::start(200).await;
    let config = NotifierConfig {
        bearer_token: None,
        webhook_url: server.base_url(),
        channel: "legz".to_string(),
    };
    let notifier = WebhookNotifier::new(reqwest::Client::new(), config);

    notifier.notify("hello").await.unwrap();

    assert!(server.requests().await.is_empty());
}

#[tokio::test]
async fn notifier_posts_bearer_authenticated_request_when_token_set() {
    let server = MockHttpServer::start(200).await;
    let config = NotifierConfig {
        bearer_token: Some("tok123".to_string()),
        webhook_url: server.base_url(),
        channel: "legz".to_string(),
    };
    let notifier = WebhookNotifier::new(reqwest::Client::new(), config);

    notifier.notify("hello").await.unwrap();

    let requests = server.requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].authorization.as_deref(), Some("Bearer tok123"));
}
