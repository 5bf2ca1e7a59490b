use std::time::Duration;

use assert_matches::assert_matches;
use serde_json::json;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use notification_cell::{NotificationCenter, NotificationService};
use shared_config::ClientConfig;
use shared_models::auth::Session;
use shared_models::error::ApiError;
use shared_utils::test_utils::{MockApiResponses, TestConfig, TestUser};

fn config_for(server: &MockServer) -> ClientConfig {
    let mut config = TestConfig::with_base_url(&format!("{}/api", server.uri())).to_client_config();
    config.notification_poll_seconds = 1;
    config
}

async fn wait_until<F, Fut>(mut check: F)
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = bool>,
{
    tokio::time::timeout(Duration::from_secs(5), async {
        while !check().await {
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
    })
    .await
    .expect("condition not reached in time");
}

#[tokio::test]
async fn test_reload_accepts_wrapped_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/notifications/my"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "notifications": [
                MockApiResponses::notification_response("n1", "Appointment booked", false),
                MockApiResponses::notification_response("n2", "Appointment moved", true)
            ]
        })))
        .mount(&mock_server)
        .await;

    let center = NotificationCenter::new(&config_for(&mock_server));
    assert_eq!(center.reload("token").await.unwrap(), 2);
    assert_eq!(center.unread_count().await, 1);
}

#[tokio::test]
async fn test_forbidden_means_empty_without_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/notifications/my"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;

    let center = NotificationCenter::new(&config_for(&mock_server));
    assert_eq!(center.reload("token").await.unwrap(), 0);
    assert!(center.notifications().await.is_empty());
}

#[tokio::test]
async fn test_server_error_clears_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/notifications/my"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockApiResponses::notification_response("n1", "Hello", false)
        ])))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/notifications/my"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let center = NotificationCenter::new(&config_for(&mock_server));
    center.reload("token").await.unwrap();
    assert_eq!(center.notifications().await.len(), 1);

    assert_matches!(center.reload("token").await, Err(ApiError::Server { status: 500, .. }));
    assert!(center.notifications().await.is_empty());
}

#[tokio::test]
async fn test_mark_as_read_twice_keeps_one_read_record() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/notifications/my"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                MockApiResponses::notification_response("n1", "Hello", false),
                MockApiResponses::notification_response("n2", "Again", false)
            ]
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/notifications/n1/read"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&mock_server)
        .await;

    let center = NotificationCenter::new(&config_for(&mock_server));
    center.reload("token").await.unwrap();

    center.mark_as_read("n1", "token").await.unwrap();
    center.mark_as_read("n1", "token").await.unwrap();

    let items = center.notifications().await;
    let matching: Vec<_> = items.iter().filter(|n| n.id == "n1").collect();
    assert_eq!(matching.len(), 1);
    assert!(matching[0].read);
    assert_eq!(center.unread_count().await, 1);
}

#[tokio::test]
async fn test_mark_all_as_read() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/notifications/my"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockApiResponses::notification_response("n1", "Hello", false),
            MockApiResponses::notification_response("n2", "Again", false)
        ])))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/notifications/read-all"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let center = NotificationCenter::new(&config_for(&mock_server));
    center.reload("token").await.unwrap();
    center.mark_all_as_read("token").await.unwrap();
    assert_eq!(center.unread_count().await, 0);
}

#[tokio::test]
async fn test_poller_follows_session() {
    let mock_server = MockServer::start().await;
    let user = TestUser::patient("patient@example.com");

    Mock::given(method("GET"))
        .and(path("/api/notifications/my"))
        .and(header("Authorization", format!("Bearer {}", user.token()).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockApiResponses::notification_response("n1", "Hello", false)
        ])))
        .mount(&mock_server)
        .await;

    let center = NotificationCenter::new(&config_for(&mock_server));
    let (sessions, receiver) = watch::channel(Session::logged_out());
    let shutdown = CancellationToken::new();
    let handle = center.spawn(receiver, shutdown.clone());

    let watched = &center;

    sessions.send_replace(Session::logged_in(user.to_user(), user.token()));
    wait_until(|| async move { watched.unread_count().await == 1 }).await;

    sessions.send_replace(Session::logged_out());
    wait_until(|| async move { watched.notifications().await.is_empty() }).await;

    shutdown.cancel();
    handle.await.unwrap();
}

#[tokio::test]
async fn test_service_uses_bare_array() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/notifications/my"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockApiResponses::notification_response("n1", "Hello", true)
        ])))
        .mount(&mock_server)
        .await;

    let service = NotificationService::new(&config_for(&mock_server));
    let items = service.my_notifications("token").await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].created_on.as_deref(), Some("2024-01-15T10:00:00"));
}

async fn mount_slow_list(mock_server: &MockServer, delay: Duration) {
    Mock::given(method("GET"))
        .and(path("/api/notifications/my"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([MockApiResponses::notification_response("n1", "Hello", false)]))
                .set_delay(delay),
        )
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_load_finishing_after_logout_is_discarded() {
    let mock_server = MockServer::start().await;
    let user = TestUser::patient("patient@example.com");
    mount_slow_list(&mock_server, Duration::from_millis(500)).await;

    let center = NotificationCenter::new(&config_for(&mock_server));
    let (sessions, receiver) = watch::channel(Session::logged_out());
    let shutdown = CancellationToken::new();
    let handle = center.spawn(receiver, shutdown.clone());

    sessions.send_replace(Session::logged_in(user.to_user(), user.token()));
    tokio::time::sleep(Duration::from_millis(100)).await;
    sessions.send_replace(Session::logged_out());

    // well past the moment the delayed response arrives
    for _ in 0..50 {
        assert!(center.notifications().await.is_empty());
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    shutdown.cancel();
    handle.await.unwrap();
}

#[tokio::test]
async fn test_shutdown_does_not_wait_for_in_flight_load() {
    let mock_server = MockServer::start().await;
    let user = TestUser::patient("patient@example.com");
    mount_slow_list(&mock_server, Duration::from_secs(3)).await;

    let center = NotificationCenter::new(&config_for(&mock_server));
    let (sessions, receiver) = watch::channel(Session::logged_in(user.to_user(), user.token()));
    let shutdown = CancellationToken::new();
    let handle = center.spawn(receiver, shutdown.clone());

    tokio::time::sleep(Duration::from_millis(100)).await;
    shutdown.cancel();

    tokio::time::timeout(Duration::from_secs(1), handle)
        .await
        .expect("poller kept waiting on the request")
        .unwrap();
    assert!(center.notifications().await.is_empty());
    drop(sessions);
}
