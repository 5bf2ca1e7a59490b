use std::sync::Arc;

use assert_matches::assert_matches;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use auth_cell::{
    AuthError, AuthService, PasswordChange, ProfileService, ProfileUpdate, RegisterForm, SessionStore,
    SESSION_STORAGE_KEY,
};
use shared_models::auth::Role;
use shared_models::ApiError;
use shared_utils::storage::{FileStorage, KeyValueStorage, MemoryStorage};
use shared_utils::test_utils::{MockApiResponses, TestConfig, TestUser};

fn config_for(server: &MockServer) -> shared_config::ClientConfig {
    TestConfig::with_base_url(&format!("{}/api", server.uri())).to_client_config()
}

#[tokio::test]
async fn test_login_then_session_survives_restart() {
    let mock_server = MockServer::start().await;
    let user = TestUser::doctor("doctor@example.com");

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(header("X-AI-Model", "test-model"))
        .and(body_json(json!({
            "email": "doctor@example.com",
            "password": "secret1"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(MockApiResponses::auth_response(&user)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let storage: Arc<dyn KeyValueStorage> = Arc::new(FileStorage::new(dir.path()).unwrap());

    let service = AuthService::new(&config_for(&mock_server));
    let response = service.login("doctor@example.com", "secret1").await.unwrap();

    let sessions = SessionStore::restore(storage.clone());
    sessions.login(response.user, response.token).unwrap();
    assert!(sessions.has_role(Role::Doctor));

    let restored = SessionStore::restore(storage);
    assert!(restored.is_authenticated());
    assert_eq!(restored.token(), Some(user.token()));
}

#[tokio::test]
async fn test_login_rejects_bad_email_without_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let service = AuthService::new(&config_for(&mock_server));
    let result = service.login("nope", "secret1").await;

    assert_matches!(result, Err(AuthError::Validation(_)));
}

#[tokio::test]
async fn test_login_unauthorized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(MockApiResponses::error_response("Bad credentials")),
        )
        .mount(&mock_server)
        .await;

    let service = AuthService::new(&config_for(&mock_server));
    let result = service.login("user@example.com", "wrong-password").await;

    assert_matches!(result, Err(AuthError::Api(ApiError::Unauthorized(msg))) if msg == "Bad credentials");
}

#[tokio::test]
async fn test_register_sends_payload_without_confirmation() {
    let mock_server = MockServer::start().await;
    let user = TestUser::patient("new@example.com");

    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .and(body_json(json!({
            "firstName": "Maria",
            "lastName": "Ivanova",
            "email": "new@example.com",
            "password": "secret1"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(MockApiResponses::auth_response(&user)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = AuthService::new(&config_for(&mock_server));
    let form = RegisterForm {
        first_name: "Maria".into(),
        last_name: "Ivanova".into(),
        email: "new@example.com".into(),
        password: "secret1".into(),
        repeat_password: "secret1".into(),
    };

    let response = service.register(&form).await.unwrap();
    assert_eq!(response.user.id, user.id);
}

#[tokio::test]
async fn test_update_profile_refreshes_session_user() {
    let mock_server = MockServer::start().await;
    let user = TestUser::patient("p@example.com");

    let mut updated = MockApiResponses::user_response(&user);
    updated["firstName"] = json!("Petar");

    Mock::given(method("PUT"))
        .and(path("/api/users/me"))
        .and(header("Authorization", format!("Bearer {}", user.token()).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(updated))
        .expect(1)
        .mount(&mock_server)
        .await;

    let storage = Arc::new(MemoryStorage::new());
    let sessions = SessionStore::restore(storage.clone());
    sessions.login(user.to_user(), user.token()).unwrap();

    let service = ProfileService::new(&config_for(&mock_server));
    let mut form = ProfileUpdate::from_user(&user.to_user());
    form.first_name = "Petar".into();

    let result = service.update_profile(&sessions, &form).await.unwrap();

    assert_eq!(result.first_name, "Petar");
    assert_eq!(sessions.current().user.unwrap().first_name, "Petar");
    assert_eq!(sessions.token(), Some(user.token()));

    let raw = storage.get_item(SESSION_STORAGE_KEY).unwrap().unwrap();
    assert!(raw.contains("Petar"));
}

#[tokio::test]
async fn test_change_password_checks_confirmation_first() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/users/me/change-password"))
        .and(body_json(json!({
            "oldPassword": "old-secret",
            "newPassword": "new-secret"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = ProfileService::new(&config_for(&mock_server));

    let mismatch = PasswordChange {
        old_password: "old-secret".into(),
        new_password: "new-secret".into(),
        repeat_password: "other".into(),
    };
    assert_matches!(
        service.change_password(&mismatch, "token").await,
        Err(AuthError::Validation(e)) if e.message() == "New passwords don't match."
    );

    let ok = PasswordChange {
        repeat_password: "new-secret".into(),
        ..mismatch
    };
    service.change_password(&ok, "token").await.unwrap();
}
