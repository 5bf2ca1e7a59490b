use assert_matches::assert_matches;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use admin_cell::{filter_users, AdminService, UserUpdate};
use shared_models::auth::{Role, UserStatus};
use shared_models::error::ApiError;
use shared_utils::test_utils::{MockApiResponses, TestConfig, TestUser};

fn service_for(server: &MockServer) -> AdminService {
    AdminService::new(&TestConfig::with_base_url(&format!("{}/api", server.uri())).to_client_config())
}

#[tokio::test]
async fn test_list_and_search_users() {
    let mock_server = MockServer::start().await;
    let admin = TestUser::admin("admin@example.com");
    let doctor = TestUser::doctor("doctor@example.com");
    let patient = TestUser::patient("patient@example.com");

    Mock::given(method("GET"))
        .and(path("/api/admin/users"))
        .and(header("Authorization", format!("Bearer {}", admin.token()).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                MockApiResponses::user_response(&doctor),
                MockApiResponses::user_response(&patient),
                { "id": "broken" }
            ]
        })))
        .mount(&mock_server)
        .await;

    let users = service_for(&mock_server).get_all_users(&admin.token()).await.unwrap();
    assert_eq!(users.len(), 2);

    let doctors = filter_users(&users, "doctor");
    assert_eq!(doctors.len(), 1);
    assert_eq!(doctors[0].id, doctor.id);
}

#[tokio::test]
async fn test_update_user_role_and_status() {
    let mock_server = MockServer::start().await;
    let patient = TestUser::patient("patient@example.com");

    let mut updated = MockApiResponses::user_response(&patient);
    updated["role"] = json!("ASSISTANT");
    updated["status"] = json!("BLOCKED");

    Mock::given(method("PUT"))
        .and(path(format!("/api/admin/users/{}", patient.id)))
        .and(body_json(json!({"role": "ASSISTANT", "status": "BLOCKED"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(updated))
        .expect(1)
        .mount(&mock_server)
        .await;

    let user = service_for(&mock_server)
        .update_user(
            &patient.id,
            UserUpdate {
                role: Role::Assistant,
                status: UserStatus::Blocked,
            },
            "token",
        )
        .await
        .unwrap();

    assert_eq!(user.role, Role::Assistant);
    assert_eq!(user.status, Some(UserStatus::Blocked));
}

#[tokio::test]
async fn test_delete_user_forbidden() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/admin/users/u1"))
        .respond_with(ResponseTemplate::new(403).set_body_json(MockApiResponses::error_response("Access denied")))
        .mount(&mock_server)
        .await;

    let result = service_for(&mock_server).delete_user("u1", "token").await;
    assert_matches!(result, Err(ApiError::Forbidden(_)));
}
