use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use shared_api::{extract_list, ApiClient, Method};
use shared_config::ClientConfig;
use shared_models::auth::{Role, User, UserStatus};
use shared_models::error::ApiError;

/// Body of `PUT /admin/users/{id}`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct UserUpdate {
    pub role: Role,
    pub status: UserStatus,
}

pub struct AdminService {
    api: ApiClient,
}

impl AdminService {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            api: ApiClient::new(config),
        }
    }

    pub fn with_client(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn get_all_users(&self, auth_token: &str) -> Result<Vec<User>, ApiError> {
        debug!("Fetching all users");

        let value: Value = self
            .api
            .request(Method::GET, "/admin/users", Some(auth_token), None)
            .await?;

        Ok(extract_list(value, &["data", "users"]))
    }

    pub async fn update_user(
        &self,
        user_id: &str,
        update: UserUpdate,
        auth_token: &str,
    ) -> Result<User, ApiError> {
        debug!("Updating user {} to {} / {}", user_id, update.role, update.status);

        let body = serde_json::to_value(update).map_err(|e| ApiError::InvalidRequest(e.to_string()))?;

        let user: User = self
            .api
            .request(
                Method::PUT,
                &format!("/admin/users/{}", user_id),
                Some(auth_token),
                Some(body),
            )
            .await?;

        info!("User {} is now {} ({:?})", user.id, user.role, user.status);
        Ok(user)
    }

    pub async fn delete_user(&self, user_id: &str, auth_token: &str) -> Result<(), ApiError> {
        debug!("Deleting user {}", user_id);

        let _: Value = self
            .api
            .request(
                Method::DELETE,
                &format!("/admin/users/{}", user_id),
                Some(auth_token),
                None,
            )
            .await?;

        info!("Deleted user {}", user_id);
        Ok(())
    }
}

/// Case-insensitive match on full name, email or role. A blank search keeps
/// everyone.
pub fn filter_users<'a>(users: &'a [User], search: &str) -> Vec<&'a User> {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return users.iter().collect();
    }

    users
        .iter()
        .filter(|user| {
            user.full_name().to_lowercase().contains(&needle)
                || user.email.to_lowercase().contains(&needle)
                || user.role.as_str().to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(first: &str, last: &str, email: &str, role: Role) -> User {
        User {
            id: email.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            role,
            status: Some(UserStatus::Active),
            image_url: None,
            country: None,
            address: None,
        }
    }

    fn sample() -> Vec<User> {
        vec![
            user("Maria", "Ivanova", "maria@example.com", Role::User),
            user("Ivan", "Petrov", "ivan@clinic.bg", Role::Doctor),
            user("Elena", "Georgieva", "elena@clinic.bg", Role::Assistant),
        ]
    }

    #[test]
    fn test_blank_search_keeps_all() {
        let users = sample();
        assert_eq!(filter_users(&users, "  ").len(), 3);
    }

    #[test]
    fn test_search_by_name_email_and_role() {
        let users = sample();

        let by_name = filter_users(&users, "petrov");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].first_name, "Ivan");

        assert_eq!(filter_users(&users, "CLINIC.BG").len(), 2);

        let by_role = filter_users(&users, "assistant");
        assert_eq!(by_role.len(), 1);
        assert_eq!(by_role[0].first_name, "Elena");
    }

    #[test]
    fn test_update_body_shape() {
        let body = serde_json::to_value(UserUpdate {
            role: Role::Doctor,
            status: UserStatus::Blocked,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"role": "DOCTOR", "status": "BLOCKED"}));
    }
}
