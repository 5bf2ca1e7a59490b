use serde_json::Value;
use tracing::debug;

use shared_api::{extract_list, ApiClient, Method};
use shared_config::ClientConfig;
use shared_models::error::ApiError;

use crate::models::Notification;

#[derive(Clone)]
pub struct NotificationService {
    api: ApiClient,
}

impl NotificationService {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            api: ApiClient::new(config),
        }
    }

    pub fn with_client(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn my_notifications(&self, auth_token: &str) -> Result<Vec<Notification>, ApiError> {
        debug!("Fetching notifications");

        let value: Value = self
            .api
            .request(Method::GET, "/notifications/my", Some(auth_token), None)
            .await?;

        Ok(extract_list(value, &["notifications", "data"]))
    }

    pub async fn mark_as_read(&self, notification_id: &str, auth_token: &str) -> Result<(), ApiError> {
        debug!("Marking notification {} as read", notification_id);

        let _: Value = self
            .api
            .request(
                Method::POST,
                &format!("/notifications/{}/read", notification_id),
                Some(auth_token),
                None,
            )
            .await?;

        Ok(())
    }

    pub async fn mark_all_as_read(&self, auth_token: &str) -> Result<(), ApiError> {
        debug!("Marking all notifications as read");

        let _: Value = self
            .api
            .request(Method::POST, "/notifications/read-all", Some(auth_token), None)
            .await?;

        Ok(())
    }
}
