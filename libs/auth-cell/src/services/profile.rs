use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use shared_api::{ApiClient, Method};
use shared_config::ClientConfig;
use shared_models::auth::User;
use shared_utils::validation::{validate_name, validate_password, validate_required, validate_url};

use crate::error::AuthError;
use crate::services::auth::MIN_PASSWORD_LENGTH;
use crate::services::session::SessionStore;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub address: String,
}

impl ProfileUpdate {
    /// Pre-fill from the loaded profile.
    pub fn from_user(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            image_url: user.image_url.clone().unwrap_or_default(),
            country: user.country.clone().unwrap_or_default(),
            address: user.address.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<(), AuthError> {
        validate_name(&self.first_name, "First name")?;
        validate_name(&self.last_name, "Last name")?;
        validate_url(&self.image_url, false)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct PasswordChange {
    pub old_password: String,
    pub new_password: String,
    pub repeat_password: String,
}

impl PasswordChange {
    pub fn validate(&self) -> Result<(), AuthError> {
        validate_required(&self.old_password, "Current password")?;
        validate_password(&self.new_password, MIN_PASSWORD_LENGTH)?;
        if self.new_password != self.repeat_password {
            return Err(shared_utils::ValidationError::new("New passwords don't match.").into());
        }
        Ok(())
    }
}

pub struct ProfileService {
    api: ApiClient,
}

impl ProfileService {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            api: ApiClient::new(config),
        }
    }

    pub fn with_client(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn get_profile(&self, auth_token: &str) -> Result<User, AuthError> {
        debug!("Fetching own profile");

        let user = self
            .api
            .request(Method::GET, "/users/me", Some(auth_token), None)
            .await?;
        Ok(user)
    }

    /// Save the profile and refresh the cached session user.
    pub async fn update_profile(
        &self,
        sessions: &SessionStore,
        update: &ProfileUpdate,
    ) -> Result<User, AuthError> {
        update.validate()?;
        let token = sessions.require_token()?;
        debug!("Updating own profile");

        let body = serde_json::to_value(update)
            .map_err(|e| shared_models::ApiError::InvalidRequest(e.to_string()))?;

        let updated: User = self
            .api
            .request(Method::PUT, "/users/me", Some(&token), Some(body))
            .await?;

        sessions.update_user(updated.clone())?;
        Ok(updated)
    }

    pub async fn change_password(
        &self,
        change: &PasswordChange,
        auth_token: &str,
    ) -> Result<(), AuthError> {
        change.validate()?;
        debug!("Changing password");

        let _: Value = self
            .api
            .request(
                Method::PUT,
                "/users/me/change-password",
                Some(auth_token),
                Some(json!({
                    "oldPassword": change.old_password,
                    "newPassword": change.new_password
                })),
            )
            .await?;

        Ok(())
    }
}
