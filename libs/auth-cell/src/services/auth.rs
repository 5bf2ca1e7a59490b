use serde_json::json;
use tracing::{debug, info};

use shared_api::{ApiClient, Method};
use shared_config::ClientConfig;
use shared_models::auth::{AuthResponse, RegisterRequest};
use shared_utils::validation::{
    validate_email, validate_name, validate_password, validate_password_match, validate_required,
};

use crate::error::AuthError;

pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Registration page input, including the confirmation field that never
/// leaves the client.
#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub repeat_password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<RegisterRequest, AuthError> {
        validate_name(&self.first_name, "First name")?;
        validate_name(&self.last_name, "Last name")?;
        validate_email(&self.email)?;
        validate_password(&self.password, MIN_PASSWORD_LENGTH)?;
        validate_password_match(&self.password, &self.repeat_password)?;

        Ok(RegisterRequest {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            api: ApiClient::new(config),
        }
    }

    pub fn with_client(api: ApiClient) -> Self {
        Self { api }
    }

    /// Exchange credentials for `{user, token}`.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, AuthError> {
        debug!("Logging in {}", email);

        validate_email(email)?;
        validate_required(password, "Password")?;

        let response: AuthResponse = self
            .api
            .request(
                Method::POST,
                "/auth/login",
                None,
                Some(json!({
                    "email": email.trim(),
                    "password": password
                })),
            )
            .await?;

        info!("User {} logged in as {}", response.user.id, response.user.role);
        Ok(response)
    }

    /// Create an account; the backend answers like a login.
    pub async fn register(&self, form: &RegisterForm) -> Result<AuthResponse, AuthError> {
        let request = form.validate()?;
        debug!("Registering {}", request.email);

        let body = serde_json::to_value(&request)
            .map_err(|e| shared_models::ApiError::InvalidRequest(e.to_string()))?;

        let response: AuthResponse = self
            .api
            .request(Method::POST, "/auth/register", None, Some(body))
            .await?;

        info!("Registered user {}", response.user.id);
        Ok(response)
    }
}
