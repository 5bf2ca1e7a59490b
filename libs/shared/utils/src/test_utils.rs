use std::sync::Arc;

use serde_json::json;
use uuid::Uuid;

use shared_config::ClientConfig;
use shared_models::auth::{Role, User, UserStatus};

use crate::storage::MemoryStorage;

pub struct TestConfig {
    pub api_base_url: String,
    pub ai_model: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8082/api".to_string(),
            ai_model: "test-model".to_string(),
        }
    }
}

impl TestConfig {
    pub fn with_base_url(api_base_url: &str) -> Self {
        Self {
            api_base_url: api_base_url.to_string(),
            ..Self::default()
        }
    }

    pub fn to_client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::with_base_url(self.api_base_url.clone());
        config.ai_model = self.ai_model.clone();
        config.request_timeout_seconds = 5;
        config
    }

    pub fn memory_storage() -> Arc<MemoryStorage> {
        Arc::new(MemoryStorage::new())
    }
}

pub struct TestUser {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
}

impl Default for TestUser {
    fn default() -> Self {
        Self::new("test@example.com", Role::User)
    }
}

impl TestUser {
    pub fn new(email: &str, role: Role) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            email: email.to_string(),
            role,
        }
    }

    pub fn doctor(email: &str) -> Self {
        Self::new(email, Role::Doctor)
    }

    pub fn patient(email: &str) -> Self {
        Self::new(email, Role::User)
    }

    pub fn assistant(email: &str) -> Self {
        Self::new(email, Role::Assistant)
    }

    pub fn admin(email: &str) -> Self {
        Self::new(email, Role::Admin)
    }

    pub fn to_user(&self) -> User {
        User {
            id: self.id.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            role: self.role,
            status: Some(UserStatus::Active),
            image_url: None,
            country: None,
            address: None,
        }
    }

    pub fn token(&self) -> String {
        format!("test-token-{}", self.id)
    }
}

pub struct MockApiResponses;

impl MockApiResponses {
    pub fn user_response(user: &TestUser) -> serde_json::Value {
        json!({
            "id": user.id,
            "firstName": user.first_name,
            "lastName": user.last_name,
            "email": user.email,
            "role": user.role.as_str(),
            "status": "ACTIVE"
        })
    }

    pub fn auth_response(user: &TestUser) -> serde_json::Value {
        json!({
            "user": Self::user_response(user),
            "token": user.token()
        })
    }

    pub fn doctor_response(doctor_id: &str, works_with_health_insurance: bool) -> serde_json::Value {
        json!({
            "id": doctor_id,
            "firstName": "Ivan",
            "lastName": "Petrov",
            "email": "ivan.petrov@example.com",
            "specialtyId": 8,
            "specialty": "Cardiologist",
            "practiceAddress": "1 Vitosha Blvd, Sofia",
            "pricePrivate": 60.0,
            "worksWithHealthInsurance": works_with_health_insurance,
            "bio": "Cardiologist with 15 years of practice",
            "workingHours": [
                { "dayOfWeek": 1, "startTime": "09:00", "endTime": "17:00" },
                { "dayOfWeek": 3, "startTime": "10:00", "endTime": "14:00" }
            ]
        })
    }

    pub fn appointment_response(
        appointment_id: &str,
        doctor_id: &str,
        patient_id: &str,
        date_time: &str,
    ) -> serde_json::Value {
        json!({
            "id": appointment_id,
            "doctorId": doctor_id,
            "doctorName": "Ivan Petrov",
            "patientId": patient_id,
            "patientName": "Test User",
            "dateTime": date_time,
            "type": "PRIMARY",
            "paymentType": "PRIVATE",
            "status": "BOOKED"
        })
    }

    pub fn notification_response(id: &str, message: &str, read: bool) -> serde_json::Value {
        json!({
            "id": id,
            "message": message,
            "read": read,
            "createdOn": "2024-01-15T10:00:00"
        })
    }

    pub fn error_response(message: &str) -> serde_json::Value {
        json!({
            "message": message
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = TestConfig::default().to_client_config();

        assert_eq!(config.api_base_url, "http://localhost:8082/api");
        assert_eq!(config.ai_model, "test-model");
        assert_eq!(config.request_timeout_seconds, 5);
    }

    #[test]
    fn test_user_creation() {
        let user = TestUser::doctor("doc@example.com");
        assert_eq!(user.email, "doc@example.com");
        assert_eq!(user.role, Role::Doctor);

        let user_model = user.to_user();
        assert_eq!(user_model.email, user.email);
        assert_eq!(user_model.role, Role::Doctor);
        assert_eq!(user_model.id, user.id);
    }

    #[test]
    fn test_auth_response_deserializes_into_user() {
        let user = TestUser::assistant("a@example.com");
        let body = MockApiResponses::auth_response(&user);
        let parsed: User = serde_json::from_value(body["user"].clone()).unwrap();

        assert_eq!(parsed.role, Role::Assistant);
        assert_eq!(body["token"], user.token());
    }
}
