use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

use appointment_cell::{Appointment, AppointmentEditor, AppointmentPayload, BookingGateway};
use doctor_cell::Doctor;
use shared_api::{extract_list, ApiClient, Method};
use shared_config::ClientConfig;
use shared_models::auth::User;
use shared_models::error::ApiError;

/// Endpoints for an assistant managing the calendars of the doctors they
/// work for.
pub struct AssistantService {
    api: ApiClient,
}

impl AssistantService {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            api: ApiClient::new(config),
        }
    }

    pub fn with_client(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn get_my_doctors(&self, auth_token: &str) -> Result<Vec<Doctor>, ApiError> {
        debug!("Fetching assistant's doctors");

        let value: Value = self
            .api
            .request(Method::GET, "/assistant/doctors", Some(auth_token), None)
            .await?;

        Ok(extract_list(value, &["data", "doctors"]))
    }

    pub async fn get_doctor_appointments(
        &self,
        doctor_id: &str,
        auth_token: &str,
    ) -> Result<Vec<Appointment>, ApiError> {
        debug!("Fetching appointments of doctor {}", doctor_id);

        let value: Value = self
            .api
            .request(
                Method::GET,
                &format!("/assistant/doctor/{}/appointments", doctor_id),
                Some(auth_token),
                None,
            )
            .await?;

        Ok(extract_list(value, &["data", "appointments"]))
    }

    pub async fn create_appointment(
        &self,
        doctor_id: &str,
        payload: &AppointmentPayload,
        auth_token: &str,
    ) -> Result<Appointment, ApiError> {
        debug!("Assistant booking with doctor {} at {}", doctor_id, payload.date_time);

        let body = serde_json::to_value(payload).map_err(|e| ApiError::InvalidRequest(e.to_string()))?;

        let appointment: Appointment = self
            .api
            .request(
                Method::POST,
                &format!("/assistant/doctor/{}/appointments", doctor_id),
                Some(auth_token),
                Some(body),
            )
            .await?;

        info!("Assistant created appointment {}", appointment.id);
        Ok(appointment)
    }

    pub async fn update_appointment(
        &self,
        appointment_id: &str,
        payload: &AppointmentPayload,
        auth_token: &str,
    ) -> Result<Appointment, ApiError> {
        debug!("Assistant updating appointment {}", appointment_id);

        let body = serde_json::to_value(payload).map_err(|e| ApiError::InvalidRequest(e.to_string()))?;

        self.api
            .request(
                Method::PUT,
                &format!("/assistant/appointments/{}", appointment_id),
                Some(auth_token),
                Some(body),
            )
            .await
    }

    pub async fn cancel_appointment(&self, appointment_id: &str, auth_token: &str) -> Result<(), ApiError> {
        debug!("Assistant cancelling appointment {}", appointment_id);

        let _: Value = self
            .api
            .request(
                Method::DELETE,
                &format!("/assistant/appointments/{}", appointment_id),
                Some(auth_token),
                None,
            )
            .await?;

        Ok(())
    }

    /// Patients the assistant may book for. The list may arrive bare or wrapped.
    pub async fn get_all_users(&self, auth_token: &str) -> Result<Vec<User>, ApiError> {
        debug!("Fetching users for assistant");

        let value: Value = self
            .api
            .request(Method::GET, "/assistant/users", Some(auth_token), None)
            .await?;

        Ok(extract_list(value, &["data", "users"]))
    }
}

#[async_trait]
impl BookingGateway for AssistantService {
    async fn create_appointment(
        &self,
        doctor_id: &str,
        payload: &AppointmentPayload,
        auth_token: &str,
    ) -> Result<Appointment, ApiError> {
        AssistantService::create_appointment(self, doctor_id, payload, auth_token).await
    }
}

#[async_trait]
impl AppointmentEditor for AssistantService {
    async fn edit_appointment(
        &self,
        appointment_id: &str,
        payload: &AppointmentPayload,
        auth_token: &str,
    ) -> Result<Appointment, ApiError> {
        self.update_appointment(appointment_id, payload, auth_token).await
    }
}
