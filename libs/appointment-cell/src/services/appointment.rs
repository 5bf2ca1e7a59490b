use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

use shared_api::{extract_list, ApiClient, Method};
use shared_config::ClientConfig;
use shared_models::error::ApiError;

use crate::models::{Appointment, AppointmentPayload};
use crate::services::gateway::{AppointmentEditor, BookingGateway};

/// Patient-side appointment endpoints.
pub struct AppointmentService {
    api: ApiClient,
}

impl AppointmentService {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            api: ApiClient::new(config),
        }
    }

    pub fn with_client(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn get_my_appointments(&self, auth_token: &str) -> Result<Vec<Appointment>, ApiError> {
        debug!("Fetching own appointments");

        let value: Value = self
            .api
            .request(Method::GET, "/appointments/my", Some(auth_token), None)
            .await?;

        Ok(extract_list(value, &["data", "appointments"]))
    }

    pub async fn book(
        &self,
        doctor_id: &str,
        payload: &AppointmentPayload,
        auth_token: &str,
    ) -> Result<Appointment, ApiError> {
        debug!("Booking with doctor {} at {}", doctor_id, payload.date_time);

        let body = serde_json::to_value(payload).map_err(|e| ApiError::InvalidRequest(e.to_string()))?;

        let appointment: Appointment = self
            .api
            .request(
                Method::POST,
                &format!("/appointments/book/{}", doctor_id),
                Some(auth_token),
                Some(body),
            )
            .await?;

        info!("Appointment {} booked", appointment.id);
        Ok(appointment)
    }

    pub async fn update(
        &self,
        appointment_id: &str,
        payload: &AppointmentPayload,
        auth_token: &str,
    ) -> Result<Appointment, ApiError> {
        debug!("Updating appointment {}", appointment_id);

        let body = serde_json::to_value(payload).map_err(|e| ApiError::InvalidRequest(e.to_string()))?;

        self.api
            .request(
                Method::PUT,
                &format!("/appointments/{}", appointment_id),
                Some(auth_token),
                Some(body),
            )
            .await
    }

    pub async fn cancel(&self, appointment_id: &str, auth_token: &str) -> Result<(), ApiError> {
        debug!("Cancelling appointment {}", appointment_id);

        let _: Value = self
            .api
            .request(
                Method::DELETE,
                &format!("/appointments/{}", appointment_id),
                Some(auth_token),
                None,
            )
            .await?;

        info!("Appointment {} cancelled", appointment_id);
        Ok(())
    }
}

#[async_trait]
impl BookingGateway for AppointmentService {
    async fn create_appointment(
        &self,
        doctor_id: &str,
        payload: &AppointmentPayload,
        auth_token: &str,
    ) -> Result<Appointment, ApiError> {
        self.book(doctor_id, payload, auth_token).await
    }
}

#[async_trait]
impl AppointmentEditor for AppointmentService {
    async fn edit_appointment(
        &self,
        appointment_id: &str,
        payload: &AppointmentPayload,
        auth_token: &str,
    ) -> Result<Appointment, ApiError> {
        self.update(appointment_id, payload, auth_token).await
    }
}
