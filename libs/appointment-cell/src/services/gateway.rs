use async_trait::async_trait;

use doctor_cell::DoctorService;
use shared_models::error::ApiError;

use crate::models::{Appointment, AppointmentPayload};

/// Where a booking form sends its request. Patients book through
/// `/appointments`, assistants through their own endpoints.
#[async_trait]
pub trait BookingGateway: Send + Sync {
    async fn create_appointment(
        &self,
        doctor_id: &str,
        payload: &AppointmentPayload,
        auth_token: &str,
    ) -> Result<Appointment, ApiError>;
}

/// Where an edit form sends its update.
#[async_trait]
pub trait AppointmentEditor: Send + Sync {
    async fn edit_appointment(
        &self,
        appointment_id: &str,
        payload: &AppointmentPayload,
        auth_token: &str,
    ) -> Result<Appointment, ApiError>;
}

#[async_trait]
impl AppointmentEditor for DoctorService {
    async fn edit_appointment(
        &self,
        appointment_id: &str,
        payload: &AppointmentPayload,
        auth_token: &str,
    ) -> Result<Appointment, ApiError> {
        self.update_appointment(appointment_id, payload, auth_token).await
    }
}
