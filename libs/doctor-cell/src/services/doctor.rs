use chrono::{Duration, NaiveDateTime};
use serde_json::{json, Value};
use tracing::{debug, info};

use shared_api::{extract_list, ApiClient, Method};
use shared_config::ClientConfig;
use shared_models::appointment::{Appointment, AppointmentPayload};
use shared_models::auth::User;
use shared_models::error::ApiError;
use shared_utils::dates::to_utc_iso_string;
use shared_utils::validation::validate_day_of_week;

use crate::models::{Doctor, WorkingHourEntry};
use crate::services::availability::WorkingSchedule;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Earlier,
    Later,
}

impl MoveDirection {
    /// Shift `date_time` by one slot in this direction.
    pub fn apply(&self, date_time: NaiveDateTime, slot_minutes: u32) -> NaiveDateTime {
        let step = Duration::minutes(i64::from(slot_minutes));
        match self {
            MoveDirection::Earlier => date_time - step,
            MoveDirection::Later => date_time + step,
        }
    }
}

pub struct DoctorService {
    api: ApiClient,
}

impl DoctorService {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            api: ApiClient::new(config),
        }
    }

    pub fn with_client(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    // =====================================================================================
    // CATALOG
    // =====================================================================================

    /// List doctors, forwarding any catalog query parameters as-is.
    pub async fn list_doctors(
        &self,
        params: &[(&str, String)],
        auth_token: &str,
    ) -> Result<Vec<Doctor>, ApiError> {
        debug!("Listing doctors with {} params", params.len());

        let value: Value = self
            .api
            .request_with_query(Method::GET, "/doctors", Some(auth_token), params, None)
            .await?;

        Ok(extract_list(value, &["data", "doctors"]))
    }

    pub async fn get_doctor(&self, doctor_id: &str, auth_token: &str) -> Result<Doctor, ApiError> {
        debug!("Fetching doctor {}", doctor_id);

        self.api
            .request(Method::GET, &format!("/doctors/{}", doctor_id), Some(auth_token), None)
            .await
    }

    // =====================================================================================
    // SELF-SERVICE (signed-in doctor)
    // =====================================================================================

    pub async fn get_my_profile(&self, auth_token: &str) -> Result<Doctor, ApiError> {
        debug!("Fetching own doctor profile");

        self.api.request(Method::GET, "/doctor/me", Some(auth_token), None).await
    }

    pub async fn get_my_working_hours(&self, auth_token: &str) -> Result<WorkingSchedule, ApiError> {
        debug!("Fetching own working hours");

        let value: Value = self
            .api
            .request(Method::GET, "/doctor/working-hours", Some(auth_token), None)
            .await?;

        Ok(WorkingSchedule::from_entries(extract_list::<WorkingHourEntry>(
            value,
            &["workingHours", "data"],
        )))
    }

    /// Replace the whole weekly schedule. Returns the schedule as stored.
    pub async fn update_my_working_hours(
        &self,
        schedule: &WorkingSchedule,
        auth_token: &str,
    ) -> Result<WorkingSchedule, ApiError> {
        debug!("Saving {} working hour entries", schedule.len());

        let body = serde_json::to_value(schedule.entries())
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;

        let value: Value = self
            .api
            .request(Method::PUT, "/doctor/working-hours", Some(auth_token), Some(body))
            .await?;

        info!("Working hours updated");
        Ok(WorkingSchedule::from_entries(extract_list::<WorkingHourEntry>(
            value,
            &["workingHours", "data"],
        )))
    }

    pub async fn delete_working_hours_by_day(
        &self,
        day_of_week: u8,
        auth_token: &str,
    ) -> Result<(), ApiError> {
        debug!("Deleting working hours for day {}", day_of_week);

        validate_day_of_week(i64::from(day_of_week)).map_err(|e| ApiError::InvalidRequest(e.to_string()))?;

        let _: Value = self
            .api
            .request(
                Method::DELETE,
                &format!("/doctor/working-hours/{}", day_of_week),
                Some(auth_token),
                None,
            )
            .await?;

        Ok(())
    }

    pub async fn get_my_appointments(&self, auth_token: &str) -> Result<Vec<Appointment>, ApiError> {
        debug!("Fetching doctor appointments");

        let value: Value = self
            .api
            .request(Method::GET, "/doctor/appointments", Some(auth_token), None)
            .await?;

        Ok(extract_list(value, &["data", "appointments"]))
    }

    /// Shift an appointment by one slot. The new start goes out as a UTC instant.
    pub async fn move_appointment(
        &self,
        appointment: &Appointment,
        direction: MoveDirection,
        slot_minutes: u32,
        auth_token: &str,
    ) -> Result<Appointment, ApiError> {
        let new_date_time = direction.apply(appointment.date_time, slot_minutes);
        debug!("Moving appointment {} to {}", appointment.id, new_date_time);

        let updated: Appointment = self
            .api
            .request(
                Method::PUT,
                &format!("/doctor/appointments/{}/move", appointment.id),
                Some(auth_token),
                Some(json!({ "newDateTime": to_utc_iso_string(&new_date_time) })),
            )
            .await?;

        info!("Appointment {} moved", updated.id);
        Ok(updated)
    }

    pub async fn update_appointment(
        &self,
        appointment_id: &str,
        payload: &AppointmentPayload,
        auth_token: &str,
    ) -> Result<Appointment, ApiError> {
        debug!("Doctor updating appointment {}", appointment_id);

        let body = serde_json::to_value(payload).map_err(|e| ApiError::InvalidRequest(e.to_string()))?;

        self.api
            .request(
                Method::PUT,
                &format!("/doctor/appointments/{}", appointment_id),
                Some(auth_token),
                Some(body),
            )
            .await
    }

    pub async fn cancel_appointment(&self, appointment_id: &str, auth_token: &str) -> Result<(), ApiError> {
        debug!("Doctor cancelling appointment {}", appointment_id);

        let _: Value = self
            .api
            .request(
                Method::DELETE,
                &format!("/doctor/appointments/{}", appointment_id),
                Some(auth_token),
                None,
            )
            .await?;

        Ok(())
    }

    pub async fn update_my_specialty(&self, specialty_id: u32, auth_token: &str) -> Result<Doctor, ApiError> {
        debug!("Updating own specialty to {}", specialty_id);

        self.api
            .request(
                Method::PUT,
                "/doctor/me/specialty",
                Some(auth_token),
                Some(json!({ "specialtyId": specialty_id })),
            )
            .await
    }

    // =====================================================================================
    // ASSISTANTS
    // =====================================================================================

    pub async fn get_all_assistants(&self, auth_token: &str) -> Result<Vec<User>, ApiError> {
        debug!("Fetching assistants");

        let value: Value = self
            .api
            .request(Method::GET, "/doctors/assistants", Some(auth_token), None)
            .await?;

        Ok(extract_list(value, &["data", "assistants"]))
    }

    /// Assign (or with `None`, clear) the signed-in doctor's assistant.
    pub async fn update_my_assistant(
        &self,
        assistant_id: Option<&str>,
        auth_token: &str,
    ) -> Result<(), ApiError> {
        debug!("Updating own assistant to {:?}", assistant_id);

        let _: Value = self
            .api
            .request(
                Method::PUT,
                "/doctors/me/assistant",
                Some(auth_token),
                Some(json!({ "assistantId": assistant_id })),
            )
            .await?;

        Ok(())
    }
}
