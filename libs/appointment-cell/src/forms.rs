// =====================================================================================
// BOOKING AND EDIT FORMS
// =====================================================================================

use chrono::NaiveDateTime;
use tracing::{debug, error, info, warn};

use doctor_cell::Doctor;
use shared_models::datetime::{parse_local_date_time, to_local_date_time_string};
use shared_utils::validation::validate_uuid;

use crate::models::{
    Appointment, AppointmentPayload, AppointmentType, BookingError, BookingField, PaymentType, UPDATE_FAILED,
};
use crate::services::gateway::{AppointmentEditor, BookingGateway};

/// Patient an assistant books for: an account id, or a free-text name for
/// walk-ins without an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatientTarget {
    Id(String),
    Name(String),
}

/// A booking that passed every client-side check.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedBooking {
    pub doctor_id: String,
    pub payload: AppointmentPayload,
}

/// Shared checks for slot, date, type and payment, in that order.
fn validate_selection(
    slot: Option<&str>,
    appointment_type: &str,
    payment_type: &str,
    works_with_health_insurance: bool,
) -> Result<(NaiveDateTime, AppointmentType, PaymentType), BookingError> {
    let slot = slot
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| BookingError::invalid(BookingField::Slot, "Please select a time slot."))?;

    let date_time = parse_local_date_time(slot)
        .ok_or_else(|| BookingError::invalid(BookingField::Date, "Invalid date."))?;

    let appointment_type: AppointmentType = appointment_type
        .parse()
        .map_err(|e: String| BookingError::invalid(BookingField::Type, e))?;

    let payment_type: PaymentType = payment_type
        .parse()
        .map_err(|e: String| BookingError::invalid(BookingField::Payment, e))?;

    if payment_type == PaymentType::Nhif && !works_with_health_insurance {
        return Err(BookingError::invalid(
            BookingField::Payment,
            "This doctor does not work with NHIF.",
        ));
    }

    Ok((date_time, appointment_type, payment_type))
}

/// State of the booking form on a doctor's page (or an assistant's dashboard).
/// Fields hold raw selections; nothing is trusted until `validate` passes.
#[derive(Debug, Clone)]
pub struct BookingForm {
    pub doctor_id: String,
    pub works_with_health_insurance: bool,
    pub patient: Option<PatientTarget>,
    pub slot: Option<String>,
    pub appointment_type: String,
    pub payment_type: String,
    error: Option<BookingError>,
    submitted: bool,
}

impl BookingForm {
    pub fn new(doctor_id: impl Into<String>, works_with_health_insurance: bool) -> Self {
        Self {
            doctor_id: doctor_id.into(),
            works_with_health_insurance,
            patient: None,
            slot: None,
            appointment_type: AppointmentType::Primary.as_str().to_string(),
            payment_type: PaymentType::Private.as_str().to_string(),
            error: None,
            submitted: false,
        }
    }

    pub fn for_doctor(doctor: &Doctor) -> Self {
        Self::new(doctor.id.clone(), doctor.works_with_health_insurance)
    }

    /// Form used by an assistant booking on a patient's behalf.
    pub fn for_patient(doctor: &Doctor, patient: PatientTarget) -> Self {
        Self {
            patient: Some(patient),
            ..Self::for_doctor(doctor)
        }
    }

    pub fn select_slot(&mut self, slot: NaiveDateTime) {
        self.slot = Some(to_local_date_time_string(&slot));
        self.error = None;
    }

    pub fn error(&self) -> Option<&BookingError> {
        self.error.as_ref()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Clear the selection and allow another booking with the same doctor.
    pub fn reset(&mut self) {
        self.slot = None;
        self.error = None;
        self.submitted = false;
    }

    pub fn validate(&self) -> Result<ValidatedBooking, BookingError> {
        validate_uuid(&self.doctor_id)
            .map_err(|_| BookingError::invalid(BookingField::Doctor, "Invalid doctor."))?;

        let (patient_id, patient_name) = match &self.patient {
            None => (None, None),
            Some(PatientTarget::Id(id)) => {
                validate_uuid(id)
                    .map_err(|_| BookingError::invalid(BookingField::Patient, "Invalid patient."))?;
                (Some(id.clone()), None)
            }
            Some(PatientTarget::Name(name)) => {
                if name.trim().is_empty() {
                    return Err(BookingError::invalid(BookingField::Patient, "Patient name is required."));
                }
                (None, Some(name.trim().to_string()))
            }
        };

        let (date_time, appointment_type, payment_type) = validate_selection(
            self.slot.as_deref(),
            &self.appointment_type,
            &self.payment_type,
            self.works_with_health_insurance,
        )?;

        let mut payload = AppointmentPayload::new(&date_time, appointment_type, payment_type);
        payload.patient_id = patient_id;
        payload.patient_name = patient_name;

        Ok(ValidatedBooking {
            doctor_id: self.doctor_id.clone(),
            payload,
        })
    }

    /// Validate and send. `on_success` receives the created appointment; the
    /// form itself never touches any list. A form that already booked refuses
    /// to send again until `reset`.
    pub async fn submit<G, F>(
        &mut self,
        gateway: &G,
        auth_token: &str,
        on_success: F,
    ) -> Result<Appointment, BookingError>
    where
        G: BookingGateway + ?Sized,
        F: FnOnce(&Appointment),
    {
        if self.submitted {
            warn!("Ignoring repeated submit for doctor {}", self.doctor_id);
            return Err(BookingError::AlreadySubmitted);
        }

        self.error = None;

        let booking = match self.validate() {
            Ok(booking) => booking,
            Err(e) => {
                debug!("Booking form invalid: {}", e);
                self.error = Some(e.clone());
                return Err(e);
            }
        };

        match gateway
            .create_appointment(&booking.doctor_id, &booking.payload, auth_token)
            .await
        {
            Ok(appointment) => {
                info!("Booked appointment {}", appointment.id);
                self.submitted = true;
                on_success(&appointment);
                Ok(appointment)
            }
            Err(e) => {
                error!("Booking failed: {}", e);
                let err = BookingError::from(e);
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }
}

/// Edit modal state, pre-filled from an existing appointment.
#[derive(Debug, Clone)]
pub struct EditForm {
    pub appointment_id: String,
    pub works_with_health_insurance: bool,
    pub slot: Option<String>,
    pub appointment_type: String,
    pub payment_type: String,
    error: Option<BookingError>,
}

impl EditForm {
    pub fn from_appointment(appointment: &Appointment, works_with_health_insurance: bool) -> Self {
        Self {
            appointment_id: appointment.id.clone(),
            works_with_health_insurance,
            slot: Some(to_local_date_time_string(&appointment.date_time)),
            appointment_type: appointment.appointment_type.as_str().to_string(),
            payment_type: appointment.payment_type.as_str().to_string(),
            error: None,
        }
    }

    pub fn select_slot(&mut self, slot: NaiveDateTime) {
        self.slot = Some(to_local_date_time_string(&slot));
    }

    pub fn error(&self) -> Option<&BookingError> {
        self.error.as_ref()
    }

    pub fn validate(&self) -> Result<AppointmentPayload, BookingError> {
        let (date_time, appointment_type, payment_type) = validate_selection(
            self.slot.as_deref(),
            &self.appointment_type,
            &self.payment_type,
            self.works_with_health_insurance,
        )?;

        Ok(AppointmentPayload::new(&date_time, appointment_type, payment_type))
    }

    pub async fn submit<E>(&mut self, editor: &E, auth_token: &str) -> Result<Appointment, BookingError>
    where
        E: AppointmentEditor + ?Sized,
    {
        self.error = None;

        let payload = self.validate().inspect_err(|e| self.error = Some(e.clone()))?;

        match editor.edit_appointment(&self.appointment_id, &payload, auth_token).await {
            Ok(updated) => {
                info!("Updated appointment {}", updated.id);
                Ok(updated)
            }
            Err(e) => {
                error!("Updating appointment {} failed: {}", self.appointment_id, e);
                let err = BookingError::from_api(e, UPDATE_FAILED);
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }
}
