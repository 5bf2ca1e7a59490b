use std::fmt;

use thiserror::Error;

use shared_models::error::ApiError;

pub use shared_models::appointment::{
    Appointment, AppointmentPayload, AppointmentStatus, AppointmentType, PaymentType,
};

/// Form field a validation failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingField {
    Doctor,
    Patient,
    Slot,
    Date,
    Type,
    Payment,
}

impl fmt::Display for BookingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BookingField::Doctor => "doctor",
            BookingField::Patient => "patient",
            BookingField::Slot => "slot",
            BookingField::Date => "date",
            BookingField::Type => "type",
            BookingField::Payment => "payment",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BookingError {
    /// Rejected before any request was made.
    #[error("{message}")]
    Invalid {
        field: Option<BookingField>,
        message: String,
    },

    #[error("validation error")]
    Validation,

    #[error("slot already taken")]
    SlotTaken,

    #[error("permission denied")]
    PermissionDenied,

    #[error("server error")]
    Server,

    #[error("network error")]
    Network,

    #[error("{0}")]
    Failed(String),

    #[error("This form has already been submitted")]
    AlreadySubmitted,

    #[error("Request cancelled")]
    Cancelled,
}

pub const BOOKING_FAILED: &str = "Failed to book appointment.";
pub const UPDATE_FAILED: &str = "Failed to update appointment.";

impl BookingError {
    pub fn invalid(field: BookingField, message: impl Into<String>) -> Self {
        BookingError::Invalid {
            field: Some(field),
            message: message.into(),
        }
    }

    pub fn field(&self) -> Option<BookingField> {
        match self {
            BookingError::Invalid { field, .. } => *field,
            _ => None,
        }
    }

    /// Map a failed request, using `fallback` for anything uncategorised.
    pub fn from_api(error: ApiError, fallback: &str) -> Self {
        match error {
            ApiError::Validation(_) => BookingError::Validation,
            ApiError::Conflict(_) => BookingError::SlotTaken,
            ApiError::Forbidden(_) => BookingError::PermissionDenied,
            ApiError::Server { .. } => BookingError::Server,
            ApiError::Network(_) => BookingError::Network,
            ApiError::Cancelled => BookingError::Cancelled,
            _ => BookingError::Failed(fallback.to_string()),
        }
    }

    pub fn translation_key(&self) -> &'static str {
        match self {
            BookingError::Invalid { field, .. } => match field {
                Some(BookingField::Doctor) => "booking.invalid_doctor",
                Some(BookingField::Patient) => "booking.invalid_patient",
                Some(BookingField::Slot) => "booking.select_slot",
                Some(BookingField::Date) => "booking.invalid_date",
                Some(BookingField::Type) => "booking.invalid_type",
                Some(BookingField::Payment) => "booking.invalid_payment",
                None => "booking.failed",
            },
            BookingError::Validation => "booking.validation_error",
            BookingError::SlotTaken => "booking.slot_taken",
            BookingError::PermissionDenied => "booking.permission_denied",
            BookingError::Server => "booking.server_error",
            BookingError::Network => "booking.network_error",
            BookingError::Failed(_) | BookingError::AlreadySubmitted | BookingError::Cancelled => {
                "booking.failed"
            }
        }
    }
}

impl From<ApiError> for BookingError {
    fn from(error: ApiError) -> Self {
        BookingError::from_api(error, BOOKING_FAILED)
    }
}
