pub mod appointment;
pub mod auth;
pub mod datetime;
pub mod error;

pub use appointment::{Appointment, AppointmentPayload, AppointmentStatus, AppointmentType, PaymentType};
pub use auth::{AuthResponse, LoginRequest, RegisterRequest, Role, Session, User, UserStatus};
pub use error::ApiError;
