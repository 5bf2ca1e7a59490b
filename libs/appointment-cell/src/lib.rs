pub mod cache;
pub mod forms;
pub mod models;
pub mod services;

pub use cache::{AppointmentCache, AppointmentChange};
pub use forms::{BookingForm, EditForm, PatientTarget, ValidatedBooking};
pub use models::*;
pub use services::*;
