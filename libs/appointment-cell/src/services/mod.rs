pub mod appointment;
pub mod gateway;

pub use appointment::AppointmentService;
pub use gateway::{AppointmentEditor, BookingGateway};
