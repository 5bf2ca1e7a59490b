pub mod availability;
pub mod doctor;

pub use availability::{generate_daily_slots, parse_working_hours, ScheduleError, WorkingSchedule};
pub use doctor::{DoctorService, MoveDirection};
