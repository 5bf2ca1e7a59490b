pub mod catalog;
pub mod models;
pub mod services;
pub mod specialties;

pub use catalog::filter_doctors;
pub use models::*;
pub use services::*;
pub use specialties::{specialty_by_id, specialty_id_by_name, specialty_name, Specialty, SPECIALTIES};
