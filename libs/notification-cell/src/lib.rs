pub mod models;
pub mod services;

pub use models::Notification;
pub use services::*;
