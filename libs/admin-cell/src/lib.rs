pub mod service;

pub use service::{filter_users, AdminService, UserUpdate};
