pub mod auth;
pub mod profile;
pub mod session;

pub use auth::{AuthService, RegisterForm};
pub use profile::{PasswordChange, ProfileService, ProfileUpdate};
pub use session::{SessionStore, SESSION_STORAGE_KEY};
