pub mod error;
pub mod routing;
pub mod services;

pub use error::AuthError;
pub use routing::{navigation, resolve, Access, NavLink, RouteDecision, View};
pub use services::*;
