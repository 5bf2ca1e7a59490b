pub mod center;
pub mod notification;

pub use center::NotificationCenter;
pub use notification::NotificationService;
