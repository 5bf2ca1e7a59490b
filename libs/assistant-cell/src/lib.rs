pub mod service;

pub use service::AssistantService;
