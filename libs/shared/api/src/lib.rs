pub mod client;

pub use client::{extract_list, ApiClient};
pub use reqwest::Method;
