use std::env;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8082/api";
pub const DEFAULT_AI_MODEL: &str = "claude-haiku-4.5";
pub const DEFAULT_NOTIFICATION_POLL_SECONDS: u64 = 60;
pub const DEFAULT_SLOT_MINUTES: u32 = 20;
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub ai_model: String,
    pub storage_dir: PathBuf,
    pub notification_poll_seconds: u64,
    pub slot_minutes: u32,
    pub request_timeout_seconds: u64,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        let config = Self {
            api_base_url: env::var("BOOKING_API_BASE_URL")
                .unwrap_or_else(|_| {
                    warn!("BOOKING_API_BASE_URL not set, using default");
                    DEFAULT_API_BASE_URL.to_string()
                }),
            ai_model: env::var("BOOKING_AI_MODEL")
                .unwrap_or_else(|_| DEFAULT_AI_MODEL.to_string()),
            storage_dir: env::var("BOOKING_STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_storage_dir()),
            notification_poll_seconds: parse_env(
                "BOOKING_NOTIFICATION_POLL_SECONDS",
                DEFAULT_NOTIFICATION_POLL_SECONDS,
            ),
            slot_minutes: parse_env("BOOKING_SLOT_MINUTES", DEFAULT_SLOT_MINUTES),
            request_timeout_seconds: parse_env(
                "BOOKING_REQUEST_TIMEOUT_SECONDS",
                DEFAULT_REQUEST_TIMEOUT_SECONDS,
            ),
        };

        if !config.is_configured() {
            warn!("Client not fully configured - API base URL is empty");
        }

        config
    }

    /// Config pointing at an explicit backend, everything else defaulted.
    pub fn with_base_url(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            ai_model: DEFAULT_AI_MODEL.to_string(),
            storage_dir: default_storage_dir(),
            notification_poll_seconds: DEFAULT_NOTIFICATION_POLL_SECONDS,
            slot_minutes: DEFAULT_SLOT_MINUTES,
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.api_base_url.trim().is_empty()
    }

    pub fn notification_poll_interval(&self) -> Duration {
        Duration::from_secs(self.notification_poll_seconds.max(1))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

fn default_storage_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(env::temp_dir)
        .join("praxis-booking")
}

fn parse_env<T: std::str::FromStr + Copy>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{} has an invalid value '{}', using default", key, raw);
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_base_url_defaults() {
        let config = ClientConfig::with_base_url("http://localhost:9999/api");

        assert_eq!(config.api_base_url, "http://localhost:9999/api");
        assert_eq!(config.ai_model, DEFAULT_AI_MODEL);
        assert_eq!(config.slot_minutes, 20);
        assert_eq!(config.notification_poll_interval(), Duration::from_secs(60));
        assert!(config.is_configured());
    }

    #[test]
    fn test_empty_base_url_is_not_configured() {
        let config = ClientConfig::with_base_url("  ");
        assert!(!config.is_configured());
    }

    #[test]
    fn test_poll_interval_never_zero() {
        let mut config = ClientConfig::with_base_url("http://localhost");
        config.notification_poll_seconds = 0;
        assert_eq!(config.notification_poll_interval(), Duration::from_secs(1));
    }
}
