// =====================================================================================
// VALIDATION - FORM INPUT CHECKS SHARED BY THE PAGES
// =====================================================================================

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

pub type ValidationResult = Result<(), ValidationError>;

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
}

fn name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[\p{L}\s'-]+$").expect("valid name regex"))
}

fn time_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([0-1][0-9]|2[0-3]):[0-5][0-9]$").expect("valid time regex"))
}

fn uuid_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
            .expect("valid uuid regex")
    })
}

fn url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([a-zA-Z][a-zA-Z0-9+.-]*):(//)?([^\s/?#]+)\S*$").expect("valid url regex")
    })
}

pub fn validate_email(email: &str) -> ValidationResult {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new("Email is required"));
    }

    if !email_regex().is_match(trimmed) {
        return Err(ValidationError::new("Invalid email format"));
    }

    if trimmed.chars().count() > 255 {
        return Err(ValidationError::new("Email is too long (max 255 characters)"));
    }

    Ok(())
}

pub fn validate_password(password: &str, min_length: usize) -> ValidationResult {
    if password.is_empty() {
        return Err(ValidationError::new("Password is required"));
    }

    let length = password.chars().count();
    if length < min_length {
        return Err(ValidationError::new(format!(
            "Password must be at least {} characters long",
            min_length
        )));
    }

    if length > 128 {
        return Err(ValidationError::new("Password is too long (max 128 characters)"));
    }

    Ok(())
}

pub fn validate_password_match(password: &str, repeat_password: &str) -> ValidationResult {
    if password.is_empty() || repeat_password.is_empty() {
        return Err(ValidationError::new("Both password fields are required"));
    }

    if password != repeat_password {
        return Err(ValidationError::new("Passwords do not match"));
    }

    Ok(())
}

pub fn validate_name(name: &str, field_name: &str) -> ValidationResult {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(format!("{} is required", field_name)));
    }

    let length = trimmed.chars().count();
    if length < 2 {
        return Err(ValidationError::new(format!(
            "{} must be at least 2 characters long",
            field_name
        )));
    }

    if length > 50 {
        return Err(ValidationError::new(format!(
            "{} is too long (max 50 characters)",
            field_name
        )));
    }

    if !name_regex().is_match(trimmed) {
        return Err(ValidationError::new(format!("{} contains invalid characters", field_name)));
    }

    Ok(())
}

/// Optional URLs pass when blank.
pub fn validate_url(url: &str, required: bool) -> ValidationResult {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        if required {
            return Err(ValidationError::new("URL is required"));
        }
        return Ok(());
    }

    let captures = url_regex()
        .captures(trimmed)
        .ok_or_else(|| ValidationError::new("Invalid URL format"))?;

    let scheme = captures[1].to_ascii_lowercase();
    if scheme != "http" && scheme != "https" {
        return Err(ValidationError::new("URL must start with http:// or https://"));
    }

    if captures.get(2).is_none() {
        return Err(ValidationError::new("Invalid URL format"));
    }

    Ok(())
}

/// `HH:MM`, 24-hour clock.
pub fn validate_time(time: &str) -> ValidationResult {
    if time.is_empty() {
        return Err(ValidationError::new("Time is required"));
    }

    if !time_regex().is_match(time) {
        return Err(ValidationError::new("Invalid time format (expected HH:MM)"));
    }

    Ok(())
}

pub fn validate_time_range(start_time: &str, end_time: &str) -> ValidationResult {
    validate_time(start_time)?;
    validate_time(end_time)?;

    if minutes_of_day(start_time) >= minutes_of_day(end_time) {
        return Err(ValidationError::new("Start time must be before end time"));
    }

    Ok(())
}

fn minutes_of_day(time: &str) -> u32 {
    let mut parts = time.split(':').map(|p| p.parse::<u32>().unwrap_or(0));
    let hours = parts.next().unwrap_or(0);
    let minutes = parts.next().unwrap_or(0);
    hours * 60 + minutes
}

pub fn validate_uuid(id: &str) -> ValidationResult {
    if id.is_empty() {
        return Err(ValidationError::new("ID is required"));
    }

    if !uuid_regex().is_match(id) {
        return Err(ValidationError::new("Invalid ID format"));
    }

    Ok(())
}

pub fn validate_day_of_week(day_of_week: i64) -> ValidationResult {
    if !(0..=6).contains(&day_of_week) {
        return Err(ValidationError::new("Invalid day of week (must be 0-6)"));
    }
    Ok(())
}

pub fn validate_required(value: &str, field_name: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return Err(ValidationError::new(format!("{} is required", field_name)));
    }
    Ok(())
}
