use thiserror::Error;

/// Failure of a call against the booking REST API, categorised by the HTTP
/// status (or lack of one) the way the pages report it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Authentication error: {0}")]
    Unauthorized(String),

    #[error("Permission denied: {0}")]
    Forbidden(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("API error ({status}): {message}")]
    Status { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Request cancelled")]
    Cancelled,
}

impl ApiError {
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            400 => ApiError::Validation(message),
            401 => ApiError::Unauthorized(message),
            403 => ApiError::Forbidden(message),
            404 => ApiError::NotFound(message),
            409 => ApiError::Conflict(message),
            500..=599 => ApiError::Server { status, message },
            _ => ApiError::Status { status, message },
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Validation(_) => Some(400),
            ApiError::Unauthorized(_) => Some(401),
            ApiError::Forbidden(_) => Some(403),
            ApiError::NotFound(_) => Some(404),
            ApiError::Conflict(_) => Some(409),
            ApiError::Server { status, .. } | ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_forbidden(&self) -> bool {
        matches!(self, ApiError::Forbidden(_))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, ApiError::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_categories() {
        assert_eq!(ApiError::from_status(400, "x"), ApiError::Validation("x".into()));
        assert_eq!(ApiError::from_status(401, "x"), ApiError::Unauthorized("x".into()));
        assert_eq!(ApiError::from_status(403, "x"), ApiError::Forbidden("x".into()));
        assert_eq!(ApiError::from_status(404, "x"), ApiError::NotFound("x".into()));
        assert_eq!(ApiError::from_status(409, "x"), ApiError::Conflict("x".into()));
        assert_eq!(
            ApiError::from_status(503, "down"),
            ApiError::Server { status: 503, message: "down".into() }
        );
        assert_eq!(
            ApiError::from_status(418, "teapot"),
            ApiError::Status { status: 418, message: "teapot".into() }
        );
    }

    #[test]
    fn test_status_round_trip() {
        for code in [400u16, 401, 403, 404, 409, 500, 502, 422] {
            assert_eq!(ApiError::from_status(code, "").status(), Some(code));
        }
        assert_eq!(ApiError::Network("down".into()).status(), None);
        assert!(ApiError::Cancelled.is_cancelled());
    }
}
