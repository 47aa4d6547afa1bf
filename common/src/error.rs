//! Error types

use thiserror::Error;

use crate::validation::ValidationError;

/// Failure reported by a transport client.
///
/// `Clone + PartialEq` so it can sit inside UI state and be compared in tests.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Non-success HTTP status. `message` is already normalised for display.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The backend could not be reached at all (DNS, refused, CORS, ...).
    #[error("Could not reach the scoring service")]
    Unreachable(String),

    /// The backend answered 2xx with a body we could not decode.
    #[error("Unexpected response from the scoring service: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status if the backend produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Shared error type
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

/// Result alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_status_displays_message_only() {
        let error = ApiError::Status {
            status: 400,
            message: "Upload limit of 5 reached".to_string(),
        };
        assert_eq!(error.to_string(), "Upload limit of 5 reached");
        assert_eq!(error.status(), Some(400));
    }

    #[test]
    fn test_api_error_unreachable_is_generic() {
        let error = ApiError::Unreachable("connection refused".to_string());
        assert_eq!(error.to_string(), "Could not reach the scoring service");
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_error_display_validation_is_transparent() {
        let error: Error = ValidationError::NotPdf.into();
        assert_eq!(error.to_string(), "Only PDF files are allowed");
    }

    #[test]
    fn test_error_display_config() {
        let error = Error::Config("base URL is empty".to_string());
        assert_eq!(error.to_string(), "Config error: base URL is empty");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_error_from_api() {
        let error: Error = ApiError::Decode("missing field `id`".to_string()).into();
        assert!(matches!(error, Error::Api(ApiError::Decode(_))));
    }
}
