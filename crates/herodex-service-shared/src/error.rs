//! The JSON error envelope for the Herodex HTTP boundary.
//!
//! Every recognized failure leaves the service as
//! `{message, statusCode, status}` with `status` fixed to `"error"`.
//! Anything the core does not raise itself (malformed JSON, panics) is left
//! to axum's own fallback behavior.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use herodex_lib::Error as LibError;

/// Serialized error body returned for recognized failures.
///
/// # Example
///
/// ```
/// use herodex_service_shared::ApiError;
///
/// let error = ApiError::conflict("Superhero with this name already exists");
/// assert_eq!(error.status_code, 409);
/// assert_eq!(error.status, "error");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Human-readable description of the failure.
    pub message: String,

    /// HTTP status code for this failure.
    pub status_code: u16,

    /// Short machine-readable status, always `"error"`.
    pub status: String,
}

impl ApiError {
    /// Create an error body with the given message and status code.
    pub fn new(message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            message: message.into(),
            status_code: status.as_u16(),
            status: "error".to_string(),
        }
    }

    /// Create a 400 Bad Request error for a failed schema check.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::BAD_REQUEST)
    }

    /// Create a 409 Conflict error for a uniqueness violation.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::CONFLICT)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.status_code)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Convert library errors to the wire envelope.
///
/// This is the single place where the core taxonomy meets HTTP status
/// codes; handlers propagate `herodex_lib::Error` untouched and rely on
/// this mapping (usually through the `From` impl and `?`).
pub fn from_lib_error(error: &LibError) -> ApiError {
    match error {
        LibError::Validation { .. } => ApiError::bad_request(error.to_string()),
        LibError::DuplicateName { .. } => ApiError::conflict(error.to_string()),
    }
}

impl From<LibError> for ApiError {
    fn from(error: LibError) -> Self {
        from_lib_error(&error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_new() {
        let error = ApiError::new("boom", StatusCode::IM_A_TEAPOT);
        assert_eq!(error.message, "boom");
        assert_eq!(error.status_code, 418);
        assert_eq!(error.status, "error");
    }

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::bad_request("Name should have at least 3 characters");
        let json = serde_json::to_string(&error).unwrap();

        assert!(json.contains("\"message\":\"Name should have at least 3 characters\""));
        assert!(json.contains("\"statusCode\":400"));
        assert!(json.contains("\"status\":\"error\""));
    }

    #[test]
    fn test_from_lib_error_validation() {
        let error = LibError::Validation {
            message: "Humility score must be at least 1".to_string(),
        };
        let api = from_lib_error(&error);

        assert_eq!(api.status_code, 400);
        assert_eq!(api.message, "Humility score must be at least 1");
    }

    #[test]
    fn test_from_lib_error_duplicate_name() {
        let error = LibError::DuplicateName {
            name: "Atlas".to_string(),
        };
        let api = from_lib_error(&error);

        assert_eq!(api.status_code, 409);
        assert_eq!(api.message, "Superhero with this name already exists");
    }

    #[test]
    fn test_into_response_carries_status() {
        let response = ApiError::conflict("dup").into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
