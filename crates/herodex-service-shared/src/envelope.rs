//! The JSON success envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Wrapper for successful responses: `{statusCode, data, status}`.
///
/// `status` carries a human-readable success message rather than a machine
/// tag, mirroring the error envelope's `message` field.
///
/// # Example
///
/// ```
/// use herodex_service_shared::ApiSuccess;
///
/// let body = ApiSuccess::ok(vec![1, 2, 3], "Numbers fetched successfully");
/// assert_eq!(body.status_code, 200);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSuccess<T> {
    /// HTTP status code for this response.
    pub status_code: u16,

    /// The actual response payload.
    pub data: T,

    /// Human-readable success message.
    pub status: String,
}

impl<T> ApiSuccess<T> {
    /// Create a success body with an explicit status code.
    pub fn new(status: StatusCode, data: T, message: impl Into<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            data,
            status: message.into(),
        }
    }

    /// Create a 200 OK success body.
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self::new(StatusCode::OK, data, message)
    }

    /// Create a 201 Created success body.
    pub fn created(data: T, message: impl Into<String>) -> Self {
        Self::new(StatusCode::CREATED, data, message)
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
